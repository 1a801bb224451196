//! Proportion Layout Testing Utilities
//!
//! Headless host for exercising a proportion layout the way a UI framework
//! would: every child owns a rectangle, passes write into it one axis at a
//! time, and tests assert on the resulting geometry.
//!
//! # Quick start
//!
//! ```
//! use proportion_layout::prelude::*;
//! use proportion_testing::{build_group, TestHost};
//!
//! let mut group = build_group(
//!     LayoutConfig::new(),
//!     ContainerSize::new(300.0, 40.0),
//!     &[(1_u32, Some(1.0)), (2, Some(3.0))],
//! )
//! .unwrap();
//!
//! let mut host = TestHost::new();
//! group.layout(&mut host);
//!
//! host.assert_span(1, Axis::Horizontal, AxisSpan::new(0.0, 75.0)).unwrap();
//! host.assert_span(2, Axis::Horizontal, AxisSpan::new(75.0, 225.0)).unwrap();
//! ```
//!
//! # Untouched rectangles
//!
//! Seed a rectangle before the pass to check that a child kept its previous
//! geometry:
//!
//! ```
//! # use proportion_layout::prelude::*;
//! # use proportion_testing::{build_group, HostRect, TestHost};
//! let mut group = build_group(
//!     LayoutConfig::new(),
//!     ContainerSize::new(300.0, 40.0),
//!     &[(1_u32, None)],
//! )
//! .unwrap();
//!
//! let mut host = TestHost::new();
//! host.seed(1, HostRect::new(5.0, 5.0, 20.0, 20.0));
//! group.layout(&mut host);
//! host.assert_untouched(1).unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
// Assertion messages print handles and spans with {:?}.
#![allow(clippy::use_debug)]

use core::fmt::Debug;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use proportion_layout::prelude::*;

/// Default tolerance for floating-point geometry assertions.
pub const EPSILON: f32 = 1e-3;

// ─────────────────────────────────────────────────────────────────────────────
// HostRect
// ─────────────────────────────────────────────────────────────────────────────

/// A child's rectangle in host units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl HostRect {
    /// Creates a rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the span along `axis`.
    pub fn span(&self, axis: Axis) -> AxisSpan {
        match axis {
            Axis::Horizontal => AxisSpan::new(self.x, self.width),
            Axis::Vertical => AxisSpan::new(self.y, self.height),
        }
    }

    /// Overwrites the span along `axis`.
    pub fn set_span(&mut self, axis: Axis, span: AxisSpan) {
        match axis {
            Axis::Horizontal => {
                self.x = span.offset;
                self.width = span.size;
            }
            Axis::Vertical => {
                self.y = span.offset;
                self.height = span.size;
            }
        }
    }

    /// Pixel-snapped rectangle.
    pub fn bounds(&self) -> Rectangle {
        let (x, width) = self.span(Axis::Horizontal).to_pixels();
        let (y, height) = self.span(Axis::Vertical).to_pixels();
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }
}

/// One `set_child_along_axis` call as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCall<H> {
    /// Target child.
    pub child: H,
    /// Axis the pass ran on.
    pub axis: Axis,
    /// Applied span.
    pub span: AxisSpan,
}

// ─────────────────────────────────────────────────────────────────────────────
// TestHost
// ─────────────────────────────────────────────────────────────────────────────

/// Headless layout host that records every write.
///
/// Children without a rectangle get a zeroed one on first write. Seeded
/// rectangles keep their value until a pass writes to them, which is what
/// [`assert_untouched`](Self::assert_untouched) checks.
#[derive(Debug, Clone)]
pub struct TestHost<H> {
    rects: Vec<(H, HostRect)>,
    seeded: Vec<(H, HostRect)>,
    calls: Vec<AxisCall<H>>,
}

impl<H: Copy + PartialEq + Debug> TestHost<H> {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self {
            rects: Vec::new(),
            seeded: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Gives `child` an initial rectangle.
    pub fn seed(&mut self, child: H, rect: HostRect) {
        self.update_rect(child, |r| *r = rect);
        match self.seeded.iter_mut().find(|(c, _)| *c == child) {
            Some((_, seeded)) => *seeded = rect,
            None => self.seeded.push((child, rect)),
        }
    }

    /// Returns the current rectangle of `child`.
    pub fn rect(&self, child: H) -> Option<HostRect> {
        self.rects
            .iter()
            .find(|(c, _)| *c == child)
            .map(|(_, rect)| *rect)
    }

    /// Returns every call in order.
    pub fn calls(&self) -> &[AxisCall<H>] {
        &self.calls
    }

    /// Returns the calls made along `axis`, in order.
    pub fn calls_along(&self, axis: Axis) -> Vec<AxisCall<H>> {
        self.calls.iter().copied().filter(|c| c.axis == axis).collect()
    }

    /// Returns the children written along `axis`, in call order.
    pub fn order_along(&self, axis: Axis) -> Vec<H> {
        self.calls_along(axis).iter().map(|c| c.child).collect()
    }

    /// Forgets recorded calls, keeping rectangles.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Returns `true` if any pass wrote to `child`.
    pub fn touched(&self, child: H) -> bool {
        self.calls.iter().any(|c| c.child == child)
    }

    fn update_rect(&mut self, child: H, f: impl FnOnce(&mut HostRect)) {
        match self.rects.iter_mut().find(|(c, _)| *c == child) {
            Some((_, rect)) => f(rect),
            None => {
                let mut rect = HostRect::default();
                f(&mut rect);
                self.rects.push((child, rect));
            }
        }
    }

    // ── Assertions ───────────────────────────────────────────────────────────

    /// Assert that `child`'s span along `axis` matches within [`EPSILON`].
    pub fn assert_span(&self, child: H, axis: Axis, expected: AxisSpan) -> Result<(), String> {
        let actual = self
            .rect(child)
            .ok_or_else(|| format!("Child {child:?} has no rectangle"))?
            .span(axis);
        if approx_eq(actual.offset, expected.offset) && approx_eq(actual.size, expected.size) {
            Ok(())
        } else {
            Err(format!(
                "assert_span({child:?}, {axis:?}): expected {expected:?}, got {actual:?}"
            ))
        }
    }

    /// Assert that `child`'s size along `axis` matches within [`EPSILON`].
    pub fn assert_size(&self, child: H, axis: Axis, expected: f32) -> Result<(), String> {
        let actual = self
            .rect(child)
            .ok_or_else(|| format!("Child {child:?} has no rectangle"))?
            .span(axis)
            .size;
        if approx_eq(actual, expected) {
            Ok(())
        } else {
            Err(format!(
                "assert_size({child:?}, {axis:?}): expected {expected}, got {actual}"
            ))
        }
    }

    /// Assert that the sizes of `children` along `axis` add up to `expected`.
    pub fn assert_sizes_sum(&self, children: &[H], axis: Axis, expected: f32) -> Result<(), String> {
        let mut total = 0.0;
        for child in children {
            total += self
                .rect(*child)
                .ok_or_else(|| format!("Child {child:?} has no rectangle"))?
                .span(axis)
                .size;
        }
        if approx_eq(total, expected) {
            Ok(())
        } else {
            Err(format!(
                "assert_sizes_sum({axis:?}): expected {expected}, got {total}"
            ))
        }
    }

    /// Assert that no pass wrote to `child` and its seeded rectangle (if any)
    /// is exactly as it was.
    pub fn assert_untouched(&self, child: H) -> Result<(), String> {
        if self.touched(child) {
            return Err(format!("assert_untouched({child:?}): child was written"));
        }
        let seeded = self
            .seeded
            .iter()
            .find(|(c, _)| *c == child)
            .map(|(_, rect)| *rect);
        if seeded == self.rect(child) {
            Ok(())
        } else {
            Err(format!(
                "assert_untouched({child:?}): expected {seeded:?}, got {:?}",
                self.rect(child)
            ))
        }
    }

    /// Assert that nothing was written along `axis`.
    pub fn assert_no_calls_along(&self, axis: Axis) -> Result<(), String> {
        let calls = self.calls_along(axis);
        if calls.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "assert_no_calls_along({axis:?}): {} call(s) recorded",
                calls.len()
            ))
        }
    }
}

impl<H: Copy + PartialEq + Debug> Default for TestHost<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + PartialEq + Debug> LayoutHost<H> for TestHost<H> {
    fn set_child_along_axis(&mut self, child: H, axis: Axis, span: AxisSpan) {
        self.update_rect(child, |rect| rect.set_span(axis, span));
        self.calls.push(AxisCall { child, axis, span });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Compares two host-unit values within [`EPSILON`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Builds a group with `children` given as `(handle, weight)` pairs, in host
/// order.
///
/// # Errors
///
/// Propagates [`LayoutError`] from adding children.
pub fn build_group<H: Copy + PartialEq>(
    config: LayoutConfig,
    container: ContainerSize,
    children: &[(H, Option<f32>)],
) -> Result<ProportionLayoutGroup<H>, LayoutError> {
    let mut group = ProportionLayoutGroup::new(config);
    group.set_container_size(container);
    for (child, weight) in children {
        group.add_child(*child, *weight)?;
    }
    Ok(group)
}
