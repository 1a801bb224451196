//! Geometry, parameters and results of a proportion layout pass.
//!
//! # Layout Passes
//!
//! A recomputation runs one pass per physical axis:
//!
//! 1. **Primary pass**: the container extent, minus padding and spacing, is
//!    partitioned among participants by weight.
//! 2. **Secondary pass**: every participant is stretched across the
//!    container extent minus padding.
//!
//! The passes may run in either order. Each produces [`AxisSpan`]s; a full
//! recomputation combines them into a [`LayoutResult`].
//!
//! ## Example
//!
//! ```rust
//! use proportion_layout::config::LayoutConfig;
//! use proportion_layout::layout::{ContainerSize, LayoutParams};
//! use proportion_layout::style::Axis;
//!
//! let params = LayoutParams::new(
//!     LayoutConfig::new().spacing(10.0),
//!     ContainerSize::new(300.0, 50.0),
//! );
//! assert_eq!(params.extent(Axis::Horizontal), 300.0);
//! assert_eq!(params.spacing, 10.0);
//! ```

use crate::config::LayoutConfig;
use crate::style::{Axis, AxisRole, Edges, LayoutDirection};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

#[cfg(feature = "debug")]
use crate::debug::LayoutDiagnostics;

/// Maximum number of children in a proportion layout.
///
/// This is a compile-time constant to enable `no_std` compatibility.
pub const MAX_CHILDREN: usize = 32;

/// Container size in host units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSize {
    /// Width of the container rectangle.
    pub width: f32,
    /// Height of the container rectangle.
    pub height: f32,
}

impl ContainerSize {
    /// Creates a container size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the container extent along `axis`.
    pub const fn extent(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

impl From<Size> for ContainerSize {
    #[allow(clippy::cast_precision_loss)] // display pixel counts are far below 2^24
    fn from(size: Size) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// Position and size along a single axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSpan {
    /// Offset from the container's leading edge.
    pub offset: f32,
    /// Extent along the axis.
    pub size: f32,
}

impl AxisSpan {
    /// Creates a span.
    pub const fn new(offset: f32, size: f32) -> Self {
        Self { offset, size }
    }

    /// Returns the trailing edge (`offset + size`).
    pub fn end(self) -> f32 {
        self.offset + self.size
    }

    /// Snaps the span to whole pixels, returning `(start, length)`.
    ///
    /// Both edges are rounded independently, so adjacent spans stay adjacent
    /// after snapping.
    ///
    /// ```
    /// use proportion_layout::layout::AxisSpan;
    ///
    /// assert_eq!(AxisSpan::new(0.0, 33.4).to_pixels(), (0, 33));
    /// assert_eq!(AxisSpan::new(33.4, 33.4).to_pixels(), (33, 34));
    /// ```
    #[allow(clippy::cast_possible_truncation)] // rounded display coordinates
    pub fn to_pixels(self) -> (i32, u32) {
        let start = libm::roundf(self.offset) as i32;
        let end = libm::roundf(self.end()) as i32;
        let length = u32::try_from(end.saturating_sub(start)).unwrap_or(0);
        (start, length)
    }
}

/// Inputs of one recomputation: configuration plus container size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutParams {
    /// Which physical axis receives the weighted partition.
    pub direction: LayoutDirection,
    /// Gap between consecutive children, `>= 0`.
    pub spacing: f32,
    /// Lay children out in reverse host order.
    pub reverse_order: bool,
    /// Container padding.
    pub padding: Edges,
    /// Container size.
    pub container: ContainerSize,
}

impl LayoutParams {
    /// Creates parameters from a configuration and a container size.
    ///
    /// The configuration is normalised first, so spacing is never negative.
    pub fn new(config: LayoutConfig, container: ContainerSize) -> Self {
        let config = config.normalized();
        Self {
            direction: config.direction,
            spacing: config.spacing,
            reverse_order: config.reverse_order,
            padding: config.padding,
            container,
        }
    }

    /// Returns the configuration part of these parameters.
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            direction: self.direction,
            spacing: self.spacing,
            reverse_order: self.reverse_order,
            padding: self.padding,
        }
    }

    /// Returns the container extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        self.container.extent(axis)
    }

    /// Returns the total padding along `axis` in host units.
    #[allow(clippy::cast_precision_loss)] // padding is a small pixel count
    pub fn padding_along(&self, axis: Axis) -> f32 {
        self.padding.along(axis) as f32
    }

    /// Returns the leading padding along `axis` in host units.
    #[allow(clippy::cast_precision_loss)] // padding is a small pixel count
    pub fn padding_start(&self, axis: Axis) -> f32 {
        self.padding.start(axis) as f32
    }

    /// Returns the role `axis` plays for the configured direction.
    pub fn role_of(&self, axis: Axis) -> AxisRole {
        self.direction.role_of(axis)
    }
}

/// Final placement of one participant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement<H> {
    /// Host handle.
    pub child: H,
    /// Span along the primary axis, `None` when the primary pass was a no-op.
    pub primary: Option<AxisSpan>,
    /// Span along the secondary axis.
    pub secondary: AxisSpan,
}

impl<H> Placement<H> {
    /// Returns the span along a physical axis.
    pub fn span(&self, axis: Axis, direction: LayoutDirection) -> Option<AxisSpan> {
        match direction.role_of(axis) {
            AxisRole::Primary => self.primary,
            AxisRole::Secondary => Some(self.secondary),
        }
    }

    /// Returns the pixel-snapped bounding rectangle.
    ///
    /// Returns `None` if the primary span was never assigned.
    pub fn bounds(&self, direction: LayoutDirection) -> Option<Rectangle> {
        let (x, width) = self.span(Axis::Horizontal, direction)?.to_pixels();
        let (y, height) = self.span(Axis::Vertical, direction)?.to_pixels();
        Some(Rectangle::new(Point::new(x, y), Size::new(width, height)))
    }
}

/// Result of a full recomputation (both axis passes).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult<H> {
    /// Direction the result was computed for.
    pub direction: LayoutDirection,
    /// Placements in participant order.
    pub placements: Vec<Placement<H>, MAX_CHILDREN>,
    /// Intermediate values of the primary pass.
    #[cfg(feature = "debug")]
    pub diagnostics: LayoutDiagnostics,
}

impl<H: Copy + PartialEq> LayoutResult<H> {
    /// Creates an empty result.
    pub fn new(direction: LayoutDirection) -> Self {
        Self {
            direction,
            placements: Vec::new(),
            #[cfg(feature = "debug")]
            diagnostics: LayoutDiagnostics::default(),
        }
    }

    /// Finds the placement of `child`.
    pub fn placement(&self, child: H) -> Option<&Placement<H>> {
        self.placements.iter().find(|p| p.child == child)
    }

    /// Returns the number of placed participants.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the sum of all assigned primary sizes.
    pub fn total_primary_size(&self) -> f32 {
        self.placements
            .iter()
            .filter_map(|p| p.primary)
            .map(|span| span.size)
            .sum()
    }

    /// Iterates over child handles in placement order.
    pub fn children(&self) -> impl Iterator<Item = H> + '_ {
        self.placements.iter().map(|p| p.child)
    }
}

/// Errors raised by layout bookkeeping.
///
/// Layout mathematics itself never fails; these cover child-list management
/// and shared access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// The child list is full.
    CapacityExceeded {
        /// Maximum number of children.
        capacity: usize,
    },
    /// The child handle is already in the layout.
    DuplicateChild,
    /// The child handle is not in the layout.
    UnknownChild,
    /// The shared layout was accessed from inside one of its own lock sections.
    Reentrant,
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "Layout child capacity ({capacity}) exceeded")
            }
            Self::DuplicateChild => write!(f, "Child is already part of the layout"),
            Self::UnknownChild => write!(f, "Child is not part of the layout"),
            Self::Reentrant => write!(f, "Layout accessed re-entrantly"),
        }
    }
}
