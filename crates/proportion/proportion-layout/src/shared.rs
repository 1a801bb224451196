//! Shared access to one layout instance
//!
//! The participant cache is written by the primary pass and read by the
//! secondary pass, so a recomputation must not interleave with another one.
//! [`SharedProportionLayout`] runs every operation inside a single
//! `embassy-sync` blocking mutex section.
//!
//! Pick the raw mutex to match the host: `NoopRawMutex` for a single
//! executor, `CriticalSectionRawMutex` when interrupts or other cores touch
//! the layout.
//!
//! # Example
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use proportion_layout::prelude::*;
//!
//! let shared: SharedProportionLayout<NoopRawMutex, u8> =
//!     SharedProportionLayout::new(ProportionLayoutGroup::vertical());
//!
//! shared.with(|group| {
//!     group.set_container_size(ContainerSize::new(40.0, 100.0));
//!     group.add_child(0, Some(1.0))
//! })??;
//!
//! let result = shared.compute()?;
//! assert_eq!(result.placement(0).and_then(|p| p.primary), Some(AxisSpan::new(0.0, 100.0)));
//! # Ok::<(), LayoutError>(())
//! ```

use crate::group::{InvalidateLayout, LayoutHost, ProportionLayoutGroup};
use crate::layout::{LayoutError, LayoutResult};
use core::cell::RefCell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// A [`ProportionLayoutGroup`] behind a blocking mutex.
pub struct SharedProportionLayout<M: RawMutex, H> {
    inner: Mutex<M, RefCell<ProportionLayoutGroup<H>>>,
}

impl<M: RawMutex, H: Copy + PartialEq> SharedProportionLayout<M, H> {
    /// Wraps `group`.
    pub fn new(group: ProportionLayoutGroup<H>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(group)),
        }
    }

    /// Runs `f` with exclusive access to the group.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Reentrant`] if called from inside another `with`
    /// section on the same instance.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut ProportionLayoutGroup<H>) -> R,
    ) -> Result<R, LayoutError> {
        self.inner.lock(|cell| {
            let mut group = cell.try_borrow_mut().map_err(|_| LayoutError::Reentrant)?;
            Ok(f(&mut group))
        })
    }

    /// Runs both passes against `host` in one lock section.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Reentrant`] on re-entrant access.
    pub fn layout<L>(&self, host: &mut L) -> Result<(), LayoutError>
    where
        L: LayoutHost<H> + ?Sized,
    {
        self.with(|group| group.layout(host))
    }

    /// Computes placements in one lock section.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Reentrant`] on re-entrant access.
    pub fn compute(&self) -> Result<LayoutResult<H>, LayoutError> {
        self.with(ProportionLayoutGroup::compute)
    }

    /// Marks the layout dirty.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Reentrant`] on re-entrant access.
    pub fn mark_layout_for_rebuild(&self) -> Result<(), LayoutError> {
        self.with(InvalidateLayout::mark_layout_for_rebuild)
    }

    /// Returns `true` if the participant cache is stale.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Reentrant`] on re-entrant access.
    pub fn is_dirty(&self) -> Result<bool, LayoutError> {
        self.with(|group| group.is_dirty())
    }
}
