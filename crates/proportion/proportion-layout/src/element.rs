//! Per-child weight annotation and participant records.
//!
//! A child takes part in a proportion layout only when it carries a weight
//! annotation. "No annotation" and "weight zero" are different states:
//!
//! - `Candidate { weight: None, .. }` is skipped entirely.
//! - `Candidate { weight: Some(Weight::ZERO), .. }` participates with zero size.

use crate::config::DEFAULT_PROPORTION;
use crate::group::InvalidateLayout;
use crate::layout::MAX_CHILDREN;
use heapless::Vec;

/// Non-negative, finite layout weight.
///
/// Negative, NaN and infinite inputs are clamped to zero on construction.
/// Sums of weights are taken in `f64`, where any number of finite `f32`
/// weights stays finite.
///
/// # Examples
///
/// ```
/// use proportion_layout::element::Weight;
///
/// assert_eq!(Weight::new(2.5).get(), 2.5);
/// assert_eq!(Weight::new(-1.0).get(), 0.0);
/// assert_eq!(Weight::new(f32::NAN).get(), 0.0);
/// assert_eq!(Weight::default().get(), 1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32"))]
pub struct Weight(f32);

impl Weight {
    /// Zero weight: included in layout, receives zero size.
    pub const ZERO: Weight = Weight(0.0);

    /// Unit weight.
    pub const ONE: Weight = Weight(1.0);

    /// Creates a weight, clamping invalid input to zero.
    pub fn new(value: f32) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Returns the raw weight value.
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Returns `true` if this weight yields a zero-size child.
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(DEFAULT_PROPORTION)
    }
}

impl From<f32> for Weight {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// A child as reported by the host, before filtering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate<H> {
    /// Host handle used to address the child's rectangle.
    pub child: H,

    /// Host-reported enabled/visible state.
    pub active: bool,

    /// Weight annotation. `None` excludes the child from layout.
    pub weight: Option<Weight>,
}

impl<H> Candidate<H> {
    /// Creates an active candidate with the given weight annotation.
    pub fn new(child: H, weight: Option<f32>) -> Self {
        Self {
            child,
            active: true,
            weight: weight.map(Weight::new),
        }
    }

    /// Creates an active candidate carrying `weight`.
    pub fn weighted(child: H, weight: f32) -> Self {
        Self::new(child, Some(weight))
    }

    /// Creates an active candidate without a weight annotation.
    pub fn unweighted(child: H) -> Self {
        Self::new(child, None)
    }

    /// Builder method to set the active state.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns `true` if this candidate takes part in layout.
    pub fn participates(&self) -> bool {
        self.active && self.weight.is_some()
    }
}

/// A child selected for layout together with its weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Participant<H> {
    /// Host handle.
    pub child: H,

    /// Clamped weight.
    pub weight: Weight,
}

impl<H> Participant<H> {
    /// Creates a participant.
    pub fn new(child: H, weight: Weight) -> Self {
        Self { child, weight }
    }
}

/// Ordered participant list, rebuilt on every recomputation.
pub type Participants<H> = Vec<Participant<H>, MAX_CHILDREN>;

/// Tells the parent layout that a child annotation changed.
///
/// Hosts call this from their enable, disable and edit hooks. A missing
/// parent is not an error.
///
/// ```
/// use proportion_layout::element::notify_parent;
/// use proportion_layout::group::ProportionLayoutGroup;
///
/// let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::default();
/// let _ = group.compute();
/// assert!(!group.is_dirty());
///
/// notify_parent(Some(&mut group));
/// assert!(group.is_dirty());
///
/// notify_parent(None);
/// ```
pub fn notify_parent(parent: Option<&mut dyn InvalidateLayout>) {
    if let Some(parent) = parent {
        parent.mark_layout_for_rebuild();
    }
}
