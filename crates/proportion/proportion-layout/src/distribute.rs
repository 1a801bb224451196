//! Weighted axis distribution
//!
//! Computes per-participant spans along one physical axis.
//!
//! # Algorithm
//!
//! **Primary axis** (weighted partition):
//!
//! 1. `W` = sum of participant weights. No participants or `W <= 0`: no-op.
//! 2. `total_spacing = (n - 1) * spacing`
//! 3. `available = max(0, extent - padding - total_spacing)`
//! 4. Walk participants from the leading padding edge:
//!    `size = weight / W * available`, then advance by `size + spacing`.
//!
//! **Secondary axis** (uniform fill): every participant gets
//! `(padding.start, max(0, extent - padding))`.
//!
//! # Example
//!
//! ```
//! use proportion_layout::config::LayoutConfig;
//! use proportion_layout::distribute::AxisDistributor;
//! use proportion_layout::element::{Candidate, Participants};
//! use proportion_layout::layout::{AxisSpan, ContainerSize, LayoutParams};
//! use proportion_layout::selector::ChildSelector;
//! use proportion_layout::style::Axis;
//!
//! let children = [Candidate::weighted(0_u8, 1.0), Candidate::weighted(1, 1.0)];
//! let participants = ChildSelector::select(&children, false);
//! let params = LayoutParams::new(
//!     LayoutConfig::new().spacing(10.0),
//!     ContainerSize::new(300.0, 40.0),
//! );
//!
//! let pass = AxisDistributor::distribute(&participants, Axis::Horizontal, &params);
//! let spans: Vec<AxisSpan> = pass.spans.iter().map(|(_, span)| *span).collect();
//! assert_eq!(spans, [AxisSpan::new(0.0, 145.0), AxisSpan::new(155.0, 145.0)]);
//! ```

use crate::element::Participant;
use crate::layout::{AxisSpan, LayoutParams, MAX_CHILDREN};
use crate::style::{Axis, AxisRole};
use heapless::Vec;

/// Spans produced by one axis pass.
///
/// An empty `spans` list on the primary axis means the pass was a no-op and
/// children keep whatever size they had.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPass<H> {
    /// Physical axis of this pass.
    pub axis: Axis,
    /// Role of the axis for the configured direction.
    pub role: AxisRole,
    /// `(child, span)` pairs in participant order.
    pub spans: Vec<(H, AxisSpan), MAX_CHILDREN>,
}

impl<H: Copy + PartialEq> AxisPass<H> {
    /// Creates an empty pass.
    pub fn empty(axis: Axis, role: AxisRole) -> Self {
        Self {
            axis,
            role,
            spans: Vec::new(),
        }
    }

    /// Returns `true` if the pass assigns nothing.
    pub fn is_noop(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the span assigned to `child`.
    pub fn span_of(&self, child: H) -> Option<AxisSpan> {
        self.spans
            .iter()
            .find(|(handle, _)| *handle == child)
            .map(|(_, span)| *span)
    }
}

/// Stateless per-axis span calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisDistributor;

impl AxisDistributor {
    /// Sum of participant weights, accumulated in `f64`.
    ///
    /// Weights are finite and `>= 0`, but two near `f32::MAX` would overflow
    /// an `f32` sum to infinity.
    pub fn total_weight<H>(participants: &[Participant<H>]) -> f64 {
        bounded(participants)
            .iter()
            .map(|p| f64::from(p.weight.get()))
            .sum()
    }

    /// Spacing consumed between `count` participants.
    #[allow(clippy::cast_precision_loss)] // count <= MAX_CHILDREN
    pub fn total_spacing(count: usize, spacing: f32) -> f32 {
        count.saturating_sub(1) as f32 * crate::config::clamp_spacing(spacing)
    }

    /// Primary-axis extent shared among `count` participants.
    pub fn primary_available(count: usize, axis: Axis, params: &LayoutParams) -> f32 {
        let count = count.min(MAX_CHILDREN);
        let inner = params.extent(axis) - params.padding_along(axis);
        (inner - Self::total_spacing(count, params.spacing)).max(0.0)
    }

    /// Secondary-axis extent every participant receives.
    pub fn secondary_available(axis: Axis, params: &LayoutParams) -> f32 {
        (params.extent(axis) - params.padding_along(axis)).max(0.0)
    }

    /// Runs the pass for `axis`, choosing the primary or secondary algorithm
    /// from the configured direction.
    pub fn distribute<H: Copy + PartialEq>(
        participants: &[Participant<H>],
        axis: Axis,
        params: &LayoutParams,
    ) -> AxisPass<H> {
        match params.role_of(axis) {
            AxisRole::Primary => Self::distribute_primary(participants, axis, params),
            AxisRole::Secondary => Self::distribute_secondary(participants, axis, params),
        }
    }

    /// Weighted partition along `axis`.
    pub fn distribute_primary<H: Copy + PartialEq>(
        participants: &[Participant<H>],
        axis: Axis,
        params: &LayoutParams,
    ) -> AxisPass<H> {
        let mut pass = AxisPass::empty(axis, AxisRole::Primary);
        let participants = bounded(participants);

        let total_weight = Self::total_weight(participants);
        if participants.is_empty() || total_weight <= 0.0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("primary pass skipped: {} participants, total weight {}", participants.len(), total_weight);
            #[cfg(feature = "tracing")]
            tracing::trace!(participants = participants.len(), total_weight, "primary pass skipped");
            return pass;
        }

        let spacing = crate::config::clamp_spacing(params.spacing);
        let available = Self::primary_available(participants.len(), axis, params);
        let mut position = params.padding_start(axis);

        for participant in participants {
            let size = share(participant.weight.get(), total_weight, available);
            // Participants never outnumber the span capacity.
            let _ = pass
                .spans
                .push((participant.child, AxisSpan::new(position, size)));
            // Spacing also follows the last child; nothing reads past it.
            position += size + spacing;
        }

        pass
    }

    /// Uniform fill along `axis`.
    pub fn distribute_secondary<H: Copy + PartialEq>(
        participants: &[Participant<H>],
        axis: Axis,
        params: &LayoutParams,
    ) -> AxisPass<H> {
        let mut pass = AxisPass::empty(axis, AxisRole::Secondary);
        let span = AxisSpan::new(
            params.padding_start(axis),
            Self::secondary_available(axis, params),
        );

        for participant in bounded(participants) {
            let _ = pass.spans.push((participant.child, span));
        }

        pass
    }
}

/// Limits `participants` to the span capacity, warning when anything is cut.
fn bounded<H>(participants: &[Participant<H>]) -> &[Participant<H>] {
    match participants.get(..MAX_CHILDREN) {
        Some(head) if head.len() < participants.len() => {
            #[cfg(feature = "defmt")]
            defmt::warn!("axis pass full, ignoring participants past {}", MAX_CHILDREN);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                capacity = MAX_CHILDREN,
                participants = participants.len(),
                "axis pass full, ignoring participants"
            );
            head
        }
        _ => participants,
    }
}

/// `weight / total * available`, computed in `f64`.
#[allow(clippy::cast_possible_truncation)] // the share is at most `available`
fn share(weight: f32, total: f64, available: f32) -> f32 {
    (f64::from(weight) / total * f64::from(available)) as f32
}
