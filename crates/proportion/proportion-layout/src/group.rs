//! Proportion layout group
//!
//! [`ProportionLayoutGroup`] is the stateful side of the layout: it owns the
//! configuration, the host's child list, the cached participant selection and
//! a dirty flag. The host drives it with one pass per physical axis and
//! receives results through [`LayoutHost`].
//!
//! # Pass order
//!
//! Hosts may run the horizontal and vertical passes in either order. The
//! participant cache is rebuilt when it is dirty, or when the pass is the
//! primary-axis pass, and reused by the paired secondary pass.
//!
//! # Example
//!
//! ```
//! use proportion_layout::prelude::*;
//!
//! #[derive(Default)]
//! struct Host {
//!     widths: [f32; 2],
//! }
//!
//! impl LayoutHost<usize> for Host {
//!     fn set_child_along_axis(&mut self, child: usize, axis: Axis, span: AxisSpan) {
//!         if axis == Axis::Horizontal {
//!             self.widths[child] = span.size;
//!         }
//!     }
//! }
//!
//! let mut group = ProportionLayoutGroup::horizontal();
//! group.set_container_size(ContainerSize::new(200.0, 20.0));
//! group.add_child(0, Some(1.0))?;
//! group.add_child(1, Some(3.0))?;
//!
//! let mut host = Host::default();
//! group.layout(&mut host);
//! assert_eq!(host.widths, [50.0, 150.0]);
//! # Ok::<(), LayoutError>(())
//! ```

use crate::config::{clamp_spacing, LayoutConfig};
use crate::distribute::{AxisDistributor, AxisPass};
use crate::element::{Candidate, Participant, Participants, Weight};
use crate::layout::{
    AxisSpan, ContainerSize, LayoutError, LayoutParams, LayoutResult, Placement, MAX_CHILDREN,
};
use crate::selector::ChildSelector;
use crate::style::{Axis, AxisRole, Edges, LayoutDirection};
use heapless::Vec;

/// Receives computed spans for participating children.
///
/// Non-participating children are never passed to the host.
pub trait LayoutHost<H> {
    /// Sets `child`'s rectangle along `axis` to `span`.
    fn set_child_along_axis(&mut self, child: H, axis: Axis, span: AxisSpan);
}

/// "Mark dirty" capability.
///
/// Hosts wire component lifecycle events (enable, disable, property edits)
/// to this so the next pass recomputes.
pub trait InvalidateLayout {
    /// Requests a rebuild on the next layout pass.
    fn mark_layout_for_rebuild(&mut self);
}

/// Assigns `value` to `slot`, returning `true` if it changed.
fn set_property<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Weighted layout container.
///
/// `H` is the host's child handle, e.g. an index or an entity id.
#[derive(Debug, Clone)]
pub struct ProportionLayoutGroup<H> {
    config: LayoutConfig,
    container: ContainerSize,
    children: Vec<Candidate<H>, MAX_CHILDREN>,
    participants: Participants<H>,
    dirty: bool,
}

impl<H: Copy + PartialEq> ProportionLayoutGroup<H> {
    /// Creates an empty group with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.normalized(),
            container: ContainerSize::default(),
            children: Vec::new(),
            participants: Participants::new(),
            dirty: true,
        }
    }

    /// Creates an empty horizontal group.
    pub fn horizontal() -> Self {
        Self::new(LayoutConfig::new().direction(LayoutDirection::Horizontal))
    }

    /// Creates an empty vertical group.
    pub fn vertical() -> Self {
        Self::new(LayoutConfig::new().direction(LayoutDirection::Vertical))
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Returns the current configuration.
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if set_property(&mut self.config, config.normalized()) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.config.direction
    }

    /// Sets the layout direction.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        if set_property(&mut self.config.direction, direction) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the spacing between children.
    pub fn spacing(&self) -> f32 {
        self.config.spacing
    }

    /// Sets the spacing between children. Negative input is clamped to zero.
    pub fn set_spacing(&mut self, spacing: f32) {
        if set_property(&mut self.config.spacing, clamp_spacing(spacing)) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns `true` if children are laid out in reverse host order.
    pub fn reverse_order(&self) -> bool {
        self.config.reverse_order
    }

    /// Sets reverse ordering.
    pub fn set_reverse_order(&mut self, reverse_order: bool) {
        if set_property(&mut self.config.reverse_order, reverse_order) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the container padding.
    pub fn padding(&self) -> Edges {
        self.config.padding
    }

    /// Sets the container padding.
    pub fn set_padding(&mut self, padding: Edges) {
        if set_property(&mut self.config.padding, padding) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the container size.
    pub fn container_size(&self) -> ContainerSize {
        self.container
    }

    /// Sets the container size (host resize).
    pub fn set_container_size(&mut self, container: ContainerSize) {
        if set_property(&mut self.container, container) {
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the parameters the next pass will use.
    pub fn params(&self) -> LayoutParams {
        LayoutParams::new(self.config, self.container)
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    /// Appends an active child. `weight == None` keeps it out of layout
    /// until a weight is set.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DuplicateChild`] if `child` is already present,
    /// [`LayoutError::CapacityExceeded`] if the group is full.
    pub fn add_child(&mut self, child: H, weight: Option<f32>) -> Result<(), LayoutError> {
        self.push_candidate(Candidate::new(child, weight))
    }

    /// Appends a candidate as reported by the host.
    ///
    /// # Errors
    ///
    /// Same as [`add_child`](Self::add_child).
    pub fn push_candidate(&mut self, candidate: Candidate<H>) -> Result<(), LayoutError> {
        if self.position(candidate.child).is_some() {
            return Err(LayoutError::DuplicateChild);
        }
        self.children
            .push(candidate)
            .map_err(|_| LayoutError::CapacityExceeded {
                capacity: MAX_CHILDREN,
            })?;
        self.mark_layout_for_rebuild();
        Ok(())
    }

    /// Removes a child, returning its last known state.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownChild`] if `child` is not present.
    pub fn remove_child(&mut self, child: H) -> Result<Candidate<H>, LayoutError> {
        let index = self.position(child).ok_or(LayoutError::UnknownChild)?;
        let removed = self.children.remove(index);
        self.mark_layout_for_rebuild();
        Ok(removed)
    }

    /// Sets or clears a child's weight annotation.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownChild`] if `child` is not present.
    pub fn set_child_weight(&mut self, child: H, weight: Option<f32>) -> Result<(), LayoutError> {
        let candidate = self.candidate_mut(child)?;
        if set_property(&mut candidate.weight, weight.map(Weight::new)) {
            self.mark_layout_for_rebuild();
        }
        Ok(())
    }

    /// Sets a child's active state.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownChild`] if `child` is not present.
    pub fn set_child_active(&mut self, child: H, active: bool) -> Result<(), LayoutError> {
        let candidate = self.candidate_mut(child)?;
        if set_property(&mut candidate.active, active) {
            self.mark_layout_for_rebuild();
        }
        Ok(())
    }

    /// Removes every child.
    pub fn clear_children(&mut self) {
        if !self.children.is_empty() {
            self.children.clear();
            self.mark_layout_for_rebuild();
        }
    }

    /// Returns the host child list in host order.
    pub fn children(&self) -> &[Candidate<H>] {
        &self.children
    }

    /// Returns the candidate for `child`.
    pub fn child(&self, child: H) -> Option<&Candidate<H>> {
        self.children.iter().find(|c| c.child == child)
    }

    /// Returns the cached participant list from the last rebuild.
    pub fn participants(&self) -> &[Participant<H>] {
        &self.participants
    }

    fn position(&self, child: H) -> Option<usize> {
        self.children.iter().position(|c| c.child == child)
    }

    fn candidate_mut(&mut self, child: H) -> Result<&mut Candidate<H>, LayoutError> {
        self.children
            .iter_mut()
            .find(|c| c.child == child)
            .ok_or(LayoutError::UnknownChild)
    }

    // ------------------------------------------------------------------
    // Passes
    // ------------------------------------------------------------------

    /// Returns `true` if inputs changed since the participant cache was
    /// last rebuilt.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuilds the participant cache from the current child list.
    pub fn calculate_layout_input(&mut self) {
        self.participants = ChildSelector::select(&self.children, self.config.reverse_order);
        self.dirty = false;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "participants rebuilt: {} of {} children",
            self.participants.len(),
            self.children.len()
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            participants = self.participants.len(),
            children = self.children.len(),
            "participants rebuilt"
        );
    }

    /// Runs the pass for `axis` and applies it to `host`.
    ///
    /// Returns the applied spans. A primary pass with no participants or a
    /// zero total weight applies nothing.
    pub fn set_layout<L>(&mut self, axis: Axis, host: &mut L) -> AxisPass<H>
    where
        L: LayoutHost<H> + ?Sized,
    {
        let pass = self.run_pass(axis);
        for (child, span) in &pass.spans {
            host.set_child_along_axis(*child, axis, *span);
        }
        pass
    }

    /// Runs the horizontal pass.
    pub fn set_layout_horizontal<L>(&mut self, host: &mut L) -> AxisPass<H>
    where
        L: LayoutHost<H> + ?Sized,
    {
        self.set_layout(Axis::Horizontal, host)
    }

    /// Runs the vertical pass.
    pub fn set_layout_vertical<L>(&mut self, host: &mut L) -> AxisPass<H>
    where
        L: LayoutHost<H> + ?Sized,
    {
        self.set_layout(Axis::Vertical, host)
    }

    /// Runs both passes, horizontal first.
    pub fn layout<L>(&mut self, host: &mut L)
    where
        L: LayoutHost<H> + ?Sized,
    {
        for axis in Axis::ALL {
            self.set_layout(axis, host);
        }
    }

    /// Runs both passes without a host and returns the combined placements.
    pub fn compute(&mut self) -> LayoutResult<H> {
        let direction = self.config.direction;
        let primary = self.run_pass(direction.primary_axis());
        let secondary = self.run_pass(direction.secondary_axis());

        let mut result = LayoutResult::new(direction);
        for (index, (child, span)) in secondary.spans.iter().enumerate() {
            let placement = Placement {
                child: *child,
                primary: primary.spans.get(index).map(|(_, span)| *span),
                secondary: *span,
            };
            // Secondary spans never outnumber the placement capacity.
            let _ = result.placements.push(placement);
        }

        #[cfg(feature = "debug")]
        {
            let params = self.params();
            let count = self.participants.len();
            result.diagnostics = crate::debug::LayoutDiagnostics {
                total_weight: AxisDistributor::total_weight(&self.participants),
                total_spacing: AxisDistributor::total_spacing(count, params.spacing),
                primary_available: AxisDistributor::primary_available(
                    count,
                    direction.primary_axis(),
                    &params,
                ),
                secondary_available: AxisDistributor::secondary_available(
                    direction.secondary_axis(),
                    &params,
                ),
                excluded: self.children.len().saturating_sub(count),
            };
        }

        result
    }

    fn run_pass(&mut self, axis: Axis) -> AxisPass<H> {
        let params = self.params();
        if self.dirty || params.role_of(axis) == AxisRole::Primary {
            self.calculate_layout_input();
        }
        AxisDistributor::distribute(&self.participants, axis, &params)
    }
}

impl<H> InvalidateLayout for ProportionLayoutGroup<H> {
    fn mark_layout_for_rebuild(&mut self) {
        self.dirty = true;
    }
}

impl<H: Copy + PartialEq> Default for ProportionLayoutGroup<H> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingHost {
        calls: std::vec::Vec<(u8, Axis, AxisSpan)>,
    }

    impl LayoutHost<u8> for RecordingHost {
        fn set_child_along_axis(&mut self, child: u8, axis: Axis, span: AxisSpan) {
            self.calls.push((child, axis, span));
        }
    }

    fn group_300x50(weights: &[Option<f32>]) -> ProportionLayoutGroup<u8> {
        let mut group = ProportionLayoutGroup::horizontal();
        group.set_container_size(ContainerSize::new(300.0, 50.0));
        for (i, weight) in (0_u8..).zip(weights) {
            group.add_child(i, *weight).unwrap();
        }
        group
    }

    #[test]
    fn test_new_group_is_dirty() {
        let group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::default();
        assert!(group.is_dirty());
        assert!(group.participants().is_empty());
    }

    #[test]
    fn test_setters_mark_dirty_only_on_change() {
        let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::horizontal();
        group.calculate_layout_input();
        assert!(!group.is_dirty());

        group.set_direction(LayoutDirection::Horizontal);
        group.set_spacing(0.0);
        group.set_reverse_order(false);
        group.set_padding(Edges::ZERO);
        assert!(!group.is_dirty());

        group.set_spacing(4.0);
        assert!(group.is_dirty());
    }

    #[test]
    fn test_each_property_marks_dirty() {
        let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::horizontal();
        let edits: [fn(&mut ProportionLayoutGroup<u8>); 5] = [
            |g| g.set_direction(LayoutDirection::Vertical),
            |g| g.set_spacing(2.0),
            |g| g.set_reverse_order(true),
            |g| g.set_padding(Edges::all(1)),
            |g| g.set_container_size(ContainerSize::new(10.0, 10.0)),
        ];
        for edit in edits {
            group.calculate_layout_input();
            edit(&mut group);
            assert!(group.is_dirty());
        }
    }

    #[test]
    fn test_negative_spacing_is_clamped() {
        let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::horizontal();
        group.set_spacing(-8.0);
        assert_eq!(group.spacing(), 0.0);
    }

    #[test]
    fn test_add_duplicate_child() {
        let mut group = group_300x50(&[Some(1.0)]);
        assert_eq!(group.add_child(0, Some(2.0)), Err(LayoutError::DuplicateChild));
    }

    #[test]
    fn test_add_child_past_capacity() {
        let mut group: ProportionLayoutGroup<usize> = ProportionLayoutGroup::horizontal();
        for i in 0..MAX_CHILDREN {
            group.add_child(i, Some(1.0)).unwrap();
        }
        assert_eq!(
            group.add_child(MAX_CHILDREN, Some(1.0)),
            Err(LayoutError::CapacityExceeded {
                capacity: MAX_CHILDREN
            })
        );
    }

    #[test]
    fn test_unknown_child_errors() {
        let mut group = group_300x50(&[Some(1.0)]);
        assert_eq!(group.remove_child(9), Err(LayoutError::UnknownChild));
        assert_eq!(group.set_child_weight(9, Some(1.0)), Err(LayoutError::UnknownChild));
        assert_eq!(group.set_child_active(9, false), Err(LayoutError::UnknownChild));
    }

    #[test]
    fn test_remove_child_preserves_order() {
        let mut group = group_300x50(&[Some(1.0), Some(1.0), Some(1.0)]);
        let removed = group.remove_child(1).unwrap();
        assert_eq!(removed.child, 1);
        let order: std::vec::Vec<u8> = group.children().iter().map(|c| c.child).collect();
        assert_eq!(order, [0, 2]);
    }

    #[test]
    fn test_layout_applies_both_axes() {
        let mut group = group_300x50(&[Some(1.0), Some(3.0)]);
        let mut host = RecordingHost::default();
        group.layout(&mut host);

        assert_eq!(
            host.calls,
            [
                (0, Axis::Horizontal, AxisSpan::new(0.0, 75.0)),
                (1, Axis::Horizontal, AxisSpan::new(75.0, 225.0)),
                (0, Axis::Vertical, AxisSpan::new(0.0, 50.0)),
                (1, Axis::Vertical, AxisSpan::new(0.0, 50.0)),
            ]
        );
    }

    #[test]
    fn test_secondary_pass_first_rebuilds_dirty_cache() {
        let mut group = group_300x50(&[Some(1.0), Some(1.0)]);
        let mut host = RecordingHost::default();
        let pass = group.set_layout_vertical(&mut host);
        assert_eq!(pass.role, AxisRole::Secondary);
        assert_eq!(pass.spans.len(), 2);
        assert!(!group.is_dirty());
    }

    #[test]
    fn test_secondary_pass_reuses_cache() {
        let mut group = group_300x50(&[Some(1.0), Some(1.0)]);
        let mut host = RecordingHost::default();
        group.set_layout_horizontal(&mut host);

        // Bypass the mutators so nothing marks the group dirty.
        group.children.clear();
        let pass = group.set_layout_vertical(&mut host);
        assert_eq!(pass.spans.len(), 2);

        let pass = group.set_layout_horizontal(&mut host);
        assert!(pass.is_noop());
    }

    #[test]
    fn test_zero_total_weight_leaves_primary_untouched() {
        let mut group = group_300x50(&[Some(0.0), Some(0.0)]);
        let mut host = RecordingHost::default();
        let pass = group.set_layout_horizontal(&mut host);
        assert!(pass.is_noop());
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_unweighted_and_inactive_children_untouched() {
        let mut group = group_300x50(&[Some(1.0), None, Some(1.0)]);
        group.set_child_active(2, false).unwrap();
        let mut host = RecordingHost::default();
        group.layout(&mut host);
        assert!(host.calls.iter().all(|(child, _, _)| *child == 0));
        assert_eq!(host.calls.len(), 2);
    }

    #[test]
    fn test_weight_edit_takes_effect() {
        let mut group = group_300x50(&[Some(1.0), Some(1.0)]);
        let _ = group.compute();
        group.set_child_weight(1, Some(2.0)).unwrap();
        assert!(group.is_dirty());

        let result = group.compute();
        let sizes: std::vec::Vec<f32> = result
            .placements
            .iter()
            .filter_map(|p| p.primary.map(|s| s.size))
            .collect();
        assert_eq!(sizes, [100.0, 200.0]);
    }

    #[test]
    fn test_clearing_weight_excludes_child() {
        let mut group = group_300x50(&[Some(1.0), Some(1.0)]);
        group.set_child_weight(0, None).unwrap();
        let result = group.compute();
        assert_eq!(result.children().collect::<std::vec::Vec<_>>(), [1]);
        assert_eq!(
            result.placement(1).and_then(|p| p.primary),
            Some(AxisSpan::new(0.0, 300.0))
        );
    }

    #[test]
    fn test_compute_without_primary() {
        let mut group = group_300x50(&[Some(0.0)]);
        let result = group.compute();
        assert_eq!(result.len(), 1);
        let placement = result.placement(0).unwrap();
        assert_eq!(placement.primary, None);
        assert_eq!(placement.secondary, AxisSpan::new(0.0, 50.0));
    }

    #[test]
    fn test_set_config_normalizes() {
        let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::horizontal();
        group.set_config(LayoutConfig {
            spacing: -1.0,
            ..LayoutConfig::new()
        });
        assert_eq!(group.spacing(), 0.0);
    }

    #[cfg(feature = "debug")]
    #[test]
    fn test_compute_diagnostics() {
        let mut group = group_300x50(&[Some(1.0), None, Some(3.0)]);
        group.set_spacing(10.0);
        let result = group.compute();
        assert_eq!(result.diagnostics.total_weight, 4.0);
        assert_eq!(result.diagnostics.total_spacing, 10.0);
        assert_eq!(result.diagnostics.primary_available, 290.0);
        assert_eq!(result.diagnostics.secondary_available, 50.0);
        assert_eq!(result.diagnostics.excluded, 1);
    }
}
