//! Debug metadata attached to layout results

/// Intermediate values of the last primary pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutDiagnostics {
    /// Sum of clamped participant weights.
    pub total_weight: f64,

    /// `(participants - 1) * spacing`.
    pub total_spacing: f32,

    /// Primary extent shared among participants after padding and spacing.
    pub primary_available: f32,

    /// Extent every participant receives on the secondary axis.
    pub secondary_available: f32,

    /// Candidates that did not qualify (inactive or unweighted).
    pub excluded: usize,
}

impl LayoutDiagnostics {
    /// Returns `true` if the primary pass left sizes untouched.
    pub fn primary_was_noop(&self) -> bool {
        self.total_weight <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_noop() {
        let diagnostics = LayoutDiagnostics::default();
        assert!(diagnostics.primary_was_noop());
        assert_eq!(diagnostics.excluded, 0);
    }

    #[test]
    fn test_positive_weight_is_not_noop() {
        let diagnostics = LayoutDiagnostics {
            total_weight: 2.0,
            ..LayoutDiagnostics::default()
        };
        assert!(!diagnostics.primary_was_noop());
    }
}
