//! Layout configuration and defaults
//!
//! [`LayoutConfig`] is the editable surface of a proportion layout: the
//! properties a host inspector exposes. Every setter on
//! [`ProportionLayoutGroup`](crate::group::ProportionLayoutGroup) that touches
//! one of these fields marks the layout dirty.

use crate::style::{Edges, LayoutDirection};

/// Weight given to a child when its annotation is created without a value.
pub const DEFAULT_PROPORTION: f32 = 1.0;

/// Default gap between consecutive children along the primary axis.
pub const DEFAULT_SPACING: f32 = 0.0;

/// Clamps a spacing value to `>= 0`. NaN becomes zero.
///
/// ```
/// use proportion_layout::config::clamp_spacing;
///
/// assert_eq!(clamp_spacing(4.0), 4.0);
/// assert_eq!(clamp_spacing(-4.0), 0.0);
/// assert_eq!(clamp_spacing(f32::NAN), 0.0);
/// ```
pub fn clamp_spacing(spacing: f32) -> f32 {
    // f32::max returns the non-NaN operand.
    spacing.max(0.0)
}

/// Editable configuration of a proportion layout.
///
/// # Example
///
/// ```
/// use proportion_layout::config::LayoutConfig;
/// use proportion_layout::style::{Edges, LayoutDirection};
///
/// let config = LayoutConfig::new()
///     .direction(LayoutDirection::Vertical)
///     .spacing(8.0)
///     .reverse_order(true)
///     .padding(Edges::all(4));
///
/// assert_eq!(config.spacing, 8.0);
/// assert!(config.reverse_order);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Which physical axis receives the weighted partition.
    pub direction: LayoutDirection,

    /// Gap between consecutive children, always `>= 0`.
    pub spacing: f32,

    /// Lay children out in reverse host order.
    pub reverse_order: bool,

    /// Container padding.
    pub padding: Edges,
}

impl LayoutConfig {
    /// Creates a configuration with all default values.
    pub const fn new() -> Self {
        Self {
            direction: LayoutDirection::Horizontal,
            spacing: DEFAULT_SPACING,
            reverse_order: false,
            padding: Edges::ZERO,
        }
    }

    /// Builder method to set the layout direction.
    #[must_use]
    pub const fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Builder method to set spacing. Negative input is clamped to zero.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = clamp_spacing(spacing);
        self
    }

    /// Builder method to set reverse order.
    #[must_use]
    pub const fn reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = reverse_order;
        self
    }

    /// Builder method to set padding.
    #[must_use]
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Returns a copy with every field normalised.
    ///
    /// Deserialised or hand-built configs may carry a negative spacing; the
    /// layout group always stores the normalised form.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            spacing: clamp_spacing(self.spacing),
            ..self
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.direction, LayoutDirection::Horizontal);
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert!(!config.reverse_order);
        assert_eq!(config.padding, Edges::ZERO);
    }

    #[test]
    fn test_builder_clamps_spacing() {
        let config = LayoutConfig::new().spacing(-12.0);
        assert_eq!(config.spacing, 0.0);
    }

    #[test]
    fn test_normalized_clamps_raw_spacing() {
        let raw = LayoutConfig {
            spacing: -3.0,
            ..LayoutConfig::new()
        };
        assert_eq!(raw.normalized().spacing, 0.0);

        let nan = LayoutConfig {
            spacing: f32::NAN,
            ..LayoutConfig::new()
        };
        assert_eq!(nan.normalized().spacing, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_round_trip() {
        let config = LayoutConfig::new()
            .direction(LayoutDirection::Vertical)
            .spacing(6.0)
            .padding(Edges::new(1, 2, 3, 4));
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_missing_fields_use_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"spacing": 2.0}"#).unwrap();
        assert_eq!(config.spacing, 2.0);
        assert_eq!(config.direction, LayoutDirection::Horizontal);
        assert_eq!(config.padding, Edges::ZERO);
    }
}
