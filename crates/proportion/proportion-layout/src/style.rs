//! Axis and inset primitives for proportion layouts.
//!
//! # Core Types
//!
//! - [`Axis`] - Physical axis (horizontal X, vertical Y)
//! - [`LayoutDirection`] - Which physical axis is the primary axis
//! - [`AxisRole`] - Whether a pass runs along the primary or secondary axis
//! - [`Edges`] - Padding insets (top, right, bottom, left)
//!
//! # Example
//!
//! ```
//! use proportion_layout::style::*;
//!
//! let direction = LayoutDirection::Vertical;
//! assert_eq!(direction.primary_axis(), Axis::Vertical);
//! assert_eq!(direction.role_of(Axis::Horizontal), AxisRole::Secondary);
//!
//! let padding = Edges::new(4, 8, 4, 8);
//! assert_eq!(padding.along(Axis::Horizontal), 16);
//! assert_eq!(padding.start(Axis::Vertical), 4);
//! ```

/// Physical layout axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// X axis, left to right.
    Horizontal,

    /// Y axis, top to bottom.
    Vertical,
}

impl Axis {
    /// Both axes in pass order (horizontal pass first).
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Returns the orthogonal axis.
    ///
    /// ```
    /// use proportion_layout::style::Axis;
    ///
    /// assert_eq!(Axis::Horizontal.other(), Axis::Vertical);
    /// assert_eq!(Axis::Vertical.other(), Axis::Horizontal);
    /// ```
    pub const fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns `true` for the X axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }
}

/// Role an axis plays in a given layout direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisRole {
    /// Weighted partition axis.
    Primary,

    /// Uniform fill axis.
    Secondary,
}

/// Layout direction selecting the primary axis.
///
/// - `Horizontal`: widths follow the weights, heights fill the container.
/// - `Vertical`: heights follow the weights, widths fill the container.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Children are placed left to right.
    #[default]
    Horizontal,

    /// Children are placed top to bottom.
    Vertical,
}

impl LayoutDirection {
    /// Returns the axis along which weights are applied.
    pub const fn primary_axis(self) -> Axis {
        match self {
            LayoutDirection::Horizontal => Axis::Horizontal,
            LayoutDirection::Vertical => Axis::Vertical,
        }
    }

    /// Returns the axis along which children are stretched.
    pub const fn secondary_axis(self) -> Axis {
        self.primary_axis().other()
    }

    /// Returns the role `axis` plays for this direction.
    ///
    /// ```
    /// use proportion_layout::style::{Axis, AxisRole, LayoutDirection};
    ///
    /// let dir = LayoutDirection::Horizontal;
    /// assert_eq!(dir.role_of(Axis::Horizontal), AxisRole::Primary);
    /// assert_eq!(dir.role_of(Axis::Vertical), AxisRole::Secondary);
    /// ```
    pub const fn role_of(self, axis: Axis) -> AxisRole {
        match (self, axis) {
            (LayoutDirection::Horizontal, Axis::Horizontal)
            | (LayoutDirection::Vertical, Axis::Vertical) => AxisRole::Primary,
            _ => AxisRole::Secondary,
        }
    }

    /// Returns `true` if this is the horizontal direction.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, LayoutDirection::Horizontal)
    }
}

/// Edge insets used as container padding.
///
/// Follows CSS box model convention: top, right, bottom, left. Values are
/// unsigned, so padding can never be negative.
///
/// # Examples
///
/// ```
/// use proportion_layout::style::Edges;
///
/// let uniform = Edges::all(16);
/// assert_eq!(uniform.top, 16);
/// assert_eq!(uniform.left, 16);
///
/// let hv = Edges::horizontal_vertical(24, 12);
/// assert_eq!(hv.left, 24);
/// assert_eq!(hv.right, 24);
/// assert_eq!(hv.top, 12);
/// assert_eq!(hv.bottom, 12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    /// Top edge inset.
    pub top: u32,

    /// Right edge inset.
    pub right: u32,

    /// Bottom edge inset.
    pub bottom: u32,

    /// Left edge inset.
    pub left: u32,
}

impl Edges {
    /// No padding.
    pub const ZERO: Edges = Edges::all(0);

    /// Creates edges with all sides set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with individual values for each side.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with separate horizontal and vertical values.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the total horizontal inset (left + right).
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns the total vertical inset (top + bottom).
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Returns the total inset along `axis`.
    pub const fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// Returns the leading inset along `axis` (left or top).
    pub const fn start(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}
