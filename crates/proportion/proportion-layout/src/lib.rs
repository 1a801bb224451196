//! Proportion Layout
//!
//! Weighted one-dimensional layout for embedded UI containers.
//!
//! A [`ProportionLayoutGroup`](group::ProportionLayoutGroup) splits its
//! container along a primary axis in proportion to each child's weight, and
//! stretches every child across the full secondary axis.
//!
//! # Architecture
//!
//! - [`selector`]: filter and order candidates into participants
//! - [`distribute`]: weighted partition (primary) and uniform fill (secondary)
//! - [`group`]: configuration, participant cache, per-axis layout passes
//! - [`shared`]: mutex wrapper for hosts that share one layout instance
//! - [`render`]: draw computed rectangles with embedded-graphics
//!
//! # Example
//!
//! ```
//! use proportion_layout::prelude::*;
//!
//! let mut group: ProportionLayoutGroup<u8> = ProportionLayoutGroup::horizontal();
//! group.set_container_size(ContainerSize::new(300.0, 40.0));
//! group.add_child(0, Some(1.0))?;
//! group.add_child(1, Some(3.0))?;
//!
//! let result = group.compute();
//! let sizes: Vec<f32> = result
//!     .placements
//!     .iter()
//!     .filter_map(|p| p.primary.map(|span| span.size))
//!     .collect();
//! assert_eq!(sizes, [75.0, 225.0]);
//! # Ok::<(), LayoutError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]

pub mod config;
#[cfg(feature = "debug")]
pub mod debug;
pub mod distribute;
pub mod element;
pub mod group;
pub mod layout;
pub mod render;
pub mod selector;
pub mod shared;
pub mod style;

pub mod prelude {
    //! Common imports for hosts driving a proportion layout.

    pub use crate::config::LayoutConfig;
    pub use crate::distribute::{AxisDistributor, AxisPass};
    pub use crate::element::{Candidate, Participant, Participants, Weight};
    pub use crate::group::{InvalidateLayout, LayoutHost, ProportionLayoutGroup};
    pub use crate::layout::{
        AxisSpan, ContainerSize, LayoutError, LayoutParams, LayoutResult, Placement,
    };
    pub use crate::selector::ChildSelector;
    pub use crate::shared::SharedProportionLayout;
    pub use crate::style::{Axis, AxisRole, Edges, LayoutDirection};
}
