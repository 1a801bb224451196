//! Participant selection
//!
//! Turns the host's raw child list into the ordered list of children that
//! take part in layout. A child qualifies when its slot is occupied, it is
//! active, and it carries a weight annotation.
//!
//! # Example
//!
//! ```
//! use proportion_layout::element::Candidate;
//! use proportion_layout::selector::ChildSelector;
//!
//! let children = [
//!     Candidate::weighted('a', 1.0),
//!     Candidate::unweighted('b'),
//!     Candidate::weighted('c', 3.0).active(false),
//!     Candidate::weighted('d', 0.0),
//! ];
//!
//! let forward = ChildSelector::select(&children, false);
//! let order: Vec<char> = forward.iter().map(|p| p.child).collect();
//! assert_eq!(order, ['a', 'd']);
//!
//! let reversed = ChildSelector::select(&children, true);
//! let order: Vec<char> = reversed.iter().map(|p| p.child).collect();
//! assert_eq!(order, ['d', 'a']);
//! ```

use crate::element::{Candidate, Participant, Participants};

/// Stateless filter from candidates to participants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildSelector;

impl ChildSelector {
    /// Selects participants from a dense child list.
    pub fn select<H: Copy>(children: &[Candidate<H>], reverse_order: bool) -> Participants<H> {
        Self::select_slots(children.iter().map(Some), reverse_order)
    }

    /// Selects participants from a host child list that may contain empty
    /// slots (`None`), e.g. children destroyed since the last frame.
    ///
    /// Qualifying children beyond [`MAX_CHILDREN`](crate::layout::MAX_CHILDREN)
    /// are dropped.
    pub fn select_slots<'a, H, I>(slots: I, reverse_order: bool) -> Participants<H>
    where
        H: Copy + 'a,
        I: IntoIterator<Item = Option<&'a Candidate<H>>>,
    {
        let mut participants = Participants::new();

        for candidate in slots.into_iter().flatten() {
            if !candidate.active {
                continue;
            }
            let Some(weight) = candidate.weight else {
                continue;
            };
            if participants
                .push(Participant::new(candidate.child, weight))
                .is_err()
            {
                #[cfg(feature = "defmt")]
                defmt::warn!("proportion layout full, dropping children past {}", crate::layout::MAX_CHILDREN);
                #[cfg(feature = "tracing")]
                tracing::warn!(capacity = crate::layout::MAX_CHILDREN, "proportion layout full, dropping children");
                break;
            }
        }

        if reverse_order {
            participants.reverse();
        }

        participants
    }
}
