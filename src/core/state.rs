//! Core State trait and the phases of the selection machine.
//!
//! States are plain values; inspecting them has no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the transition history
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel inside snapshots
///
/// # Example
///
/// ```rust
/// use cookpair::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Oven {
///     Cold,
///     Heating,
///     Ready,
/// }
///
/// impl State for Oven {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cold => "Cold",
///             Self::Heating => "Heating",
///             Self::Ready => "Ready",
///         }
///     }
/// }
///
/// assert_eq!(Oven::Heating.name(), "Heating");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Phase of the two-pick selection protocol.
///
/// The phase is derived from how many items are currently selected. There is
/// no terminal phase: the machine cycles
/// `Empty -> OneSelected -> TwoSelected -> Empty` indefinitely.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// One item picked, waiting for its partner.
    OneSelected,
    /// Pair resolved; the reset timer is running.
    TwoSelected,
}

impl Phase {
    /// Phase corresponding to a selection of `count` items.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::OneSelected,
            _ => Self::TwoSelected,
        }
    }

    /// Whether a pick can change the selection in this phase.
    pub fn accepts_picks(&self) -> bool {
        !matches!(self, Self::TwoSelected)
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::OneSelected => "OneSelected",
            Self::TwoSelected => "TwoSelected",
        }
    }
}
