//! Two-pick selection protocol with a timed reset.
//!
//! # Key Concepts
//!
//! - **Machine**: owns the selection, resolves completed pairs against the
//!   recipe table and arms the reset timer
//! - **Timer**: a single countdown advanced by host-measured elapsed time
//! - **Snapshot**: the settled state a renderer draws
//!
//! The host drives everything: it forwards picks, calls `tick` from its
//! frame loop and renders `snapshot()` in between.

pub mod error;
mod machine;
mod snapshot;
mod timer;

pub use error::InvalidInputError;
pub use machine::{
    resolve_pair, IgnoreReason, Input, PickOutcome, SelectionMachine, SelectionState, StepResult,
};
pub use snapshot::Snapshot;
pub use timer::{PendingResetTimer, DEFAULT_RESET_DELAY, DEFAULT_RESET_DELAY_MS};
