//! Errors surfaced by the selection machine.

use thiserror::Error;

/// A pick that cannot be applied.
///
/// Callers are expected to log and continue; the machine state is left
/// untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("'{name}' is not part of the palette")]
    UnknownItem { name: String },
}
