//! Builder API for recipe tables and selection machines.
//!
//! Builders validate everything up front: a table either builds completely
//! or the caller gets a [`ConfigurationError`] listing every problem.

pub mod error;
pub mod machine;
pub mod macros;
pub mod recipes;

pub use error::ConfigurationError;
pub use machine::SelectionMachineBuilder;
pub use recipes::{build_table, RecipeTableBuilder};
