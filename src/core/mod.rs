//! Core value types.
//!
//! This module contains the immutable building blocks of the game:
//! - Items, the palette they come from, and the dishes they combine into
//! - The symmetric recipe table
//! - Selection phases via the `State` trait
//! - Bounded transition history
//!
//! Nothing in this module performs I/O.

mod history;
mod item;
mod outcome;
mod recipe;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use item::{Item, Palette};
pub use outcome::{Dish, Outcome, UNKNOWN_LABEL};
pub use recipe::{RawRecipe, RecipeTable};
pub use state::{Phase, State};
