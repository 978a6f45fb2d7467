//! Validation of palettes and recipe definitions.
//!
//! Rules return Stillwater's `Validation` so every violation is collected
//! in a single pass instead of stopping at the first one. Builders turn a
//! failed validation into a [`ConfigurationError`](crate::builder::ConfigurationError).
//!
//! # Example
//!
//! ```rust
//! use cookpair::core::{Palette, RawRecipe};
//! use cookpair::validation::rules::check_recipes;
//!
//! let palette = Palette::new(["Egg", "Onion"]).unwrap();
//! let recipes = vec![
//!     RawRecipe::new("Onion", "Onion", "Stew"),
//!     RawRecipe::new("Egg", "Milk", "Omelette"),
//! ];
//!
//! assert!(check_recipes(&palette, None, &recipes).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use violations::ConfigViolation;
