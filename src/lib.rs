//! Cookpair: pick two ingredients, get a dish
//!
//! Cookpair is the logic core of a small selection game. A player picks two
//! items from a fixed palette; the pair is resolved through a symmetric
//! recipe table, the result stays on display for a fixed delay, and the
//! selection then resets for the next pair.
//!
//! Rendering and input devices stay outside the crate. A host forwards
//! picks, advances time with `tick` and draws the current snapshot.
//!
//! # Core Concepts
//!
//! - **Palette**: the ordered, fixed set of selectable items
//! - **RecipeTable**: an immutable table holding both orderings of every pair
//! - **SelectionMachine**: the `Empty -> OneSelected -> TwoSelected` cycle
//!   with its single reset timer
//! - **KitchenConfig**: TOML configuration, including the built-in kitchen
//!
//! # Example
//!
//! ```rust
//! use cookpair::builder::RecipeTableBuilder;
//! use cookpair::core::{Palette, Phase};
//! use cookpair::recipes;
//! use cookpair::selection::SelectionMachine;
//! use std::time::Duration;
//!
//! let palette = Palette::new(["Egg", "Onion", "Carrot"]).unwrap();
//! let table = RecipeTableBuilder::new(palette)
//!     .recipes(recipes! {
//!         "Egg" + "Carrot" => "Omelette",
//!         "Onion" + "Carrot" => "Stew",
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut machine = SelectionMachine::new(table);
//! machine.pick("Egg").unwrap();
//! machine.pick("Carrot").unwrap();
//!
//! let snapshot = machine.snapshot();
//! assert_eq!(snapshot.selection_label().as_deref(), Some("Egg + Carrot"));
//! assert_eq!(snapshot.result_label(), Some("Omelette"));
//!
//! machine.tick(Duration::from_millis(1500));
//! assert_eq!(machine.phase(), Phase::Empty);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod logging;
pub mod selection;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{ConfigurationError, RecipeTableBuilder};
pub use crate::config::{KitchenConfig, LoadError};
pub use crate::core::{Dish, Item, Outcome, Palette, Phase, RecipeTable};
pub use crate::selection::{InvalidInputError, SelectionMachine, Snapshot};
