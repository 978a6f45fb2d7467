//! Configuration violations.

use thiserror::Error;

/// A single problem found in palette or recipe definitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Palette declares no items")]
    EmptyPalette,

    #[error("Item '{item}' appears more than once in the palette")]
    DuplicateItem { item: String },

    #[error("Recipe '{item} + {item}' combines an item with itself")]
    SelfPair { item: String },

    #[error("Recipe '{first} + {second}' uses '{item}', which is not in the palette")]
    UnknownItem {
        first: String,
        second: String,
        item: String,
    },

    #[error("Recipe '{first} + {second}' is defined as both '{existing}' and '{conflicting}'")]
    ConflictingRecipe {
        first: String,
        second: String,
        existing: String,
        conflicting: String,
    },

    #[error("Recipe '{first} + {second}' produces undeclared dish '{dish}'")]
    UndeclaredDish {
        first: String,
        second: String,
        dish: String,
    },
}
