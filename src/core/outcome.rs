//! Named results of combining two items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for pairs that have no recipe.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A named dish a recipe can produce.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dish(String);

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dish {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Dish {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Result of resolving a pair of distinct items.
///
/// `Unknown` is a real outcome that gets displayed; it is different from
/// having no outcome at all.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Dish(Dish),
    Unknown,
}

impl Outcome {
    pub fn dish(&self) -> Option<&Dish> {
        match self {
            Self::Dish(dish) => Some(dish),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Text a renderer shows for this outcome.
    pub fn label(&self) -> &str {
        match self {
            Self::Dish(dish) => dish.name(),
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Dish> for Outcome {
    fn from(dish: Dish) -> Self {
        Self::Dish(dish)
    }
}
