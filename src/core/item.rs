//! Items and the fixed palette they are drawn from.

use crate::builder::error::ConfigurationError;
use crate::validation::rules;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable entity, identified by name.
///
/// Items are created once at startup as part of a [`Palette`] and never
/// change afterwards.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered, duplicate-free set of items offered to the player.
///
/// Order is preserved so hosts can lay out controls in declaration order.
///
/// # Example
///
/// ```rust
/// use cookpair::core::Palette;
///
/// let palette = Palette::new(["Egg", "Onion", "Carrot"]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert!(palette.get("Onion").is_some());
/// assert!(palette.get("Tofu").is_none());
///
/// assert!(Palette::new(["Egg", "Egg"]).is_err());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(transparent)]
pub struct Palette {
    items: Vec<Item>,
}

impl Palette {
    /// Build a palette, rejecting empty or duplicated item lists.
    pub fn new<I, T>(items: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        ConfigurationError::from_validation(rules::check_palette(&items))?;
        Ok(Self { items })
    }

    /// Find the palette item with this exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
