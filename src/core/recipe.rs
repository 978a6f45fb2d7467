//! Raw recipe definitions and the symmetric lookup table built from them.

use super::item::{Item, Palette};
use super::outcome::{Dish, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One unordered pair-to-dish definition, as written in configuration.
///
/// The order of `pair` carries no meaning.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RawRecipe {
    pub pair: [Item; 2],
    pub dish: Dish,
}

impl RawRecipe {
    pub fn new(first: impl Into<Item>, second: impl Into<Item>, dish: impl Into<Dish>) -> Self {
        Self {
            pair: [first.into(), second.into()],
            dish: dish.into(),
        }
    }

    pub fn first(&self) -> &Item {
        &self.pair[0]
    }

    pub fn second(&self) -> &Item {
        &self.pair[1]
    }
}

/// Immutable symmetric mapping from unordered item pairs to dishes.
///
/// Both orderings of every defined pair are stored when the table is built,
/// so a lookup is two hash probes with no ordering logic. Pairs without a
/// recipe are not stored and resolve to [`Outcome::Unknown`].
///
/// Tables are produced by
/// [`RecipeTableBuilder`](crate::builder::RecipeTableBuilder).
///
/// # Example
///
/// ```rust
/// use cookpair::builder::RecipeTableBuilder;
/// use cookpair::core::{Dish, Item, Outcome, Palette};
///
/// let palette = Palette::new(["Egg", "Carrot", "Milk"]).unwrap();
/// let table = RecipeTableBuilder::new(palette)
///     .recipe("Egg", "Carrot", "Omelette")
///     .build()
///     .unwrap();
///
/// let egg = Item::new("Egg");
/// let carrot = Item::new("Carrot");
/// let omelette = Outcome::Dish(Dish::new("Omelette"));
/// assert_eq!(table.lookup(&egg, &carrot), omelette);
/// assert_eq!(table.lookup(&carrot, &egg), omelette);
/// assert_eq!(table.lookup(&egg, &Item::new("Milk")), Outcome::Unknown);
/// ```
#[derive(Clone, Debug)]
pub struct RecipeTable {
    palette: Palette,
    entries: HashMap<Item, HashMap<Item, Dish>>,
}

impl RecipeTable {
    /// Assemble a table from already validated, already mirrored entries.
    pub(crate) fn from_parts(palette: Palette, entries: HashMap<Item, HashMap<Item, Dish>>) -> Self {
        Self { palette, entries }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Dish for the pair, if one is defined.
    pub fn get(&self, first: &Item, second: &Item) -> Option<&Dish> {
        self.entries.get(first)?.get(second)
    }

    /// Resolve the pair, falling back to [`Outcome::Unknown`].
    pub fn lookup(&self, first: &Item, second: &Item) -> Outcome {
        self.get(first, second)
            .cloned()
            .map_or(Outcome::Unknown, Outcome::Dish)
    }

    /// Number of distinct unordered pairs with a recipe.
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Defined pairs in palette order, each unordered pair listed once.
    pub fn entries(&self) -> Vec<(&Item, &Item, &Dish)> {
        self.palette_pairs()
            .filter_map(|(first, second)| {
                self.get(first, second).map(|dish| (first, second, dish))
            })
            .collect()
    }

    /// Distinct palette pairs that resolve to [`Outcome::Unknown`].
    pub fn missing_pairs(&self) -> Vec<(&Item, &Item)> {
        self.palette_pairs()
            .filter(|(first, second)| self.get(first, second).is_none())
            .collect()
    }

    fn palette_pairs(&self) -> impl Iterator<Item = (&Item, &Item)> {
        let items = self.palette.items();
        items
            .iter()
            .enumerate()
            .flat_map(move |(i, first)| items[i + 1..].iter().map(move |second| (first, second)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecipeTableBuilder;

    fn table() -> RecipeTable {
        let palette = Palette::new(["Egg", "Onion", "Carrot", "Milk"]).unwrap();
        RecipeTableBuilder::new(palette)
            .recipe("Egg", "Carrot", "Omelette")
            .recipe("Onion", "Carrot", "Stew")
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_is_symmetric() {
        let table = table();
        let egg = Item::new("Egg");
        let carrot = Item::new("Carrot");
        assert_eq!(table.lookup(&egg, &carrot), table.lookup(&carrot, &egg));
        assert_eq!(table.get(&carrot, &egg), Some(&Dish::new("Omelette")));
    }

    #[test]
    fn undefined_pair_is_unknown() {
        let table = table();
        let outcome = table.lookup(&Item::new("Egg"), &Item::new("Milk"));
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn pair_count_counts_unordered_pairs() {
        assert_eq!(table().pair_count(), 2);
    }

    #[test]
    fn entries_follow_palette_order() {
        let table = table();
        let entries: Vec<(&str, &str, &str)> = table
            .entries()
            .into_iter()
            .map(|(a, b, dish)| (a.name(), b.name(), dish.name()))
            .collect();
        assert_eq!(
            entries,
            vec![("Egg", "Carrot", "Omelette"), ("Onion", "Carrot", "Stew")]
        );
    }

    #[test]
    fn missing_pairs_lists_uncovered_combinations() {
        let table = table();
        let missing: Vec<(&str, &str)> = table
            .missing_pairs()
            .into_iter()
            .map(|(a, b)| (a.name(), b.name()))
            .collect();
        assert_eq!(
            missing,
            vec![
                ("Egg", "Onion"),
                ("Egg", "Milk"),
                ("Onion", "Milk"),
                ("Carrot", "Milk"),
            ]
        );
    }

    #[test]
    fn raw_recipe_deserializes_from_toml() {
        let raw: RawRecipe = toml::from_str("pair = [\"Egg\", \"Milk\"]\ndish = \"Omelette\"").unwrap();
        assert_eq!(raw, RawRecipe::new("Egg", "Milk", "Omelette"));
    }
}
