//! Builder for symmetric recipe tables.

use crate::builder::error::ConfigurationError;
use crate::core::{Dish, Item, Palette, RawRecipe, RecipeTable};
use crate::validation::rules;
use std::collections::HashMap;

/// Builder for constructing a [`RecipeTable`] with a fluent API.
///
/// Every raw recipe is validated before anything is inserted; each valid
/// pair is then stored under both orderings.
///
/// # Example
///
/// ```rust
/// use cookpair::builder::RecipeTableBuilder;
/// use cookpair::core::Palette;
///
/// let palette = Palette::new(["Egg", "Onion", "Carrot"]).unwrap();
/// let table = RecipeTableBuilder::new(palette)
///     .dishes(["Omelette", "Stew"])
///     .recipe("Egg", "Onion", "Omelette")
///     .recipe("Onion", "Carrot", "Stew")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.pair_count(), 2);
/// ```
pub struct RecipeTableBuilder {
    palette: Palette,
    dishes: Option<Vec<Dish>>,
    recipes: Vec<RawRecipe>,
}

impl RecipeTableBuilder {
    /// Create a builder over a validated palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            dishes: None,
            recipes: Vec::new(),
        }
    }

    /// Declare the closed set of dishes recipes may produce (optional).
    pub fn dishes<I, T>(mut self, dishes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Dish>,
    {
        self.dishes = Some(dishes.into_iter().map(Into::into).collect());
        self
    }

    /// Add one unordered pair.
    pub fn recipe(
        mut self,
        first: impl Into<Item>,
        second: impl Into<Item>,
        dish: impl Into<Dish>,
    ) -> Self {
        self.recipes.push(RawRecipe::new(first, second, dish));
        self
    }

    /// Add many pre-built recipes at once.
    pub fn recipes<I>(mut self, recipes: I) -> Self
    where
        I: IntoIterator<Item = RawRecipe>,
    {
        self.recipes.extend(recipes);
        self
    }

    /// Validate all recipes and build the table.
    pub fn build(self) -> Result<RecipeTable, ConfigurationError> {
        ConfigurationError::from_validation(rules::check_recipes(
            &self.palette,
            self.dishes.as_deref(),
            &self.recipes,
        ))?;

        let mut entries: HashMap<Item, HashMap<Item, Dish>> = HashMap::new();
        for RawRecipe {
            pair: [first, second],
            dish,
        } in self.recipes
        {
            entries
                .entry(second.clone())
                .or_default()
                .insert(first.clone(), dish.clone());
            entries.entry(first).or_default().insert(second, dish);
        }

        let table = RecipeTable::from_parts(self.palette, entries);
        tracing::debug!(
            items = table.palette().len(),
            pairs = table.pair_count(),
            "built recipe table"
        );
        Ok(table)
    }
}

/// Build a table from a raw pair-to-dish mapping.
///
/// Key order inside each pair is irrelevant; `(A, B)` and `(B, A)` describe
/// the same recipe.
///
/// # Example
///
/// ```rust
/// use cookpair::builder::build_table;
/// use cookpair::core::{Item, Palette};
/// use std::collections::HashMap;
///
/// let palette = Palette::new(["Egg", "Milk"]).unwrap();
/// let raw = HashMap::from([(("Milk", "Egg"), "Omelette")]);
/// let table = build_table(palette, raw).unwrap();
///
/// let dish = table.get(&Item::new("Egg"), &Item::new("Milk")).unwrap();
/// assert_eq!(dish.name(), "Omelette");
/// ```
pub fn build_table<I, A, B, D>(palette: Palette, raw: I) -> Result<RecipeTable, ConfigurationError>
where
    I: IntoIterator<Item = ((A, B), D)>,
    A: Into<Item>,
    B: Into<Item>,
    D: Into<Dish>,
{
    RecipeTableBuilder::new(palette)
        .recipes(
            raw.into_iter()
                .map(|((first, second), dish)| RawRecipe::new(first, second, dish)),
        )
        .build()
}
