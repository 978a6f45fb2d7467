//! Validation rules for palettes and raw recipes.
//!
//! Each rule yields a `Validation`, and the results are combined with
//! `Validation::all_vec` so a configuration reports every problem at once.

use crate::core::{Dish, Item, Palette, RawRecipe};
use crate::validation::violations::ConfigViolation;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a validation rule.
pub type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Reject empty palettes and repeated item names.
pub fn check_palette(items: &[Item]) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    if items.is_empty() {
        checks.push(Validation::fail(ConfigViolation::EmptyPalette));
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            checks.push(Validation::fail(ConfigViolation::DuplicateItem {
                item: item.name().to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check every raw recipe against the palette, the declared dishes and
/// each other.
///
/// A recipe fails when it pairs an item with itself, names an item outside
/// the palette, produces a dish missing from `dishes` (when dishes are
/// declared), or redefines an unordered pair with a different dish.
/// Repeating a pair with the same dish is accepted.
pub fn check_recipes(palette: &Palette, dishes: Option<&[Dish]>, recipes: &[RawRecipe]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut defined: HashMap<(&Item, &Item), &Dish> = HashMap::new();

    for recipe in recipes {
        let (first, second) = (recipe.first(), recipe.second());

        let self_pair = first == second;
        if self_pair {
            checks.push(Validation::fail(ConfigViolation::SelfPair {
                item: first.name().to_string(),
            }));
        }

        let pair = [first, second];
        let members = if self_pair { &pair[..1] } else { &pair[..] };
        for &item in members {
            if !palette.contains(item) {
                checks.push(Validation::fail(ConfigViolation::UnknownItem {
                    first: first.name().to_string(),
                    second: second.name().to_string(),
                    item: item.name().to_string(),
                }));
            }
        }

        if let Some(dishes) = dishes {
            if !dishes.contains(&recipe.dish) {
                checks.push(Validation::fail(ConfigViolation::UndeclaredDish {
                    first: first.name().to_string(),
                    second: second.name().to_string(),
                    dish: recipe.dish.name().to_string(),
                }));
            }
        }

        if self_pair {
            continue;
        }

        let key = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        match defined.get(&key) {
            Some(existing) if **existing != recipe.dish => {
                checks.push(Validation::fail(ConfigViolation::ConflictingRecipe {
                    first: first.name().to_string(),
                    second: second.name().to_string(),
                    existing: existing.name().to_string(),
                    conflicting: recipe.dish.name().to_string(),
                }));
            }
            Some(_) => {
                tracing::debug!(%first, %second, "recipe repeated with the same dish");
            }
            None => {
                defined.insert(key, &recipe.dish);
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
