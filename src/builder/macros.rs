//! Macros for writing recipe lists inline.

/// Build a `Vec<RawRecipe>` from `"A" + "B" => "Dish"` lines.
///
/// # Example
///
/// ```
/// use cookpair::builder::RecipeTableBuilder;
/// use cookpair::core::Palette;
/// use cookpair::recipes;
///
/// let palette = Palette::new(["Egg", "Onion", "Carrot"]).unwrap();
/// let table = RecipeTableBuilder::new(palette)
///     .recipes(recipes! {
///         "Egg" + "Onion" => "Omelette",
///         "Onion" + "Carrot" => "Stew",
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(table.pair_count(), 2);
/// ```
#[macro_export]
macro_rules! recipes {
    () => {
        ::std::vec::Vec::<$crate::core::RawRecipe>::new()
    };
    (
        $( $first:literal + $second:literal => $dish:literal ),+ $(,)?
    ) => {
        ::std::vec![
            $( $crate::core::RawRecipe::new($first, $second, $dish) ),+
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::RawRecipe;

    #[test]
    fn recipes_macro_preserves_order() {
        let list = recipes! {
            "Egg" + "Carrot" => "Omelette",
            "Apple" + "Milk" => "Smoothie"
        };

        assert_eq!(
            list,
            vec![
                RawRecipe::new("Egg", "Carrot", "Omelette"),
                RawRecipe::new("Apple", "Milk", "Smoothie"),
            ]
        );
    }

    #[test]
    fn recipes_macro_accepts_empty_list() {
        let list = recipes! {};
        assert!(list.is_empty());
    }
}
