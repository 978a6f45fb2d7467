//! Builder for constructing selection machines.

use crate::core::{Phase, RecipeTable, StateHistory, DEFAULT_HISTORY_LIMIT};
use crate::selection::{SelectionMachine, DEFAULT_RESET_DELAY};
use std::time::Duration;

/// Builder for a [`SelectionMachine`] with non-default settings.
///
/// # Example
///
/// ```rust
/// use cookpair::builder::{RecipeTableBuilder, SelectionMachineBuilder};
/// use cookpair::core::Palette;
/// use std::time::Duration;
///
/// let table = RecipeTableBuilder::new(Palette::new(["Egg", "Milk"]).unwrap())
///     .recipe("Egg", "Milk", "Omelette")
///     .build()
///     .unwrap();
///
/// let machine = SelectionMachineBuilder::new(table)
///     .reset_delay(Duration::from_secs(3))
///     .history_limit(16)
///     .build();
///
/// assert_eq!(machine.reset_delay(), Duration::from_secs(3));
/// ```
pub struct SelectionMachineBuilder {
    table: RecipeTable,
    reset_delay: Duration,
    history_limit: usize,
}

impl SelectionMachineBuilder {
    pub fn new(table: RecipeTable) -> Self {
        Self {
            table,
            reset_delay: DEFAULT_RESET_DELAY,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// How long a resolved pair stays on display.
    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// How many phase transitions to retain. Zero disables history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn build(self) -> SelectionMachine {
        let history: StateHistory<Phase> = StateHistory::with_limit(self.history_limit);
        SelectionMachine::with_settings(self.table, self.reset_delay, history)
    }
}
