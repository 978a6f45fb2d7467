//! The two-pick selection state machine.

use crate::core::{Item, Outcome, Phase, RecipeTable, StateHistory, StateTransition};
use crate::selection::error::InvalidInputError;
use crate::selection::snapshot::Snapshot;
use crate::selection::timer::{PendingResetTimer, DEFAULT_RESET_DELAY};
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

/// Picked items and the result computed from them.
///
/// Holds at most two items. The result is only present in
/// [`Phase::TwoSelected`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SelectionState {
    selected: Vec<Item>,
    result: Option<Outcome>,
}

impl SelectionState {
    pub fn phase(&self) -> Phase {
        Phase::from_count(self.selected.len())
    }

    pub fn selected(&self) -> &[Item] {
        &self.selected
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    fn clear(&mut self) {
        self.selected.clear();
        self.result = None;
    }
}

/// Why a pick left the selection unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A pair is already on display; picks wait for the reset.
    Saturated,
    /// The item is already the pending first pick.
    AlreadySelected,
}

/// What a valid pick did.
#[derive(Clone, Debug, PartialEq)]
pub enum PickOutcome {
    /// First item of a pair recorded.
    Selected(Item),
    /// Pair completed. `None` only for an identical pair.
    Resolved(Option<Outcome>),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Inputs the host feeds the machine.
///
/// Picks and timer expiries arrive on separate variants so neither can be
/// mistaken for the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// The player picked the item with this name.
    Pick(String),
    /// An externally scheduled reset timer expired.
    ResetTimerFired,
}

/// Result of [`SelectionMachine::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    Picked(PickOutcome),
    /// The selection was cleared by the reset timer.
    Reset,
    /// A timer expiry arrived outside [`Phase::TwoSelected`].
    Unchanged,
}

/// Resolve a pair against the table.
///
/// An identical pair has no result at all; any other pair yields the mapped
/// dish or [`Outcome::Unknown`].
pub fn resolve_pair(table: &RecipeTable, first: &Item, second: &Item) -> Option<Outcome> {
    if first == second {
        None
    } else {
        Some(table.lookup(first, second))
    }
}

/// Selection machine cycling `Empty -> OneSelected -> TwoSelected -> Empty`.
///
/// The machine owns its table, its selection and its single reset timer.
/// Every operation completes synchronously, so a snapshot taken between
/// calls always reflects a settled state.
///
/// # Example
///
/// ```rust
/// use cookpair::builder::RecipeTableBuilder;
/// use cookpair::core::{Palette, Phase};
/// use cookpair::selection::SelectionMachine;
/// use std::time::Duration;
///
/// let palette = Palette::new(["Egg", "Carrot"]).unwrap();
/// let table = RecipeTableBuilder::new(palette)
///     .recipe("Egg", "Carrot", "Omelette")
///     .build()
///     .unwrap();
/// let mut machine = SelectionMachine::new(table);
///
/// machine.pick("Carrot").unwrap();
/// machine.pick("Egg").unwrap();
/// assert_eq!(machine.snapshot().result_label(), Some("Omelette"));
///
/// machine.tick(Duration::from_millis(1500));
/// assert_eq!(machine.phase(), Phase::Empty);
/// ```
#[derive(Debug)]
pub struct SelectionMachine {
    table: RecipeTable,
    state: SelectionState,
    timer: PendingResetTimer,
    reset_delay: Duration,
    history: StateHistory<Phase>,
    cycles: u64,
    host_time: Duration,
}

impl SelectionMachine {
    /// Create a machine in [`Phase::Empty`] with the default reset delay.
    pub fn new(table: RecipeTable) -> Self {
        Self::with_settings(table, DEFAULT_RESET_DELAY, StateHistory::new())
    }

    pub(crate) fn with_settings(
        table: RecipeTable,
        reset_delay: Duration,
        history: StateHistory<Phase>,
    ) -> Self {
        Self {
            table,
            state: SelectionState::default(),
            timer: PendingResetTimer::new(),
            reset_delay,
            history,
            cycles: 0,
            host_time: Duration::ZERO,
        }
    }

    /// Apply a pick of the palette item named `name`.
    ///
    /// Names outside the palette fail with [`InvalidInputError`] and leave
    /// the machine untouched.
    pub fn pick(&mut self, name: impl AsRef<str>) -> Result<PickOutcome, InvalidInputError> {
        let name = name.as_ref();
        let Some(item) = self.table.palette().get(name).cloned() else {
            tracing::warn!(item = name, "rejected pick outside the palette");
            return Err(InvalidInputError::UnknownItem {
                name: name.to_string(),
            });
        };
        Ok(self.accept(item))
    }

    fn accept(&mut self, item: Item) -> PickOutcome {
        match self.state.phase() {
            Phase::TwoSelected => {
                tracing::debug!(%item, "pick ignored while a pair is displayed");
                PickOutcome::Ignored(IgnoreReason::Saturated)
            }
            Phase::Empty => {
                self.state.selected.push(item.clone());
                self.record(Phase::Empty, Phase::OneSelected);
                PickOutcome::Selected(item)
            }
            Phase::OneSelected => {
                if self.state.selected.contains(&item) {
                    tracing::debug!(%item, "repeat pick of the pending item ignored");
                    return PickOutcome::Ignored(IgnoreReason::AlreadySelected);
                }
                tracing::debug!(first = %self.state.selected[0].name(), second = %item, "pair completed");
                self.state.selected.push(item);
                let result = self.resolve_selection();
                tracing::debug!(
                    result = result.as_ref().map_or("none", Outcome::label),
                    "pair resolved"
                );
                self.state.result = result.clone();
                self.timer.arm(self.reset_delay);
                self.record(Phase::OneSelected, Phase::TwoSelected);
                PickOutcome::Resolved(result)
            }
        }
    }

    fn resolve_selection(&self) -> Option<Outcome> {
        match self.state.selected.as_slice() {
            [first, second] => resolve_pair(&self.table, first, second),
            _ => None,
        }
    }

    /// Clear a displayed pair.
    ///
    /// Only acts in [`Phase::TwoSelected`]; in any other phase this is a
    /// no-op and returns `false`.
    pub fn on_reset_timer_fired(&mut self) -> bool {
        if self.state.phase() != Phase::TwoSelected {
            tracing::debug!(phase = ?self.state.phase(), "reset outside TwoSelected ignored");
            return false;
        }

        self.state.clear();
        self.timer.disarm();
        self.record(Phase::TwoSelected, Phase::Empty);
        self.cycles += 1;
        true
    }

    /// Advance the pending reset timer by `elapsed`.
    ///
    /// Returns `true` when this tick cleared the selection.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.host_time = self.host_time.saturating_add(elapsed);
        if !self.timer.advance(elapsed) {
            tracing::trace!(remaining = ?self.timer.remaining(), "tick");
            return false;
        }
        self.on_reset_timer_fired()
    }

    /// Dispatch one host input.
    pub fn handle(&mut self, input: Input) -> Result<StepResult, InvalidInputError> {
        match input {
            Input::Pick(name) => self.pick(name).map(StepResult::Picked),
            Input::ResetTimerFired => Ok(if self.on_reset_timer_fired() {
                StepResult::Reset
            } else {
                StepResult::Unchanged
            }),
        }
    }

    fn record(&mut self, from: Phase, to: Phase) {
        self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            host_time: self.host_time,
            cycle: self.cycles,
        });
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase(),
            selected_items: self.state.selected.clone(),
            current_result: self.state.result.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn table(&self) -> &RecipeTable {
        &self.table
    }

    pub fn timer(&self) -> &PendingResetTimer {
        &self.timer
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Total elapsed time fed through [`SelectionMachine::tick`].
    pub fn host_time(&self) -> Duration {
        self.host_time
    }

    /// Number of pairs shown and cleared so far.
    pub fn completed_cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecipeTableBuilder;
    use crate::core::{Dish, Palette};

    fn machine() -> SelectionMachine {
        let palette = Palette::new(["Egg", "Onion", "Carrot", "Milk"]).unwrap();
        let table = RecipeTableBuilder::new(palette)
            .recipe("Egg", "Carrot", "Omelette")
            .recipe("Onion", "Carrot", "Stew")
            .build()
            .unwrap();
        SelectionMachine::new(table)
    }

    fn omelette() -> Outcome {
        Outcome::Dish(Dish::new("Omelette"))
    }

    #[test]
    fn starts_empty() {
        let machine = machine();
        assert_eq!(machine.phase(), Phase::Empty);
        assert!(machine.state().selected().is_empty());
        assert!(machine.state().result().is_none());
        assert!(!machine.timer().is_armed());
    }

    #[test]
    fn first_pick_selects_without_result() {
        let mut machine = machine();
        let outcome = machine.pick("Egg").unwrap();

        assert_eq!(outcome, PickOutcome::Selected(Item::new("Egg")));
        assert_eq!(machine.phase(), Phase::OneSelected);
        assert!(machine.state().result().is_none());
        assert!(!machine.timer().is_armed());
    }

    #[test]
    fn second_pick_resolves_and_arms_timer() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        let outcome = machine.pick("Carrot").unwrap();

        assert_eq!(outcome, PickOutcome::Resolved(Some(omelette())));
        assert_eq!(machine.phase(), Phase::TwoSelected);
        assert_eq!(machine.state().result(), Some(&omelette()));
        assert_eq!(machine.timer().remaining(), Some(DEFAULT_RESET_DELAY));
    }

    #[test]
    fn undefined_pair_resolves_to_unknown() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        let outcome = machine.pick("Milk").unwrap();

        assert_eq!(outcome, PickOutcome::Resolved(Some(Outcome::Unknown)));
        assert_eq!(machine.snapshot().result_label(), Some("Unknown"));
    }

    #[test]
    fn repeat_pick_is_ignored() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        let outcome = machine.pick("Egg").unwrap();

        assert_eq!(outcome, PickOutcome::Ignored(IgnoreReason::AlreadySelected));
        assert_eq!(machine.phase(), Phase::OneSelected);
        assert_eq!(machine.state().selected(), &[Item::new("Egg")]);
    }

    #[test]
    fn saturated_machine_ignores_picks() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        machine.pick("Carrot").unwrap();
        let before = machine.snapshot();

        for name in ["Onion", "Egg", "Milk"] {
            let outcome = machine.pick(name).unwrap();
            assert_eq!(outcome, PickOutcome::Ignored(IgnoreReason::Saturated));
        }
        assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn unknown_item_is_rejected_without_change() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        let err = machine.pick("Tofu").unwrap_err();

        assert_eq!(
            err,
            InvalidInputError::UnknownItem {
                name: "Tofu".to_string()
            }
        );
        assert_eq!(machine.phase(), Phase::OneSelected);
    }

    #[test]
    fn tick_resets_after_delay() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        machine.pick("Carrot").unwrap();

        assert!(!machine.tick(Duration::from_millis(1000)));
        assert_eq!(machine.phase(), Phase::TwoSelected);
        assert!(machine.tick(Duration::from_millis(500)));

        let snapshot = machine.snapshot();
        assert_eq!(snapshot.phase, Phase::Empty);
        assert!(snapshot.selected_items.is_empty());
        assert!(snapshot.current_result.is_none());
        assert!(!machine.timer().is_armed());
        assert_eq!(machine.completed_cycles(), 1);
    }

    #[test]
    fn timer_fire_while_one_selected_is_noop() {
        let mut machine = machine();
        machine.pick("Onion").unwrap();

        assert!(!machine.on_reset_timer_fired());
        assert_eq!(machine.phase(), Phase::OneSelected);
        assert_eq!(machine.state().selected(), &[Item::new("Onion")]);
    }

    #[test]
    fn external_timer_fire_disarms_internal_timer() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        machine.pick("Carrot").unwrap();

        assert_eq!(machine.handle(Input::ResetTimerFired), Ok(StepResult::Reset));
        assert!(!machine.timer().is_armed());
        assert!(!machine.tick(DEFAULT_RESET_DELAY));
        assert_eq!(
            machine.handle(Input::ResetTimerFired),
            Ok(StepResult::Unchanged)
        );
    }

    #[test]
    fn handle_dispatches_picks() {
        let mut machine = machine();
        let step = machine.handle(Input::Pick("Carrot".to_string())).unwrap();
        assert_eq!(step, StepResult::Picked(PickOutcome::Selected(Item::new("Carrot"))));
        assert!(machine.handle(Input::Pick("Tofu".to_string())).is_err());
    }

    #[test]
    fn identical_pair_has_no_result() {
        let machine = machine();
        let egg = Item::new("Egg");
        assert_eq!(resolve_pair(machine.table(), &egg, &egg), None);
        assert_eq!(
            resolve_pair(machine.table(), &egg, &Item::new("Carrot")),
            Some(omelette())
        );
    }

    #[test]
    fn history_records_full_cycle() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        machine.pick("Carrot").unwrap();
        machine.tick(DEFAULT_RESET_DELAY);

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![
                &Phase::Empty,
                &Phase::OneSelected,
                &Phase::TwoSelected,
                &Phase::Empty
            ]
        );
        let cycles: Vec<u64> = machine.history().transitions().map(|t| t.cycle).collect();
        assert_eq!(cycles, vec![0, 0, 0]);
    }

    #[test]
    fn history_follows_host_tick_time() {
        let mut machine = machine();
        machine.tick(Duration::from_millis(40));
        machine.pick("Egg").unwrap();
        machine.tick(Duration::from_millis(200));
        machine.pick("Carrot").unwrap();
        for _ in 0..94 {
            machine.tick(Duration::from_millis(16));
        }

        let stamps: Vec<Duration> = machine
            .history()
            .transitions()
            .map(|t| t.host_time)
            .collect();
        assert_eq!(
            stamps,
            vec![
                Duration::from_millis(40),
                Duration::from_millis(240),
                Duration::from_millis(1744),
            ]
        );
        assert_eq!(machine.history().host_duration(), Some(Duration::from_millis(1704)));
        assert_eq!(machine.host_time(), Duration::from_millis(1744));
    }

    #[test]
    fn machine_accepts_new_pair_after_reset() {
        let mut machine = machine();
        machine.pick("Egg").unwrap();
        machine.pick("Carrot").unwrap();
        machine.tick(DEFAULT_RESET_DELAY);

        machine.pick("Carrot").unwrap();
        let outcome = machine.pick("Onion").unwrap();
        assert_eq!(
            outcome,
            PickOutcome::Resolved(Some(Outcome::Dish(Dish::new("Stew"))))
        );
    }
}
