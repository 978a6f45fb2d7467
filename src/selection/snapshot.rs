//! Read-only view handed to renderers.

use crate::core::{Item, Outcome, Phase};
use serde::{Deserialize, Serialize};

/// Settled selection state as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub selected_items: Vec<Item>,
    pub current_result: Option<Outcome>,
}

impl Snapshot {
    /// Selected items joined with `" + "`, or `None` when nothing is picked.
    pub fn selection_label(&self) -> Option<String> {
        if self.selected_items.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.selected_items.iter().map(Item::name).collect();
        Some(names.join(" + "))
    }

    /// Text of the current result, if any.
    pub fn result_label(&self) -> Option<&str> {
        self.current_result.as_ref().map(Outcome::label)
    }

    /// Serialize for hosts that render out of process.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
