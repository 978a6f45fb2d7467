//! Kitchen configuration loaded from TOML.
//!
//! A kitchen file declares the palette, optionally the closed set of dishes,
//! and the recipes:
//!
//! ```toml
//! reset_delay_ms = 1500
//! history_limit = 64
//! palette = ["Egg", "Onion"]
//! dishes = ["Omelette"]
//!
//! [[recipes]]
//! pair = ["Egg", "Onion"]
//! dish = "Omelette"
//! ```

pub mod error;

pub use error::LoadError;

use crate::builder::{ConfigurationError, RecipeTableBuilder, SelectionMachineBuilder};
use crate::core::{Dish, Item, Palette, RawRecipe, RecipeTable, DEFAULT_HISTORY_LIMIT};
use crate::selection::{SelectionMachine, DEFAULT_RESET_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const BUILTIN_KITCHEN: &str = include_str!("builtin.toml");

/// Static startup configuration of a kitchen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenConfig {
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    pub palette: Vec<Item>,
    #[serde(default)]
    pub dishes: Option<Vec<Dish>>,
    #[serde(default)]
    pub recipes: Vec<RawRecipe>,
}

fn default_reset_delay_ms() -> u64 {
    DEFAULT_RESET_DELAY_MS
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl KitchenConfig {
    /// The stock kitchen: eleven ingredients, seven dishes, every pair covered.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_toml_str(BUILTIN_KITCHEN)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded kitchen file");
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Validate the palette and recipes and build the lookup table.
    pub fn build_table(&self) -> Result<RecipeTable, ConfigurationError> {
        let palette = Palette::new(self.palette.iter().cloned())?;
        let mut builder = RecipeTableBuilder::new(palette).recipes(self.recipes.iter().cloned());
        if let Some(dishes) = &self.dishes {
            builder = builder.dishes(dishes.iter().cloned());
        }
        builder.build()
    }

    /// Build a ready-to-run selection machine.
    pub fn into_machine(self) -> Result<SelectionMachine, ConfigurationError> {
        let table = self.build_table()?;
        Ok(SelectionMachineBuilder::new(table)
            .reset_delay(self.reset_delay())
            .history_limit(self.history_limit)
            .build())
    }

    /// Read, validate and build a machine from a kitchen file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SelectionMachine, LoadError> {
        Ok(Self::from_file(path)?.into_machine()?)
    }
}
