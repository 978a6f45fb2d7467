//! Errors raised while building palettes and recipe tables.

use crate::validation::rules::Check;
use crate::validation::ConfigViolation;
use stillwater::validation::Validation;
use thiserror::Error;

/// Malformed palette or recipe definitions.
///
/// Carries every violation found. Fatal to startup: no partial table is
/// ever produced alongside this error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid recipe configuration: {}", summarize(.violations))]
pub struct ConfigurationError {
    violations: Vec<ConfigViolation>,
}

impl ConfigurationError {
    pub fn new(violations: Vec<ConfigViolation>) -> Self {
        Self { violations }
    }

    /// Convert a validation outcome, keeping all of its violations.
    pub(crate) fn from_validation(check: Check) -> Result<(), Self> {
        match check {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(Self::new(violations.iter().cloned().collect())),
        }
    }

    pub fn violations(&self) -> &[ConfigViolation] {
        &self.violations
    }
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_violation() {
        let err = ConfigurationError::new(vec![
            ConfigViolation::EmptyPalette,
            ConfigViolation::SelfPair {
                item: "Egg".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid recipe configuration: Palette declares no items; \
             Recipe 'Egg + Egg' combines an item with itself"
        );
    }
}
