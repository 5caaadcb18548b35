//! Scenario integrity checks.
//!
//! Run before generation. Detects:
//! - Duplicate person IDs
//! - Duplicate area IDs
//! - Area minimums referencing a shift code absent from the library
//!
//! All findings are configuration bugs: the first one found is returned
//! as a fatal [`ConfigError`] for the caller to fix. A structurally sound
//! scenario never fails later stages, whatever its staffing levels.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::models::{Scenario, ShiftLibrary};

/// Validates a scenario against a shift library.
///
/// Checks, in order:
/// 1. No duplicate person IDs
/// 2. No duplicate area IDs
/// 3. Every shift code named by an area exists in the library
pub fn validate_scenario(scenario: &Scenario, library: &ShiftLibrary) -> Result<(), ConfigError> {
    let mut person_ids = HashSet::new();
    for person in &scenario.people {
        if !person_ids.insert(person.id.as_str()) {
            return Err(ConfigError::MalformedScenario(format!(
                "duplicate person id '{}'",
                person.id
            )));
        }
    }

    let mut area_ids = HashSet::new();
    for area in &scenario.areas {
        if !area_ids.insert(area.id.as_str()) {
            return Err(ConfigError::MalformedScenario(format!(
                "duplicate area id '{}'",
                area.id
            )));
        }
    }

    for area in &scenario.areas {
        for code in area.min_by_shift.keys() {
            if !library.contains(code) {
                return Err(ConfigError::UnknownShiftCode {
                    area: area.id.clone(),
                    code: code.clone(),
                });
            }
        }
    }

    Ok(())
}
