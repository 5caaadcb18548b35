//! Fairness metrics: paid hours equity and weekend load.
//!
//! Paid hours for one assignment are the shift duration (halved for a
//! half-day) minus the larger of the scenario break and the shift's own
//! break override, clamped at zero. Unassigned days contribute nothing.
//! The spread is measured as the population standard deviation over all
//! people in the scenario, including those who never work.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::models::{Assignment, Scenario, ShiftLibrary, SATURDAY_INDEX};

/// Hours, spread, and Saturday counts for one roster.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessReport {
    /// Paid hours per person over the horizon (every person present,
    /// zero-hour people included).
    pub hours_by_person: BTreeMap<String, f64>,
    /// Population standard deviation of paid hours.
    pub fairness_std_dev: f64,
    /// Saturday assignments per person (only people with at least one).
    pub saturday_loads: BTreeMap<String, u32>,
}

/// Evaluates hour equity and weekend load.
pub fn evaluate_fairness(
    assignments: &[Assignment],
    scenario: &Scenario,
    library: &ShiftLibrary,
) -> Result<FairnessReport, ConfigError> {
    let mut hours_by_person: BTreeMap<String, f64> = scenario
        .people
        .iter()
        .map(|p| (p.id.clone(), 0.0))
        .collect();
    let mut saturday_loads: BTreeMap<String, u32> = BTreeMap::new();

    for assignment in assignments {
        let shift = library.get(&assignment.shift_code).ok_or_else(|| {
            ConfigError::UnknownShiftCode {
                area: assignment.area_id.clone(),
                code: assignment.shift_code.clone(),
            }
        })?;

        let mut worked = shift.duration_minutes();
        if assignment.half {
            worked /= 2;
        }
        let unpaid = scenario
            .break_minutes
            .max(shift.break_minutes.unwrap_or(0));
        let paid_minutes = worked.saturating_sub(unpaid);

        *hours_by_person
            .entry(assignment.person_id.clone())
            .or_insert(0.0) += paid_minutes as f64 / 60.0;

        if assignment.day_index == SATURDAY_INDEX {
            *saturday_loads
                .entry(assignment.person_id.clone())
                .or_insert(0) += 1;
        }
    }

    Ok(FairnessReport {
        fairness_std_dev: population_std_dev(&hours_by_person),
        hours_by_person,
        saturday_loads,
    })
}

/// Population standard deviation of the map's values; 0 for an empty map.
fn population_std_dev(values: &BTreeMap<String, f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.values().sum::<f64>() / n;
    let variance = values.values().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
