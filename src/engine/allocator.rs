//! Greedy day-by-day allocation.
//!
//! # Algorithm
//!
//! For each day 0..6:
//! 1. Process areas in descending criticality, ascending id on ties.
//! 2. Within an area, fill shift codes in descending required headcount,
//!    ascending code on ties, pulling eligible people (skill match,
//!    pattern says work, not yet assigned today) in scenario list order
//!    until the minimum is met or people run out.
//! 3. People still unassigned after every minimum is handled go to the
//!    highest-criticality area they are skilled for, under that area's
//!    most demanded code, so present staff never goes unaccounted.
//!
//! This is a constructive heuristic, not an optimizer: the output is
//! deterministic and list-order-sensitive, with no randomized
//! tie-breaking.
//!
//! # Complexity
//! O(days * areas * codes * people).

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::models::{Assignment, Scenario, ShiftLibrary, DAYS_PER_WEEK};

use super::pattern::PatternDay;

/// Allocates every person to an area and shift for each day they work.
///
/// `patterns` is indexed parallel to `scenario.people`. No person ever
/// receives two assignments on the same day.
///
/// Fails with [`ConfigError::UnknownShiftCode`] if an area demands a code
/// the library does not define — a configuration bug, not a runtime
/// condition.
pub fn allocate(
    scenario: &Scenario,
    library: &ShiftLibrary,
    patterns: &[Vec<PatternDay>],
) -> Result<Vec<Assignment>, ConfigError> {
    let mut assignments = Vec::new();

    // Area processing order: criticality desc, id asc.
    let mut area_order: Vec<usize> = (0..scenario.areas.len()).collect();
    area_order.sort_by_key(|&i| {
        let area = &scenario.areas[i];
        (Reverse(area.criticality), area.id.clone())
    });

    for day in 0..DAYS_PER_WEEK {
        let mut assigned_today: HashSet<usize> = HashSet::new();

        if scenario.operates_on(day) {
            for &area_idx in &area_order {
                let area = &scenario.areas[area_idx];
                for (code, min) in area.demanded_codes() {
                    if !library.contains(code) {
                        return Err(ConfigError::UnknownShiftCode {
                            area: area.id.clone(),
                            code: code.to_string(),
                        });
                    }
                    let mut filled = 0;
                    for (person_idx, person) in scenario.people.iter().enumerate() {
                        if filled >= min {
                            break;
                        }
                        let day_kind = patterns[person_idx][day];
                        if !day_kind.is_working()
                            || assigned_today.contains(&person_idx)
                            || !person.has_skill(&area.id)
                        {
                            continue;
                        }
                        assignments.push(Assignment {
                            person_id: person.id.clone(),
                            day_index: day,
                            area_id: area.id.clone(),
                            shift_code: code.to_string(),
                            half: day_kind == PatternDay::Half,
                        });
                        assigned_today.insert(person_idx);
                        filled += 1;
                    }
                }
            }
        }

        // Leftover pass: working people nobody needed still show up
        // somewhere they are skilled for.
        for (person_idx, person) in scenario.people.iter().enumerate() {
            let day_kind = patterns[person_idx][day];
            if !day_kind.is_working() || assigned_today.contains(&person_idx) {
                continue;
            }
            let best_area = area_order
                .iter()
                .map(|&i| &scenario.areas[i])
                .find(|area| person.has_skill(&area.id));
            let Some(area) = best_area else {
                continue; // no matching skill for any area
            };
            let Some(code) = area.busiest_code() else {
                continue; // area demands no shift at all
            };
            assignments.push(Assignment {
                person_id: person.id.clone(),
                day_index: day,
                area_id: area.id.clone(),
                shift_code: code.to_string(),
                half: day_kind == PatternDay::Half,
            });
            assigned_today.insert(person_idx);
        }
    }

    Ok(assignments)
}
