//! Coverage and requirement aggregation over the weekly bucket grid.
//!
//! Coverage folds every assignment into per-hour, per-area headcounts.
//! Requirement derives from the scenario's minimums alone — it reflects
//! staffing policy whether or not anyone is actually scheduled. Where two
//! shift codes of the same area overlap a bucket, the requirement is the
//! maximum concurrently-required headcount, never the sum.

use crate::error::ConfigError;
use crate::models::{Assignment, CoverageGrid, Scenario, ShiftLibrary, DAYS_PER_WEEK};

/// Computes the covered and required headcount grids.
///
/// Returns `(coverage, required)`. Fails with
/// [`ConfigError::UnknownShiftCode`] if an assignment or area minimum
/// names a code absent from the library.
pub fn aggregate(
    assignments: &[Assignment],
    scenario: &Scenario,
    library: &ShiftLibrary,
) -> Result<(CoverageGrid, CoverageGrid), ConfigError> {
    let mut coverage = CoverageGrid::new();
    for assignment in assignments {
        let shift = library.get(&assignment.shift_code).ok_or_else(|| {
            ConfigError::UnknownShiftCode {
                area: assignment.area_id.clone(),
                code: assignment.shift_code.clone(),
            }
        })?;
        for bucket in shift.buckets(assignment.day_index, assignment.half) {
            *coverage
                .entry(bucket)
                .or_default()
                .entry(assignment.area_id.clone())
                .or_insert(0) += 1;
        }
    }

    let mut required = CoverageGrid::new();
    for area in &scenario.areas {
        for (code, &min) in &area.min_by_shift {
            if min == 0 {
                continue;
            }
            let shift = library
                .get(code)
                .ok_or_else(|| ConfigError::UnknownShiftCode {
                    area: area.id.clone(),
                    code: code.clone(),
                })?;
            for day in 0..DAYS_PER_WEEK {
                if !scenario.operates_on(day) {
                    continue;
                }
                for bucket in shift.buckets(day, false) {
                    let slot = required
                        .entry(bucket)
                        .or_default()
                        .entry(area.id.clone())
                        .or_insert(0);
                    *slot = (*slot).max(min);
                }
            }
        }
    }

    Ok((coverage, required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Person};

    fn assignment(person: &str, day: usize, area: &str, code: &str) -> Assignment {
        Assignment {
            person_id: person.into(),
            day_index: day,
            area_id: area.into(),
            shift_code: code.into(),
            half: false,
        }
    }

    fn floor_scenario() -> Scenario {
        Scenario::new("s")
            .with_person(Person::new("a").with_skill("floor"))
            .with_area(Area::new("floor").with_min("M", 2))
    }

    #[test]
    fn test_coverage_counts_heads() {
        let scenario = floor_scenario();
        let lib = ShiftLibrary::standard();
        let assignments = vec![
            assignment("a", 0, "floor", "M"),
            assignment("b", 0, "floor", "M"),
        ];

        let (coverage, _) = aggregate(&assignments, &scenario, &lib).unwrap();
        // M covers hours 6..14 on day 0.
        for hour in 6..14 {
            assert_eq!(coverage[&hour]["floor"], 2);
        }
        assert!(!coverage.contains_key(&5));
        assert!(!coverage.contains_key(&14));
    }

    #[test]
    fn test_required_from_policy_not_roster() {
        let scenario = floor_scenario();
        let lib = ShiftLibrary::standard();

        // Nobody scheduled at all; requirement stands regardless.
        let (coverage, required) = aggregate(&[], &scenario, &lib).unwrap();
        assert!(coverage.is_empty());
        for day in 0..DAYS_PER_WEEK {
            for hour in 6..14 {
                assert_eq!(required[&(day * 24 + hour)]["floor"], 2);
            }
        }
    }

    #[test]
    fn test_required_takes_max_not_sum() {
        // M 06:00-14:00 min 1 and D12 08:00-20:00 min 3 overlap hours 8..14.
        let scenario = Scenario::new("s")
            .with_area(Area::new("floor").with_min("M", 1).with_min("D12", 3));
        let lib = ShiftLibrary::standard();

        let (_, required) = aggregate(&[], &scenario, &lib).unwrap();
        assert_eq!(required[&6]["floor"], 1); // M only
        assert_eq!(required[&10]["floor"], 3); // overlap → max(1, 3)
        assert_eq!(required[&19]["floor"], 3); // D12 only
    }

    #[test]
    fn test_night_shift_wraps_week() {
        let scenario = Scenario::new("s")
            .with_person(Person::new("a").with_skill("floor"))
            .with_area(Area::new("floor").with_min("N", 1));
        let lib = ShiftLibrary::standard();
        let assignments = vec![assignment("a", 6, "floor", "N")];

        let (coverage, required) = aggregate(&assignments, &scenario, &lib).unwrap();
        // Day 6 N spills into day 0 hours 0..6.
        assert_eq!(coverage[&166]["floor"], 1);
        assert_eq!(coverage[&167]["floor"], 1);
        for hour in 0..6 {
            assert_eq!(coverage[&hour]["floor"], 1);
        }
        // Requirement wraps the same way (day 6 demand reaches day 0).
        assert_eq!(required[&0]["floor"], 1);
    }

    #[test]
    fn test_half_day_covers_first_half() {
        let scenario = floor_scenario();
        let lib = ShiftLibrary::standard();
        let mut a = assignment("a", 0, "floor", "M");
        a.half = true;

        let (coverage, _) = aggregate(&[a], &scenario, &lib).unwrap();
        for hour in 6..10 {
            assert_eq!(coverage[&hour]["floor"], 1);
        }
        assert!(!coverage.contains_key(&10));
    }

    #[test]
    fn test_sunday_not_required_when_not_continuous() {
        let scenario = floor_scenario().with_continuous(false);
        let lib = ShiftLibrary::standard();

        let (_, required) = aggregate(&[], &scenario, &lib).unwrap();
        assert!(required.contains_key(&(5 * 24 + 6))); // Saturday required
        assert!(!required.contains_key(&(6 * 24 + 6))); // Sunday unconstrained
    }

    #[test]
    fn test_unknown_code_in_assignment() {
        let scenario = floor_scenario();
        let lib = ShiftLibrary::standard();
        let err = aggregate(&[assignment("a", 0, "floor", "ZZ")], &scenario, &lib).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownShiftCode { .. }));
    }
}
