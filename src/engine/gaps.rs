//! Gap detection: requirement minus coverage.
//!
//! A gap is emitted for every `(bucket, area)` where the required
//! headcount exceeds the covered headcount. Buckets and areas absent from
//! the requirement grid never gap, whatever their coverage. Output is
//! ordered ascending by bucket then area id for reproducible diffing.

use crate::models::{CoverageGrid, Gap, Scenario};

/// Diffs coverage against requirement and reports every shortfall.
///
/// Area criticality is copied onto each gap so scoring can stay a pure
/// function of the metrics; an area missing from the scenario falls back
/// to criticality 1.
pub fn detect_gaps(coverage: &CoverageGrid, required: &CoverageGrid, scenario: &Scenario) -> Vec<Gap> {
    let mut gaps = Vec::new();
    for (&bucket, areas) in required {
        for (area_id, &need) in areas {
            let covered = coverage
                .get(&bucket)
                .and_then(|a| a.get(area_id))
                .copied()
                .unwrap_or(0);
            if need > covered {
                let criticality = scenario.area(area_id).map_or(1, |a| a.criticality);
                gaps.push(Gap {
                    bucket,
                    area_id: area_id.clone(),
                    criticality,
                    missing: need - covered,
                });
            }
        }
    }
    gaps
}
