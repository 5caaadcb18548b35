//! Roster domain models.
//!
//! Input side: `ShiftLibrary` (codes and clock ranges), `Area` (per-shift
//! minimum headcounts), `Person` (area skills), `Scenario` (the full
//! planning input). Output side: `Assignment`, `Gap`, `Metrics`,
//! `Solution`.
//!
//! All types serialize with serde; the host application persists
//! `Solution` values and rehydrates them without engine involvement.

mod area;
mod person;
mod scenario;
mod shift;
mod solution;

pub use area::Area;
pub use person::Person;
pub use scenario::{Scenario, TargetMode};
pub use shift::{
    ClockTime, ShiftDefinition, ShiftLibrary, BUCKETS_PER_WEEK, DAYS_PER_WEEK, SATURDAY_INDEX,
};
pub use solution::{Assignment, CoverageGrid, Gap, Metrics, Solution};
