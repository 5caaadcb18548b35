//! Scenario (planning input) model.
//!
//! A scenario bundles everything the generator needs besides the shift
//! model: the workforce, the areas with their staffing minimums, the break
//! policy, and the contractual target-hours mode.

use serde::{Deserialize, Serialize};

use super::{Area, Person};

/// Contractual target-hours policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetMode {
    /// 40 hours per week.
    Weekly40,
    /// 42 hours per week.
    Weekly42,
    /// 40 hours per week, accounted over a 4-week month.
    Monthly40,
}

impl TargetMode {
    /// Weekly target hours under this policy.
    pub fn weekly_target_hours(&self) -> f64 {
        match self {
            TargetMode::Weekly40 | TargetMode::Monthly40 => 40.0,
            TargetMode::Weekly42 => 42.0,
        }
    }

    /// Accounting period length in days (7 for weekly modes, 28 for monthly).
    pub fn period_days(&self) -> usize {
        match self {
            TargetMode::Weekly40 | TargetMode::Weekly42 => 7,
            TargetMode::Monthly40 => 28,
        }
    }
}

/// A planning scenario: workforce, areas, and staffing policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Contractual target-hours mode.
    pub target_mode: TargetMode,
    /// Scenario-wide unpaid break per worked shift (minutes). A per-shift
    /// override takes precedence when larger.
    pub break_minutes: u32,
    /// Whether areas operate all 7 days. When `false`, no staffing is
    /// required on Sunday (day index 6).
    pub operation_continuous: bool,
    /// The workforce, in allocation order.
    pub people: Vec<Person>,
    /// The staffed areas.
    pub areas: Vec<Area>,
}

impl Scenario {
    /// Creates a scenario with defaults: weekly 40h, 30-minute break,
    /// continuous operation, no people, no areas.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_mode: TargetMode::Weekly40,
            break_minutes: 30,
            operation_continuous: true,
            people: Vec::new(),
            areas: Vec::new(),
        }
    }

    /// Sets the target-hours mode.
    pub fn with_target_mode(mut self, mode: TargetMode) -> Self {
        self.target_mode = mode;
        self
    }

    /// Sets the scenario-wide break.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Sets whether the operation runs all 7 days.
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.operation_continuous = continuous;
        self
    }

    /// Adds a person (allocation order follows insertion order).
    pub fn with_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    /// Adds an area.
    pub fn with_area(mut self, area: Area) -> Self {
        self.areas.push(area);
        self
    }

    /// Whether staffing is required on the given day index.
    #[inline]
    pub fn operates_on(&self, day_index: usize) -> bool {
        self.operation_continuous || day_index < 6
    }

    /// Looks up an area by id.
    pub fn area(&self, area_id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == area_id)
    }
}
