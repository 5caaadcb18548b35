//! Shift models and pattern expansion.
//!
//! A shift model defines a fixed 7-day cycle of work, rest, and half
//! days. Expansion rotates the cycle by a per-person offset so that
//! consecutive people in the scenario's list have staggered rest blocks —
//! this is what keeps coverage non-zero across all 7 days even though
//! every individual works fewer than 7. The offset depends only on list
//! position; there is no randomness and no clock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::DAYS_PER_WEEK;

/// A repeating work pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftModel {
    /// Five 8-hour days, two rest days (`5x8`).
    FiveByEight,
    /// Four 10-hour days, three rest days (`4x10`).
    FourByTen,
    /// 2 on / 2 off / 3 on with 12-hour shifts (`223-12h`).
    TwoTwoThreeTwelve,
    /// Five full days, one half day, one rest day (`5plus1half`).
    FivePlusOneHalf,
}

/// One day of a person's expanded pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternDay {
    /// Works a full shift; the shift code is chosen by the allocator.
    Work,
    /// Day off.
    Rest,
    /// Works the first half of a shift.
    Half,
}

impl PatternDay {
    /// Whether the person is present at all on this day.
    #[inline]
    pub fn is_working(&self) -> bool {
        !matches!(self, PatternDay::Rest)
    }
}

impl ShiftModel {
    /// All known models.
    pub const ALL: [ShiftModel; 4] = [
        ShiftModel::FiveByEight,
        ShiftModel::FourByTen,
        ShiftModel::TwoTwoThreeTwelve,
        ShiftModel::FivePlusOneHalf,
    ];

    /// The model's external id.
    pub fn id(&self) -> &'static str {
        match self {
            ShiftModel::FiveByEight => "5x8",
            ShiftModel::FourByTen => "4x10",
            ShiftModel::TwoTwoThreeTwelve => "223-12h",
            ShiftModel::FivePlusOneHalf => "5plus1half",
        }
    }

    /// The model's base 7-day cycle, before per-person rotation.
    fn base_cycle(&self) -> [PatternDay; DAYS_PER_WEEK] {
        use PatternDay::{Half as H, Rest as R, Work as W};
        match self {
            ShiftModel::FiveByEight => [W, W, W, W, W, R, R],
            ShiftModel::FourByTen => [W, W, W, W, R, R, R],
            ShiftModel::TwoTwoThreeTwelve => [W, W, R, R, W, W, W],
            ShiftModel::FivePlusOneHalf => [W, W, W, W, W, H, R],
        }
    }

    /// Rotation step between consecutive people: the length of the
    /// cycle's off-block. Multiplying by list position yields disjoint
    /// staggered rest blocks for as many people as the week allows.
    fn stagger(&self) -> usize {
        match self {
            ShiftModel::FiveByEight => 2,
            ShiftModel::FourByTen => 3,
            ShiftModel::TwoTwoThreeTwelve => 2,
            ShiftModel::FivePlusOneHalf => 2,
        }
    }
}

impl fmt::Display for ShiftModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShiftModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| ConfigError::UnknownModel(s.to_string()))
    }
}

/// Expands a model into a per-day pattern for one person.
///
/// `person_index` is the person's position in the scenario list; it
/// determines the rotation offset `(person_index * stagger) % 7`.
/// `horizon_days` may exceed the cycle length (e.g. 28 for a 4-week
/// view); the cycle simply repeats.
pub fn expand(model: ShiftModel, person_index: usize, horizon_days: usize) -> Vec<PatternDay> {
    let cycle = model.base_cycle();
    let offset = (person_index * model.stagger()) % cycle.len();
    (0..horizon_days)
        .map(|day| cycle[(day % cycle.len() + offset) % cycle.len()])
        .collect()
}
