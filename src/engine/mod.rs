//! The roster engine: pattern expansion through scoring.
//!
//! Pipeline, leaves first:
//!
//! 1. **`pattern`** — shift models and per-person work/rest expansion
//! 2. **`allocator`** — greedy day-by-day area/shift assignment
//! 3. **`coverage`** — per-hour covered and required headcount grids
//! 4. **`gaps`** — requirement minus coverage, per bucket and area
//! 5. **`fairness`** — paid hours equity and Saturday load
//! 6. **`score`** — one comparable number from the metrics alone
//! 7. **`generator`** — the orchestrator composing 1–6

pub mod allocator;
pub mod coverage;
pub mod fairness;
pub mod gaps;
pub mod generator;
pub mod pattern;
pub mod score;

pub use fairness::FairnessReport;
pub use generator::{generate_solution, Generator};
pub use pattern::{expand, PatternDay, ShiftModel};
pub use score::{score_solution, BASE_SCORE, FAIRNESS_WEIGHT, GAP_WEIGHT};
