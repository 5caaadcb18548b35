//! Coverage-based roster generation and scoring.
//!
//! Builds weekly staff rosters from a scenario (people, areas, per-shift
//! minimum headcounts, target-hours policy) and a repeating shift pattern,
//! then judges the result: per-hour coverage versus requirement, every
//! shortfall, the equity of hours and weekend load across people, and a
//! single comparable score.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ShiftLibrary`, `Area`, `Person`,
//!   `Scenario`, `Assignment`, `Gap`, `Metrics`, `Solution`
//! - **`engine`**: Pattern expansion, greedy allocation, coverage
//!   aggregation, gap detection, fairness metrics, scoring, and the
//!   `Generator` orchestrator
//! - **`validation`**: Scenario integrity checks (duplicate IDs, shift
//!   code references)
//!
//! # Time Model
//!
//! The horizon is one Monday-start week, discretized into 168 hour-wide
//! buckets (`day_index * 24 + hour`). Shifts crossing midnight on day 6
//! wrap back into day 0; the week is cyclic.
//!
//! # Determinism
//!
//! Generation is a synchronous pure computation. Given structurally equal
//! inputs, assignments, metrics, and score are identical on every call;
//! only `Solution::id` is freshly minted. There is no randomness and no
//! dependency on wall-clock time.
//!
//! # Example
//!
//! ```
//! use roster_engine::models::{Area, Person, Scenario};
//! use roster_engine::generate_solution;
//!
//! let scenario = Scenario::new("ward A")
//!     .with_area(Area::new("floor").with_min("M", 1))
//!     .with_person(Person::new("alice").with_skill("floor"))
//!     .with_person(Person::new("bob").with_skill("floor"));
//!
//! let solution = generate_solution(&scenario, "5x8").unwrap();
//! assert!(solution.score <= 1000.0);
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod validation;

pub use engine::{generate_solution, Generator, PatternDay, ShiftModel};
pub use error::ConfigError;
