//! Solution generation: the orchestrator over the whole engine.
//!
//! `Generator::generate` runs the pipeline in dependency order — expand
//! patterns per person, allocate, aggregate coverage and requirement,
//! detect gaps, evaluate fairness, score — and assembles an immutable
//! [`Solution`]. Validation happens first; everything after it succeeds
//! on well-formed input, including a scenario with zero people (which
//! yields a maximally deficient solution, not an error).
//!
//! Generation is deterministic: structurally equal inputs produce
//! structurally equal assignments, metrics, and score. Only the solution
//! id is freshly minted per call.

use uuid::Uuid;

use crate::error::ConfigError;
use crate::models::{Metrics, Scenario, ShiftLibrary, Solution, DAYS_PER_WEEK};
use crate::validation::validate_scenario;

use super::allocator::allocate;
use super::coverage::aggregate;
use super::fairness::evaluate_fairness;
use super::gaps::detect_gaps;
use super::pattern::{expand, ShiftModel};
use super::score::score_solution;

/// Roster generator bound to a shift library.
#[derive(Debug, Clone)]
pub struct Generator {
    library: ShiftLibrary,
}

impl Generator {
    /// Creates a generator over the standard shift library.
    pub fn new() -> Self {
        Self {
            library: ShiftLibrary::standard(),
        }
    }

    /// Uses a custom shift library.
    pub fn with_library(mut self, library: ShiftLibrary) -> Self {
        self.library = library;
        self
    }

    /// The library this generator resolves shift codes against.
    pub fn library(&self) -> &ShiftLibrary {
        &self.library
    }

    /// Generates one candidate roster for the scenario under a model.
    ///
    /// Never mutates the scenario; safe to call repeatedly or from
    /// independent threads, with no ordering between calls.
    pub fn generate(
        &self,
        scenario: &Scenario,
        model: ShiftModel,
    ) -> Result<Solution, ConfigError> {
        validate_scenario(scenario, &self.library)?;

        let patterns: Vec<_> = (0..scenario.people.len())
            .map(|i| expand(model, i, DAYS_PER_WEEK))
            .collect();

        let assignments = allocate(scenario, &self.library, &patterns)?;
        let (coverage, required) = aggregate(&assignments, scenario, &self.library)?;
        let gaps = detect_gaps(&coverage, &required, scenario);
        let fairness = evaluate_fairness(&assignments, scenario, &self.library)?;

        let metrics = Metrics {
            coverage,
            required,
            gaps,
            fairness_std_dev: fairness.fairness_std_dev,
            hours_by_person: fairness.hours_by_person,
            saturday_loads: fairness.saturday_loads,
        };
        let score = score_solution(&metrics);

        Ok(Solution {
            id: Uuid::new_v4().to_string(),
            model,
            assignments,
            metrics,
            score,
        })
    }

    /// Generates from a model id string (`5x8`, `4x10`, `223-12h`,
    /// `5plus1half`), failing with [`ConfigError::UnknownModel`].
    pub fn generate_by_id(
        &self,
        scenario: &Scenario,
        model_id: &str,
    ) -> Result<Solution, ConfigError> {
        self.generate(scenario, model_id.parse()?)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates one solution over the standard shift library.
pub fn generate_solution(scenario: &Scenario, model_id: &str) -> Result<Solution, ConfigError> {
    Generator::new().generate_by_id(scenario, model_id)
}
