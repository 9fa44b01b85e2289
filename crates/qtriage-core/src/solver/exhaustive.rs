//! Deterministic exact minimizer.
//!
//! Enumerates every bit assignment over the model's variables and keeps
//! the lowest-energy one, ties broken by enumeration order. Exact and
//! reproducible, which is what the tests and the out-of-the-box CLI need;
//! exponential in the variable count, hence the hard limit.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{Result, TriageError};
use crate::model::{BinaryQuadraticModel, Sample};
use crate::solver::MinimizerService;

/// Default cap on exhaustive enumeration (2^24 assignments).
pub const DEFAULT_VARIABLE_LIMIT: usize = 24;

/// Brute-force reference backend.
#[derive(Debug, Clone)]
pub struct ExhaustiveMinimizer {
    variable_limit: usize,
}

impl Default for ExhaustiveMinimizer {
    fn default() -> Self {
        ExhaustiveMinimizer {
            variable_limit: DEFAULT_VARIABLE_LIMIT,
        }
    }
}

impl ExhaustiveMinimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the variable limit. Every added variable doubles the work.
    pub fn with_variable_limit(variable_limit: usize) -> Self {
        ExhaustiveMinimizer { variable_limit }
    }
}

#[async_trait]
impl MinimizerService for ExhaustiveMinimizer {
    async fn minimize(&self, model: &BinaryQuadraticModel) -> Result<Sample> {
        let variables = model.variables();
        if variables.len() > self.variable_limit {
            return Err(TriageError::ModelTooLarge {
                variables: variables.len(),
                limit: self.variable_limit,
            });
        }

        // The empty model has exactly one assignment: the empty one.
        let mut best_assignment: BTreeMap<_, _> =
            variables.iter().map(|&v| (v, 0u8)).collect();
        let mut best_energy = model.energy(&best_assignment);

        for mask in 1u64..(1u64 << variables.len()) {
            let assignment: BTreeMap<_, _> = variables
                .iter()
                .enumerate()
                .map(|(bit, &v)| (v, ((mask >> bit) & 1) as u8))
                .collect();
            let energy = model.energy(&assignment);
            if energy < best_energy {
                best_energy = energy;
                best_assignment = assignment;
            }
        }

        Ok(Sample {
            assignment: best_assignment,
            energy: best_energy,
        })
    }
}
