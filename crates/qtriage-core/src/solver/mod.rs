//! Minimizer boundary.
//!
//! The combinatorial search is an external collaborator: anything that
//! accepts a quadratic binary model and returns one low-energy assignment
//! with its energy. Backends are heuristic and possibly non-deterministic;
//! callers get *a* low-energy sample, not a guaranteed global optimum.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Result, TriageError};
use crate::model::{BinaryQuadraticModel, Sample};

pub mod exhaustive;
pub mod remote;

/// Trait for minimizer backends (exhaustive reference, remote service, ...).
#[async_trait]
pub trait MinimizerService: Send + Sync {
    /// Submit a model and retrieve the best-known sample.
    async fn minimize(&self, model: &BinaryQuadraticModel) -> Result<Sample>;
}

/// One scoped solve call with an optional deadline.
///
/// The solve either returns one complete sample or fails atomically; a
/// deadline overrun surfaces as `SolverUnavailable`. No retries here —
/// retry/backoff policy, if wanted, belongs to the caller.
pub async fn minimize_with_deadline(
    service: &dyn MinimizerService,
    model: &BinaryQuadraticModel,
    deadline: Option<Duration>,
) -> Result<Sample> {
    match deadline {
        Some(limit) => tokio::time::timeout(limit, service.minimize(model))
            .await
            .map_err(|_| {
                TriageError::SolverUnavailable(format!(
                    "minimizer did not answer within {}s",
                    limit.as_secs_f64()
                ))
            })?,
        None => service.minimize(model).await,
    }
}
