//! End-to-end remediation planning.
//!
//! One stateless request: normalize the report, encode the knapsack,
//! make a single solve call against the injected minimizer, decode the
//! selection. The solve is the only long-latency step and runs under the
//! caller's optional deadline; there is no shared state between calls,
//! so concurrent invocations need no coordination.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decode::decode_selection;
use crate::domain::{IncidentReport, Result};
use crate::encoder::{encode_knapsack, EffortBudget};
use crate::normalize::normalize_incidents;
use crate::obs::{emit_solve_failed, emit_solve_finished, emit_solve_started, SolveSpan};
use crate::solver::{minimize_with_deadline, MinimizerService};

/// The decoded result of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriagePlan {
    /// Identifier of this solve request, also tagged on log events.
    pub solve_id: Uuid,
    /// Energy of the best sample the minimizer found (lower is better).
    pub energy: f64,
    /// Selected incident indices, ascending, 0-based against the report's
    /// `issues` order.
    pub selected: Vec<usize>,
    pub generated_at: DateTime<Utc>,
}

/// Plan which incidents to remediate within the effort budget.
///
/// # Errors
///
/// Propagates `MalformedEffort` from normalization and
/// `SolverUnavailable` / `ModelTooLarge` from the solve call.
pub async fn plan_remediation(
    report: &IncidentReport,
    budget: EffortBudget,
    minimizer: &dyn MinimizerService,
    deadline: Option<Duration>,
) -> Result<TriagePlan> {
    let solve_id = Uuid::new_v4();
    let _span = SolveSpan::enter(&solve_id.to_string());
    let start = Instant::now();

    let (costs, weights) = normalize_incidents(&report.issues)?;
    let model = encode_knapsack(&costs, &weights, budget.effort_capacity)?;

    emit_solve_started(
        &solve_id.to_string(),
        report.issues.len(),
        model.num_variables(),
        budget.effort_capacity,
    );

    let sample = match minimize_with_deadline(minimizer, &model, deadline).await {
        Ok(sample) => sample,
        Err(err) => {
            emit_solve_failed(&solve_id.to_string(), &err);
            return Err(err);
        }
    };

    let selected = decode_selection(&sample);
    emit_solve_finished(
        &solve_id.to_string(),
        sample.energy,
        selected.len(),
        start.elapsed().as_millis() as u64,
    );

    Ok(TriagePlan {
        solve_id,
        energy: sample.energy,
        selected,
        generated_at: Utc::now(),
    })
}
