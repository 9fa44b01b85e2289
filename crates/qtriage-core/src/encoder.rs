//! Capacity-constrained knapsack → quadratic binary model encoding.
//!
//! Given parallel cost/weight arrays and an effort capacity, build the
//! penalized QUBO whose low-energy assignments correspond to good
//! feasible selections. The capacity inequality becomes an equality with
//! a non-negative slack expressed in binary expansion: slack bits carry
//! the powers of two `2^0 .. 2^(M-1)` for `M = floor(log2(capacity))`,
//! plus one final coefficient `capacity + 1 - 2^M` covering the
//! remainder, so the representable slack range is exactly `0..=capacity`.
//!
//! The coefficient scheme is fixed and must not be "improved": linear
//! `P*w_i^2 - c_i` on decisions, `P*a_k^2` on slack bits, quadratic
//! `2*P*w_i*w_j` / `2*P*a_k*a_l` within each family and `-2*P*w_i*a_k`
//! across, with penalty `P = max(costs)`. Downstream behavior depends on
//! this exact scaling.

use serde::{Deserialize, Serialize};

use crate::domain::{Result, TriageError};
use crate::model::{BinaryQuadraticModel, Variable};

/// Effort budget configuration, passed into the encoder explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffortBudget {
    /// Capacity in effort minutes.
    pub effort_capacity: i64,
}

impl Default for EffortBudget {
    fn default() -> Self {
        EffortBudget {
            effort_capacity: 100,
        }
    }
}

impl EffortBudget {
    pub fn new(effort_capacity: i64) -> Self {
        EffortBudget { effort_capacity }
    }
}

/// Slack coefficients for a capacity.
///
/// `capacity <= 0` yields no slack at all: the inequality has no room,
/// and `log2` of a non-positive capacity is undefined.
pub fn slack_coefficients(capacity: i64) -> Vec<i64> {
    if capacity <= 0 {
        return Vec::new();
    }
    let m = capacity.ilog2();
    let mut coefficients: Vec<i64> = (0..m).map(|k| 1i64 << k).collect();
    coefficients.push(capacity + 1 - (1i64 << m));
    coefficients
}

/// Encode a knapsack instance as a quadratic binary model.
///
/// `costs` and `weights` are the parallel arrays from normalization;
/// index `i` maps to decision variable `x_i`. An empty instance yields an
/// empty model. All-zero costs give a zero penalty coefficient, a
/// degenerate but well-defined model.
///
/// # Errors
///
/// `TriageError::LengthMismatch` when the arrays differ in length.
pub fn encode_knapsack(
    costs: &[i64],
    weights: &[i64],
    capacity: i64,
) -> Result<BinaryQuadraticModel> {
    if costs.len() != weights.len() {
        return Err(TriageError::LengthMismatch {
            costs: costs.len(),
            weights: weights.len(),
        });
    }

    let mut bqm = BinaryQuadraticModel::new();
    let n = costs.len();
    let penalty = costs.iter().copied().max().unwrap_or(0) as f64;
    let slack = slack_coefficients(capacity);

    for i in 0..n {
        let w = weights[i] as f64;
        bqm.set_linear(Variable::Decision(i), penalty * w * w - costs[i] as f64);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            bqm.set_quadratic(
                Variable::Decision(i),
                Variable::Decision(j),
                2.0 * penalty * weights[i] as f64 * weights[j] as f64,
            );
        }
    }

    for (k, &a) in slack.iter().enumerate() {
        let a = a as f64;
        bqm.set_linear(Variable::Slack(k), penalty * a * a);
    }

    for k in 0..slack.len() {
        for l in (k + 1)..slack.len() {
            bqm.set_quadratic(
                Variable::Slack(k),
                Variable::Slack(l),
                2.0 * penalty * slack[k] as f64 * slack[l] as f64,
            );
        }
    }

    for i in 0..n {
        for (k, &a) in slack.iter().enumerate() {
            bqm.set_quadratic(
                Variable::Decision(i),
                Variable::Slack(k),
                -2.0 * penalty * weights[i] as f64 * a as f64,
            );
        }
    }

    Ok(bqm)
}
