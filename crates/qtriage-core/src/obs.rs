//! Structured observability hooks for the solve lifecycle.
//!
//! Events are emitted at `info!` level; configure via `QTRIAGE_LOG`
//! (env-filter syntax) and `--json` for JSON output.

use tracing::info;

/// RAII guard that enters a solve-scoped tracing span.
pub struct SolveSpan {
    _span: tracing::span::EnteredSpan,
}

impl SolveSpan {
    /// Create and enter a span tagged with the solve id.
    pub fn enter(solve_id: &str) -> Self {
        let span = tracing::info_span!("qtriage.solve", solve_id = %solve_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: model built and submitted to the minimizer.
pub fn emit_solve_started(solve_id: &str, incidents: usize, variables: usize, capacity: i64) {
    info!(
        event = "solve.started",
        solve_id = %solve_id,
        incidents = incidents,
        variables = variables,
        capacity = capacity,
    );
}

/// Emit event: minimizer answered and the selection was decoded.
pub fn emit_solve_finished(solve_id: &str, energy: f64, selected: usize, duration_ms: u64) {
    info!(
        event = "solve.finished",
        solve_id = %solve_id,
        energy = energy,
        selected = selected,
        duration_ms = duration_ms,
    );
}

/// Emit event: minimizer failure (warning level).
pub fn emit_solve_failed(solve_id: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "solve.failed", solve_id = %solve_id, error = %error);
}
