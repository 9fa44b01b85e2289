//! Domain models for qtriage.
//!
//! Canonical definitions for the core entities:
//! - `Severity`: ordinal incident severity levels
//! - `Incident` / `IncidentReport`: the JSON input shape
//! - `TriageError`: error taxonomy for the whole pipeline

pub mod error;
pub mod incident;

pub use error::{Result, TriageError};
pub use incident::{Incident, IncidentReport, Severity};
