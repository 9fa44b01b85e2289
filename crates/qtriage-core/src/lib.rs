//! qtriage Core Library
//!
//! Encodes a list of software-issue incidents as a knapsack QUBO
//! (quadratic binary model with logarithmic slack variables), submits it
//! to a pluggable minimizer, and decodes the returned bit assignment into
//! a sorted incident selection.

pub mod decode;
pub mod domain;
pub mod encoder;
pub mod model;
pub mod normalize;
pub mod obs;
pub mod plan;
pub mod solver;
pub mod telemetry;

pub use decode::decode_selection;
pub use domain::{Incident, IncidentReport, Result, Severity, TriageError};
pub use encoder::{encode_knapsack, slack_coefficients, EffortBudget};
pub use model::{BinaryQuadraticModel, Sample, Variable};
pub use normalize::{normalize_incidents, read_effort, read_severity, EffortReading, SeverityReading};
pub use plan::{plan_remediation, TriagePlan};
pub use solver::exhaustive::ExhaustiveMinimizer;
pub use solver::remote::{RemoteMinimizer, RemoteMinimizerConfig};
pub use solver::{minimize_with_deadline, MinimizerService};
pub use telemetry::init_tracing;
