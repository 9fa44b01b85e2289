//! Incident report input model.
//!
//! The input document is a JSON object with a top-level `issues` array.
//! Each issue carries at least a `severity` string (one of the five level
//! names) and an `effort` string (digits followed by a unit, e.g. `"30min"`).
//! Unknown extra fields are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// The five recognized severity levels, ordinal INFO=1 .. BLOCKER=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info = 1,
    Minor = 2,
    Major = 3,
    Critical = 4,
    Blocker = 5,
}

impl Severity {
    /// Exact-match lookup over the five level names.
    ///
    /// Anything else returns `None`; callers decide whether that degrades
    /// to weight 0 (see `normalize::read_severity`) or is rejected.
    pub fn parse(text: &str) -> Option<Severity> {
        match text {
            "INFO" => Some(Severity::Info),
            "MINOR" => Some(Severity::Minor),
            "MAJOR" => Some(Severity::Major),
            "CRITICAL" => Some(Severity::Critical),
            "BLOCKER" => Some(Severity::Blocker),
            _ => None,
        }
    }

    /// Ordinal weight, 1..=5.
    pub fn ordinal(self) -> i64 {
        self as i64
    }
}

/// A single incident as it appears in the input report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    /// Severity level name. Missing or unrecognized severities degrade to
    /// weight 0 rather than failing; trackers routinely omit this field.
    #[serde(default)]
    pub severity: Option<String>,

    /// Remediation effort estimate, digits plus unit (`"30min"`).
    pub effort: String,
}

/// The incident report document: top-level `issues` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IncidentReport {
    pub issues: Vec<Incident>,
}

impl IncidentReport {
    /// Load a report from a JSON file.
    ///
    /// Unreadable files and malformed JSON are fatal: the error surfaces
    /// to the caller, which reports it and exits non-zero.
    pub fn from_path(path: &Path) -> Result<IncidentReport> {
        let raw = std::fs::read_to_string(path)?;
        let report = serde_json::from_str(&raw)?;
        Ok(report)
    }
}
