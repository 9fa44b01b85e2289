//! Severity/effort normalization.
//!
//! Raw incident fields become the integer cost/weight arrays the encoder
//! consumes. Normalization is permissive by contract: unrecognized
//! severities and unsupported effort units degrade to 0 instead of
//! failing, because incident trackers routinely omit or localize these
//! fields. The structured `*Reading` outcomes keep the degradation
//! visible to callers without changing the numeric result. Only an effort
//! string with no digits at all is rejected outright.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{Incident, Result, Severity, TriageError};

/// Outcome of severity normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeverityReading {
    Recognized(Severity),
    /// Missing or unknown level name; carries the raw text for reporting.
    Unrecognized(String),
}

impl SeverityReading {
    /// Severity weight: the ordinal for recognized levels, 0 otherwise.
    pub fn weight(&self) -> i64 {
        match self {
            SeverityReading::Recognized(level) => level.ordinal(),
            SeverityReading::Unrecognized(_) => 0,
        }
    }
}

/// Outcome of effort normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffortReading {
    Minutes(i64),
    /// Parsed fine but the unit is not `min`; cost degrades to 0.
    /// Hours/days are a known gap, kept until the domain decides on a
    /// conversion.
    UnsupportedUnit { amount: i64, unit: String },
}

impl EffortReading {
    /// Cost in minutes: the amount for `min`, 0 for any other unit.
    pub fn cost(&self) -> i64 {
        match self {
            EffortReading::Minutes(n) => *n,
            EffortReading::UnsupportedUnit { .. } => 0,
        }
    }
}

/// Normalize a severity field. Exact-match over the five level names;
/// anything else (including a missing field) reads as weight 0.
pub fn read_severity(severity: Option<&str>) -> SeverityReading {
    match severity.and_then(Severity::parse) {
        Some(level) => SeverityReading::Recognized(level),
        None => SeverityReading::Unrecognized(severity.unwrap_or_default().to_string()),
    }
}

fn effort_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // First digit run, then the unit token that follows it.
    PATTERN.get_or_init(|| Regex::new(r"(\d+)(\D*)").expect("effort pattern is a valid literal"))
}

/// Normalize an effort string of the form `<digits><unit>`.
///
/// # Errors
///
/// `TriageError::MalformedEffort` when no digit run is present: that is a
/// structurally invalid record, not a merely unusual one.
pub fn read_effort(effort: &str) -> Result<EffortReading> {
    let captures = effort_pattern()
        .captures(effort)
        .ok_or_else(|| TriageError::MalformedEffort {
            raw: effort.to_string(),
        })?;

    let amount: i64 = captures[1].parse().map_err(|_| TriageError::MalformedEffort {
        raw: effort.to_string(),
    })?;
    let unit = &captures[2];

    if unit == "min" {
        Ok(EffortReading::Minutes(amount))
    } else {
        Ok(EffortReading::UnsupportedUnit {
            amount,
            unit: unit.to_string(),
        })
    }
}

/// Derive the parallel cost/weight arrays from an incident list.
///
/// Both outputs have exactly the input's length and order: index `i` of
/// either array always refers to incident `i`.
pub fn normalize_incidents(incidents: &[Incident]) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut costs = Vec::with_capacity(incidents.len());
    let mut weights = Vec::with_capacity(incidents.len());

    for incident in incidents {
        costs.push(read_effort(&incident.effort)?.cost());
        weights.push(read_severity(incident.severity.as_deref()).weight());
    }

    Ok((costs, weights))
}
