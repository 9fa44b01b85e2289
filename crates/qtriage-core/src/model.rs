//! Quadratic binary model over tagged decision/slack variables.
//!
//! A model is a linear bias per variable plus a quadratic bias per
//! unordered pair of distinct variables. Keys are a tagged enum rather
//! than `"x0"`/`"y0"` strings, so the decision and slack families cannot
//! collide and decoding never has to guess a variable's family from its
//! name. Wire names (`x{i}` / `y{i}`) exist only at the solver boundary
//! via `Display`/`FromStr`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Variables
// ---------------------------------------------------------------------------

/// A binary variable in the model.
///
/// Ordering puts every decision variable before every slack variable,
/// each family sorted by index. That order is what `BTreeMap` iteration
/// and selection decoding rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    /// `x_i`: 1 means incident `i` is selected.
    Decision(usize),
    /// `y_k`: slack bit `k` of the capacity inequality's binary expansion.
    Slack(usize),
}

impl Variable {
    /// Whether this variable belongs to the decision family.
    pub fn is_decision(self) -> bool {
        matches!(self, Variable::Decision(_))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Decision(i) => write!(f, "x{i}"),
            Variable::Slack(k) => write!(f, "y{k}"),
        }
    }
}

impl FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_index = |digits: &str| {
            digits
                .parse::<usize>()
                .map_err(|_| format!("invalid variable index in {s:?}"))
        };
        if let Some(digits) = s.strip_prefix('x') {
            Ok(Variable::Decision(parse_index(digits)?))
        } else if let Some(digits) = s.strip_prefix('y') {
            Ok(Variable::Slack(parse_index(digits)?))
        } else {
            Err(format!("unknown variable family in {s:?}"))
        }
    }
}

// Wire form is the display name, so samples serialize as plain JSON maps.
impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VariableVisitor;

        impl Visitor<'_> for VariableVisitor {
            type Value = Variable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a variable name like \"x3\" or \"y1\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Variable, E> {
                Variable::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VariableVisitor)
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A quadratic binary model: minimize
/// `sum_i linear[v_i] * b_i + sum_{i<j} quadratic[(v_i, v_j)] * b_i * b_j`
/// over bit assignments `b`.
///
/// # Invariants
///
/// Each unordered pair of distinct variables has at most one quadratic
/// entry, stored under its canonically ordered key (first < second).
/// Self-pairs never appear in the quadratic map: for binary variables
/// `b * b == b`, so a self-pair contribution folds into the linear bias.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryQuadraticModel {
    linear: BTreeMap<Variable, f64>,
    quadratic: BTreeMap<(Variable, Variable), f64>,
}

impl BinaryQuadraticModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the linear bias of `v`, replacing any existing value.
    pub fn set_linear(&mut self, v: Variable, bias: f64) {
        self.linear.insert(v, bias);
    }

    /// Add to the linear bias of `v` (missing reads as 0).
    pub fn add_linear(&mut self, v: Variable, bias: f64) {
        *self.linear.entry(v).or_insert(0.0) += bias;
    }

    /// Set the quadratic bias of the unordered pair `{a, b}`.
    ///
    /// The pair is stored under its canonical order regardless of argument
    /// order. Passing `a == b` folds the bias into the linear map, keeping
    /// the no-self-pair invariant.
    pub fn set_quadratic(&mut self, a: Variable, b: Variable, bias: f64) {
        if a == b {
            self.add_linear(a, bias);
            return;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        self.quadratic.insert(key, bias);
    }

    pub fn linear(&self) -> &BTreeMap<Variable, f64> {
        &self.linear
    }

    pub fn quadratic(&self) -> &BTreeMap<(Variable, Variable), f64> {
        &self.quadratic
    }

    /// All variables mentioned anywhere in the model, in canonical order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: std::collections::BTreeSet<Variable> =
            self.linear.keys().copied().collect();
        for (a, b) in self.quadratic.keys() {
            vars.insert(*a);
            vars.insert(*b);
        }
        vars.into_iter().collect()
    }

    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty() && self.quadratic.is_empty()
    }

    /// Evaluate the objective at a bit assignment.
    ///
    /// Variables absent from the assignment read as 0.
    pub fn energy(&self, assignment: &BTreeMap<Variable, u8>) -> f64 {
        let bit = |v: &Variable| -> f64 {
            match assignment.get(v) {
                Some(1) => 1.0,
                _ => 0.0,
            }
        };
        let linear: f64 = self.linear.iter().map(|(v, bias)| bias * bit(v)).sum();
        let quadratic: f64 = self
            .quadratic
            .iter()
            .map(|((a, b), bias)| bias * bit(a) * bit(b))
            .sum();
        linear + quadratic
    }
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// One candidate assignment returned by a minimizer, with its energy.
/// Immutable once produced; lower energy is better.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    pub assignment: BTreeMap<Variable, u8>,
    pub energy: f64,
}
