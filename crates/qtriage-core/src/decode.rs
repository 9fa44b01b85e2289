//! Selection decoding.

use crate::model::{Sample, Variable};

/// Extract the selected incident indices from a sample.
///
/// Keeps only decision variables whose bit is exactly 1 — slack bits are
/// bookkeeping for the capacity constraint and must never leak into the
/// selection — and returns the indices sorted ascending. Deterministic
/// and idempotent: the same sample always decodes to the same sequence.
pub fn decode_selection(sample: &Sample) -> Vec<usize> {
    let mut selected: Vec<usize> = sample
        .assignment
        .iter()
        .filter_map(|(variable, &bit)| match variable {
            Variable::Decision(i) if bit == 1 => Some(*i),
            _ => None,
        })
        .collect();
    selected.sort_unstable();
    selected
}
