//! Exact-minimum scenarios: the encoded model's true minimum, found by
//! the exhaustive minimizer, must match an independent enumeration of the
//! penalized objective.

use qtriage_core::{
    decode_selection, encode_knapsack, slack_coefficients, ExhaustiveMinimizer, MinimizerService,
};

/// Independently enumerate the penalized objective over all decision
/// subsets and all slack assignments, in integer arithmetic, and return
/// the minimum energy plus the first subset achieving it.
fn reference_minimum(costs: &[i64], weights: &[i64], capacity: i64) -> (i64, Vec<usize>) {
    let penalty = costs.iter().copied().max().unwrap_or(0);
    let slack = slack_coefficients(capacity);
    let n = costs.len();

    let mut best_energy = i64::MAX;
    let mut best_subset = Vec::new();

    for x_mask in 0u32..(1 << n) {
        let subset: Vec<usize> = (0..n).filter(|i| x_mask & (1 << i) != 0).collect();
        let severity: i64 = subset.iter().map(|&i| weights[i]).sum();
        let cost: i64 = subset.iter().map(|&i| costs[i]).sum();

        for y_mask in 0u32..(1 << slack.len()) {
            let slack_sum: i64 = slack
                .iter()
                .enumerate()
                .filter(|(k, _)| y_mask & (1 << k) != 0)
                .map(|(_, &a)| a)
                .sum();
            let gap = severity - slack_sum;
            let energy = penalty * gap * gap - cost;
            if energy < best_energy {
                best_energy = energy;
                best_subset = subset.clone();
            }
        }
    }

    (best_energy, best_subset)
}

#[tokio::test]
async fn scenario_a_model_minimum_matches_reference() {
    // Severities BLOCKER/INFO/MAJOR, efforts 50/10/80 minutes, budget 100.
    let costs = [50, 10, 80];
    let weights = [5, 1, 3];

    let (expected_energy, expected_subset) = reference_minimum(&costs, &weights, 100);
    // Severity sums stay far below the representable slack range here, so
    // the penalty always zeroes out and the minimum takes every item.
    assert_eq!(expected_energy, -140);
    assert_eq!(expected_subset, vec![0, 1, 2]);

    let model = encode_knapsack(&costs, &weights, 100).unwrap();
    let sample = ExhaustiveMinimizer::new().minimize(&model).await.unwrap();
    assert_eq!(sample.energy, expected_energy as f64);
    assert_eq!(decode_selection(&sample), expected_subset);
}

#[tokio::test]
async fn binding_budget_prefers_the_feasible_subset() {
    // Weights 2/3 against capacity 4: selecting both (weight 5) overshoots
    // what slack can absorb and pays the penalty.
    let costs = [5, 6];
    let weights = [2, 3];

    let (expected_energy, expected_subset) = reference_minimum(&costs, &weights, 4);
    assert_eq!(expected_energy, -6);
    assert_eq!(expected_subset, vec![1]);

    let model = encode_knapsack(&costs, &weights, 4).unwrap();
    let sample = ExhaustiveMinimizer::new().minimize(&model).await.unwrap();
    assert_eq!(sample.energy, -6.0);
    assert_eq!(decode_selection(&sample), vec![1]);
}

#[test]
fn penalty_dominance_over_the_overshooting_subset() {
    use qtriage_core::Variable;
    use std::collections::BTreeMap;

    let model = encode_knapsack(&[5, 6], &[2, 3], 4).unwrap();

    // Both items selected, slack at its maximum 4: weight sum 5 still
    // overshoots by 1 and pays P * 1^2 on top of the -11 objective.
    let mut overshooting = BTreeMap::new();
    overshooting.insert(Variable::Decision(0), 1);
    overshooting.insert(Variable::Decision(1), 1);
    overshooting.insert(Variable::Slack(0), 1);
    overshooting.insert(Variable::Slack(1), 1);
    overshooting.insert(Variable::Slack(2), 1);
    assert_eq!(model.energy(&overshooting), 6.0 - 11.0);

    // Item 1 alone with slack matching its weight exactly: no penalty.
    let mut feasible = BTreeMap::new();
    feasible.insert(Variable::Decision(1), 1);
    feasible.insert(Variable::Slack(0), 1);
    feasible.insert(Variable::Slack(1), 1);
    assert_eq!(model.energy(&feasible), -6.0);

    assert!(model.energy(&overshooting) > model.energy(&feasible));
}

#[tokio::test]
async fn scenario_b_empty_instance() {
    let model = encode_knapsack(&[], &[], 100).unwrap();
    assert_eq!(model.num_variables(), 0);

    let sample = ExhaustiveMinimizer::new().minimize(&model).await.unwrap();
    assert_eq!(sample.energy, 0.0);
    assert!(decode_selection(&sample).is_empty());
}

#[tokio::test]
async fn scenario_d_zero_capacity_solves_without_slack() {
    let model = encode_knapsack(&[30, 10], &[3, 1], 0).unwrap();
    assert!(model.variables().iter().all(|v| v.is_decision()));

    let sample = ExhaustiveMinimizer::new().minimize(&model).await.unwrap();
    let (expected_energy, expected_subset) = reference_minimum(&[30, 10], &[3, 1], 0);
    assert_eq!(sample.energy, expected_energy as f64);
    assert_eq!(decode_selection(&sample), expected_subset);
}
