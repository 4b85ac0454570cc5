use crate::mc::{
    config::EvalConfig,
    evaluate::EvalSummary,
    policy::PolicyKind,
    report::{evaluate_report, pick_winner},
};

fn summary(mean_utility: f64, utility_variance: f64) -> EvalSummary {
    EvalSummary {
        n_trials: 10,
        mean_utility,
        utility_variance,
        p_goal: 0.0,
        p_hole: 0.0,
        p_none: 1.0,
        mean_length: 10.0,
    }
}

#[test]
fn higher_mean_utility_wins() {
    assert_eq!(
        pick_winner(&summary(0.2, 0.5), &summary(0.7, 9.0)),
        PolicyKind::Greedy
    );
    assert_eq!(
        pick_winner(&summary(0.7, 9.0), &summary(0.2, 0.5)),
        PolicyKind::Random
    );
}

#[test]
fn mean_tie_falls_back_to_lower_variance() {
    assert_eq!(
        pick_winner(&summary(0.5, 2.0), &summary(0.5, 1.0)),
        PolicyKind::Greedy
    );
    assert_eq!(
        pick_winner(&summary(0.5, 1.0), &summary(0.5, 2.0)),
        PolicyKind::Random
    );
}

#[test]
fn full_tie_falls_back_to_name_order() {
    // "greedy" sorts before "random".
    assert_eq!(
        pick_winner(&summary(0.5, 1.0), &summary(0.5, 1.0)),
        PolicyKind::Greedy
    );
}

#[test]
fn report_covers_every_configured_gamma() {
    let mdp = super::lake4x4();
    let config = EvalConfig {
        trials: 20,
        base_seed: 42,
        step_limit: 50,
        gammas: vec![0.5, 1.0],
    };

    let report = evaluate_report(&mdp, &config).expect("report succeeds");

    assert_eq!(report.n_trials, 20);
    assert_eq!(report.base_seed, 42);
    assert_eq!(report.gammas.len(), 2);

    for entry in report.gammas.values() {
        assert_eq!(entry.random.n_trials, 20);
        assert_eq!(entry.greedy.n_trials, 20);
        assert_eq!(entry.winner, pick_winner(&entry.random, &entry.greedy));
    }
}

#[test]
fn report_is_bit_reproducible() {
    let mdp = super::lake4x4();
    let config = EvalConfig {
        trials: 15,
        base_seed: 5,
        step_limit: 30,
        gammas: vec![0.9],
    };

    let first = evaluate_report(&mdp, &config).expect("report succeeds");
    let second = evaluate_report(&mdp, &config).expect("report succeeds");

    assert_eq!(first, second);
}
