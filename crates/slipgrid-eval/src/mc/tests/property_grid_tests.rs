use proptest::prelude::*;
use slipgrid_mdp::{Action, Cell, GridSpec, GridState, PROB_TOLERANCE};

fn arbitrary_grid() -> impl Strategy<Value = GridSpec> {
    (1usize..6, 1usize..6)
        .prop_flat_map(|(height, width)| {
            (
                Just(height),
                Just(width),
                proptest::collection::vec(
                    prop_oneof![Just('F'), Just('H'), Just('G')],
                    height * width,
                ),
                0..height * width,
            )
        })
        .prop_map(|(_height, width, mut tags, start)| {
            tags[start] = 'S';
            let rows = tags
                .chunks(width)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>();
            GridSpec::from_rows(rows)
        })
}

proptest! {
    #[test]
    fn transition_distributions_always_sum_to_one(spec in arbitrary_grid()) {
        let mdp = spec.compile().expect("generated grids are valid");

        for row in 0..mdp.rows() {
            for col in 0..mdp.cols() {
                let state = GridState::Cell { row, col };
                for &action in mdp.actions(state) {
                    let outcomes = mdp.transition(state, action).expect("legal transition");
                    let sum: f64 = outcomes.iter().map(|(_, prob)| prob).sum();
                    prop_assert!((sum - 1.0).abs() < PROB_TOLERANCE);

                    for &(next, prob) in &outcomes {
                        prop_assert!(prob > 0.0);
                        if let GridState::Cell { row, col } = next {
                            prop_assert!(row < mdp.rows() && col < mdp.cols());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn absorbing_is_a_fixed_point_on_any_grid(spec in arbitrary_grid()) {
        let mdp = spec.compile().expect("generated grids are valid");

        let outcomes = mdp
            .transition(GridState::Absorbing, Action::Absorb)
            .expect("absorbing transition");
        prop_assert_eq!(outcomes, vec![(GridState::Absorbing, 1.0)]);
        prop_assert_eq!(mdp.reward(GridState::Absorbing), 0.0);
    }

    #[test]
    fn sampled_outcomes_come_from_the_distribution(
        spec in arbitrary_grid(),
        sample in 0.0..1.0f64,
    ) {
        let mdp = spec.compile().expect("generated grids are valid");
        let start = mdp.start_state();

        for &action in mdp.actions(start) {
            let outcomes = mdp.transition(start, action).expect("legal transition");
            let (next, reward, terminal) = mdp
                .sample_transition(start, action, sample)
                .expect("legal transition");

            prop_assert!(outcomes.iter().any(|&(state, _)| state == next));
            prop_assert_eq!(reward, mdp.reward(next));
            prop_assert_eq!(terminal, mdp.is_terminal(next));
        }
    }

    #[test]
    fn start_state_matches_the_placed_tag(spec in arbitrary_grid()) {
        let mdp = spec.compile().expect("generated grids are valid");

        let start = mdp.start_state();
        let is_cell = matches!(start, GridState::Cell { .. });
        prop_assert!(is_cell);
        if let GridState::Cell { row, col } = start {
            prop_assert_eq!(mdp.cell(row, col), Some(Cell::Start));
        }
    }
}
