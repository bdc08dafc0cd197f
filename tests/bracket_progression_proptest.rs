/// Property-based tests for bracket progression using proptest
///
/// These tests drive brackets of every accepted field size through
/// randomized decision orders and verify that the structural invariants
/// hold at every intermediate state.
use knockout::{BracketEngine, BracketError, BracketView, Competitor, MatchId, VALID_FIELD_SIZES};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy to pick one of the accepted field sizes
fn field_size_strategy() -> impl Strategy<Value = usize> {
    prop::sample::select(VALID_FIELD_SIZES.to_vec())
}

// Strategy to generate a decision script: which open match to decide
// next, and which side of it wins. Fifteen decisions cover the largest
// accepted field.
fn decision_script_strategy() -> impl Strategy<Value = Vec<(prop::sample::Index, bool)>> {
    prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 15)
}

// Helper function to build a field of distinct named competitors
fn field(size: usize) -> Vec<Competitor> {
    (0..size)
        .map(|n| Competitor::new(&format!("Competitor{n}")).unwrap())
        .collect()
}

// Helper function to apply one scripted decision. Returns false once no
// open match remains.
fn apply_decision(engine: &mut BracketEngine, pick: &(prop::sample::Index, bool)) -> bool {
    let open: Vec<(MatchId, Competitor, Competitor)> = engine
        .ready_matches()
        .map(|m| {
            (
                m.id,
                m.slot_a.competitor().unwrap().clone(),
                m.slot_b.competitor().unwrap().clone(),
            )
        })
        .collect();
    if open.is_empty() {
        return false;
    }
    let (index, prefer_b) = pick;
    let (id, slot_a, slot_b) = index.get(&open).clone();
    let winner = if *prefer_b { slot_b } else { slot_a };
    engine.record_result(id, &winner).unwrap();
    true
}

// Helper function to collect every match id a view exposes, in order
fn all_ids(view: &BracketView) -> Vec<MatchId> {
    view.rounds
        .iter()
        .flat_map(|round| round.matches.iter().map(|m| m.id))
        .collect()
}

// Helper function to collect the decided results as a map
fn decided(engine: &BracketEngine) -> BTreeMap<MatchId, Competitor> {
    engine
        .rounds()
        .iter()
        .flat_map(|round| round.matches.iter())
        .filter_map(|m| m.winner.clone().map(|winner| (m.id, winner)))
        .collect()
}

proptest! {
    #[test]
    fn test_round_one_covers_the_field_at_every_size(size in field_size_strategy()) {
        let entrants = field(size);
        let mut engine = BracketEngine::new();
        engine.initialize(entrants.clone()).unwrap();

        // Half as many matches as entrants, and the slots hold exactly
        // the initialized field, whatever order the draw produced.
        prop_assert_eq!(engine.rounds()[0].matches.len(), size / 2);
        let mut seeded: Vec<Competitor> = engine.rounds()[0]
            .matches
            .iter()
            .flat_map(|m| [&m.slot_a, &m.slot_b])
            .filter_map(|slot| slot.competitor().cloned())
            .collect();
        seeded.sort();
        let mut expected = entrants;
        expected.sort();
        prop_assert_eq!(seeded, expected);
    }

    #[test]
    fn test_every_decision_order_crowns_a_champion(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();

        for pick in &script {
            if !apply_decision(&mut engine, pick) {
                break;
            }
        }

        // A field of n needs exactly n - 1 decisions, and the script is
        // long enough to supply them in any order.
        prop_assert!(engine.champion().is_some(), "bracket should finish");
        prop_assert_eq!(decided(&engine).len(), size - 1);
        prop_assert_eq!(engine.ready_matches().count(), 0);
    }

    #[test]
    fn test_ids_stay_dense_and_ordered(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();

        for pick in &script {
            // Recorded rounds always carry ids 1..k with rounds in
            // ascending id order, no matter the decision order.
            let ids: Vec<MatchId> = engine
                .rounds()
                .iter()
                .flat_map(|round| round.matches.iter().map(|m| m.id))
                .collect();
            let total = ids.len() as MatchId;
            prop_assert_eq!(ids, (1..=total).collect::<Vec<_>>());

            if !apply_decision(&mut engine, pick) {
                break;
            }
        }
    }

    #[test]
    fn test_view_ids_never_shift(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();

        // The very first projection already fixes every id the bracket
        // will ever use; later materialization must not move them.
        let promised = all_ids(&engine.view());
        prop_assert_eq!(&promised, &(1..=size as MatchId - 1).collect::<Vec<_>>());

        for pick in &script {
            let keep_going = apply_decision(&mut engine, pick);
            prop_assert_eq!(&all_ids(&engine.view()), &promised);
            if !keep_going {
                break;
            }
        }
    }

    #[test]
    fn test_winners_always_come_from_their_match(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();
        for pick in &script {
            if !apply_decision(&mut engine, pick) {
                break;
            }
        }

        for round in engine.rounds() {
            for m in &round.matches {
                if let Some(winner) = &m.winner {
                    prop_assert!(
                        m.has_competitor(winner),
                        "winner of match {} must occupy one of its slots",
                        m.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_rounds_halve_and_never_repeat_a_competitor(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();
        for pick in &script {
            if !apply_decision(&mut engine, pick) {
                break;
            }
        }

        let rounds = engine.rounds();
        for pair in rounds.windows(2) {
            prop_assert_eq!(
                pair[1].matches.len(),
                pair[0].matches.len().div_ceil(2),
                "each round should halve the previous one"
            );
        }
        for round in rounds {
            let mut seen: Vec<&Competitor> = round
                .matches
                .iter()
                .flat_map(|m| [&m.slot_a, &m.slot_b])
                .filter_map(|slot| slot.competitor())
                .collect();
            let total = seen.len();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), total, "round {} repeats a competitor", round.number);
        }
    }

    #[test]
    fn test_recorded_results_only_accrete(
        size in field_size_strategy(),
        script in decision_script_strategy(),
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();

        let mut previous = decided(&engine);
        for pick in &script {
            let keep_going = apply_decision(&mut engine, pick);
            let current = decided(&engine);
            for (id, winner) in &previous {
                prop_assert_eq!(
                    current.get(id),
                    Some(winner),
                    "decided match {} must keep its winner",
                    id
                );
            }
            previous = current;
            if !keep_going {
                break;
            }
        }
    }
}

// Validation property tests

proptest! {
    /// Any field size outside the accepted set is rejected without
    /// seeding anything.
    #[test]
    fn test_unsupported_field_sizes_are_rejected(size in 0usize..=40) {
        prop_assume!(!VALID_FIELD_SIZES.contains(&size));

        let mut engine = BracketEngine::new();
        prop_assert_eq!(
            engine.initialize(field(size)),
            Err(BracketError::InvalidCompetitorCount { count: size })
        );
        prop_assert!(engine.rounds().is_empty());
    }

    /// Stray writes against unknown ids or with outsider names bounce
    /// off without disturbing the bracket.
    #[test]
    fn test_stray_writes_never_corrupt_state(
        size in field_size_strategy(),
        script in decision_script_strategy(),
        stray_id in 1000u64..2000,
    ) {
        let mut engine = BracketEngine::new();
        engine.initialize(field(size)).unwrap();
        let outsider = Competitor::new("Gatecrasher").unwrap();

        for pick in &script {
            let keep_going = apply_decision(&mut engine, pick);

            let before = engine.view();
            prop_assert_eq!(
                engine.record_result(stray_id, &outsider),
                Err(BracketError::MatchNotFound(stray_id))
            );
            let open_id = engine.ready_matches().next().map(|m| m.id);
            if let Some(id) = open_id {
                prop_assert_eq!(
                    engine.record_result(id, &outsider),
                    Err(BracketError::InvalidWinner {
                        match_id: id,
                        winner: outsider.clone(),
                    })
                );
            }
            prop_assert_eq!(engine.view(), before);

            if !keep_going {
                break;
            }
        }
    }
}
