//! Materialized bracket projection.
//!
//! A [`BracketView`] is the full tournament shape at a moment in time:
//! recorded rounds exactly as played, future rounds synthesized down to
//! the final, and decided winners shown in the slots they feed. It is a
//! plain value, safe to serialize, diff, or hand across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    engine::BracketEngine,
    entities::{Competitor, Match, MatchId, Round, RoundNumber, Slot},
};

/// Snapshot of the whole bracket, through the final.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BracketView {
    pub rounds: Vec<Round>,
}

impl BracketView {
    /// The champion, once the final is decided.
    #[must_use]
    pub fn champion(&self) -> Option<&Competitor> {
        match self.rounds.last()?.matches.as_slice() {
            [final_match] => final_match.winner.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}

impl fmt::Display for BracketView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for round in &self.rounds {
            writeln!(f, "round {}", round.number)?;
            for m in &round.matches {
                match &m.winner {
                    Some(winner) => writeln!(f, "  [{}] {m} => {winner}", m.id)?,
                    None => writeln!(f, "  [{}] {m}", m.id)?,
                }
            }
        }
        Ok(())
    }
}

impl BracketEngine {
    /// Project the full tournament shape.
    ///
    /// Recorded rounds appear as they are. Rounds not yet reached are
    /// synthesized down to the final with empty slots, and every decided
    /// winner is shown in the slot it feeds: winners of matches `2k` and
    /// `2k + 1` land in slot A and slot B of next round's match `k`. A
    /// slot that already holds a value is never overwritten.
    ///
    /// Synthetic matches take their ids from the engine's counter, which
    /// is exactly where real ids resume, so a future round is projected
    /// with the same ids it will have once it is actually drawn.
    ///
    /// The projection is rebuilt from scratch on each call and never
    /// touches engine state.
    #[must_use]
    pub fn view(&self) -> BracketView {
        let mut rounds = self.rounds.clone();
        synthesize_future_rounds(&mut rounds, self.next_match_id);
        propagate_winners(&mut rounds);
        BracketView { rounds }
    }
}

fn synthesize_future_rounds(rounds: &mut Vec<Round>, mut next_id: MatchId) {
    let Some(first) = rounds.first() else {
        return;
    };
    let teams = first.matches.len() * 2;
    let needed = teams.next_power_of_two().ilog2() as usize;
    for index in rounds.len()..needed {
        let matches = (0..rounds[index - 1].matches.len().div_ceil(2))
            .map(|_| {
                let id = next_id;
                next_id += 1;
                Match::new(id, Slot::Empty, Slot::Empty)
            })
            .collect();
        rounds.push(Round {
            number: index as RoundNumber + 1,
            matches,
        });
    }
}

fn propagate_winners(rounds: &mut [Round]) {
    for boundary in 1..rounds.len() {
        let (played, upcoming) = rounds.split_at_mut(boundary);
        let source = &played[boundary - 1];
        let target = &mut upcoming[0];
        for (index, decided) in source.matches.iter().enumerate() {
            let Some(winner) = &decided.winner else {
                continue;
            };
            let Some(next) = target.matches.get_mut(index / 2) else {
                continue;
            };
            let slot = if index % 2 == 0 {
                &mut next.slot_a
            } else {
                &mut next.slot_b
            };
            if slot.is_empty() {
                *slot = Slot::Filled(winner.clone());
            }
        }
    }
}
