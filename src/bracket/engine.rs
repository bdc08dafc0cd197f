//! Bracket progression engine.
//!
//! The engine owns every recorded round and is the only writer of bracket
//! state:
//!
//! - [`initialize`](BracketEngine::initialize) validates the field, draws
//!   a random seeding, and lays out round 1
//! - [`record_result`](BracketEngine::record_result) stores a winner and,
//!   when that closes the round, draws the next round from its winners
//! - [`view`](BracketEngine::view) projects the full tournament shape
//!   without touching state
//!
//! Rounds are append-only and a decided match never changes again, so
//! every match id handed out stays valid for the life of the bracket.

use std::{collections::HashSet, fmt};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{
    constants::VALID_FIELD_SIZES,
    entities::{Competitor, Match, MatchId, Round, RoundNumber, Slot},
    errors::{BracketError, BracketResult},
    seeding,
};

/// Where a bracket is in its lifecycle. Derived from state, never stored.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BracketPhase {
    /// No field has been seeded yet.
    Unseeded,
    /// Rounds exist and the final hasn't been decided.
    InProgress,
    /// The final is decided; a champion exists.
    Complete,
}

impl fmt::Display for BracketPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unseeded => write!(f, "unseeded"),
            Self::InProgress => write!(f, "in progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// What a successful [`record_result`](BracketEngine::record_result)
/// did to the bracket.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RecordOutcome {
    /// The winner was stored; the round still has open matches.
    WinnerRecorded { match_id: MatchId, winner: Competitor },
    /// The winner was stored and closed its round; the next round was
    /// drawn from the round's winners.
    RoundCompleted {
        match_id: MatchId,
        winner: Competitor,
        next_round: RoundNumber,
    },
    /// The winner was stored in the final; the bracket is complete.
    ChampionCrowned {
        match_id: MatchId,
        champion: Competitor,
    },
}

impl RecordOutcome {
    /// The match the recorded result landed on.
    #[must_use]
    pub fn match_id(&self) -> MatchId {
        match self {
            Self::WinnerRecorded { match_id, .. }
            | Self::RoundCompleted { match_id, .. }
            | Self::ChampionCrowned { match_id, .. } => *match_id,
        }
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WinnerRecorded { match_id, winner } => {
                write!(f, "{winner} takes match {match_id}")
            }
            Self::RoundCompleted {
                match_id,
                winner,
                next_round,
            } => write!(
                f,
                "{winner} takes match {match_id} and closes the round, round {next_round} is drawn"
            ),
            Self::ChampionCrowned { champion, .. } => {
                write!(f, "{champion} wins the bracket")
            }
        }
    }
}

/// Single-elimination bracket state and progression.
///
/// All mutation goes through [`initialize`](Self::initialize) and
/// [`record_result`](Self::record_result); everything else is a read.
/// Both writers validate before touching state, so any returned error
/// leaves the bracket exactly as it was.
#[derive(Debug)]
pub struct BracketEngine {
    pub(super) rounds: Vec<Round>,
    pub(super) next_match_id: MatchId,
}

impl Default for BracketEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BracketEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: Vec::new(),
            next_match_id: 1,
        }
    }

    /// Seed a fresh bracket from `competitors` and lay out round 1.
    ///
    /// The field is shuffled so every seeding order is equally likely,
    /// then adjacent entrants are paired into matches. Any bracket that
    /// existed before the call is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the field size isn't one of
    /// [`VALID_FIELD_SIZES`] or if a name is entered more than once. The
    /// previous bracket survives a failed call untouched.
    pub fn initialize(&mut self, competitors: Vec<Competitor>) -> BracketResult<&Round> {
        let count = competitors.len();
        if !VALID_FIELD_SIZES.contains(&count) {
            return Err(BracketError::InvalidCompetitorCount { count });
        }
        if let Some(name) = first_duplicate(&competitors) {
            return Err(BracketError::DuplicateCompetitor { name: name.clone() });
        }

        self.rounds.clear();
        self.next_match_id = 1;

        let seeded = seeding::draw(competitors);
        let matches = self.build_matches(seeding::pair_up(seeded));
        info!("seeded {count} competitors into {} matches", matches.len());
        self.rounds.push(Round { number: 1, matches });
        Ok(&self.rounds[0])
    }

    /// Record `winner` for the match with id `match_id`.
    ///
    /// When the result closes its round, the next round is drawn
    /// immediately from the round's winners in match order. When the
    /// closed round was the final, the bracket is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if no match has id `match_id`, if `winner`
    /// doesn't occupy one of the match's slots, or if the match already
    /// has a winner. A decided match is never re-decided.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        winner: &Competitor,
    ) -> BracketResult<RecordOutcome> {
        let (round_idx, entry) = self
            .rounds
            .iter_mut()
            .enumerate()
            .find_map(|(idx, round)| round.find_match_mut(match_id).map(|m| (idx, m)))
            .ok_or(BracketError::MatchNotFound(match_id))?;
        if !entry.has_competitor(winner) {
            return Err(BracketError::InvalidWinner {
                match_id,
                winner: winner.clone(),
            });
        }
        if let Some(decided) = &entry.winner {
            return Err(BracketError::MatchAlreadyDecided {
                match_id,
                winner: decided.clone(),
            });
        }
        entry.winner = Some(winner.clone());
        debug!("match {match_id} went to {winner}");

        let round = &self.rounds[round_idx];
        if !round.is_complete() {
            return Ok(RecordOutcome::WinnerRecorded {
                match_id,
                winner: winner.clone(),
            });
        }
        if round.matches.len() == 1 {
            info!("bracket complete, {winner} is the champion");
            return Ok(RecordOutcome::ChampionCrowned {
                match_id,
                champion: winner.clone(),
            });
        }

        let number = round.number + 1;
        let winners: Vec<Competitor> = round.winners().cloned().collect();
        let matches = self.build_matches(seeding::pair_up(winners));
        info!(
            "round {} complete, round {number} drawn with {} matches",
            number - 1,
            matches.len()
        );
        self.rounds.push(Round { number, matches });
        Ok(RecordOutcome::RoundCompleted {
            match_id,
            winner: winner.clone(),
            next_round: number,
        })
    }

    /// The champion, once the final is decided.
    ///
    /// Derived on demand: the bracket is complete exactly when its last
    /// round is a decided one-match round.
    #[must_use]
    pub fn champion(&self) -> Option<&Competitor> {
        match self.rounds.last()?.matches.as_slice() {
            [final_match] => final_match.winner.as_ref(),
            _ => None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> BracketPhase {
        if self.rounds.is_empty() {
            BracketPhase::Unseeded
        } else if self.champion().is_some() {
            BracketPhase::Complete
        } else {
            BracketPhase::InProgress
        }
    }

    /// Discard the bracket and return to [`BracketPhase::Unseeded`].
    pub fn reset(&mut self) {
        debug!("bracket reset");
        self.rounds.clear();
        self.next_match_id = 1;
    }

    /// Rounds recorded so far, in play order.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Matches a result can currently be recorded for.
    pub fn ready_matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds
            .iter()
            .flat_map(|round| round.matches.iter())
            .filter(|m| m.is_ready())
    }

    /// Size of the seeded field, derived from the round 1 layout.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.rounds.first().map_or(0, |round| round.matches.len() * 2)
    }

    /// How many rounds the bracket needs to crown a champion, once
    /// seeded.
    #[must_use]
    pub fn total_rounds(&self) -> Option<RoundNumber> {
        let teams = self.competitor_count();
        (teams > 0).then(|| teams.next_power_of_two().ilog2())
    }

    fn build_matches(&mut self, pairs: Vec<(Slot, Slot)>) -> Vec<Match> {
        pairs
            .into_iter()
            .map(|(slot_a, slot_b)| {
                let id = self.next_match_id;
                self.next_match_id += 1;
                Match::new(id, slot_a, slot_b)
            })
            .collect()
    }

}

fn first_duplicate(competitors: &[Competitor]) -> Option<&Competitor> {
    let mut seen = HashSet::with_capacity(competitors.len());
    competitors.iter().find(|competitor| !seen.insert(*competitor))
}
