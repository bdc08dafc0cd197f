//! Shared, thread-safe bracket access.
//!
//! [`BracketHandle`] wraps a [`BracketEngine`] in `Arc<RwLock>` so one
//! bracket can serve many threads. Writes hold the lock exclusively for
//! the whole operation, so validation and mutation happen as a single
//! step and interleaved writers can never split a round update. Reads
//! share the lock and come back as owned snapshots.

use std::sync::{Arc, RwLock};

use crate::bracket::{
    BracketEngine, BracketPhase, BracketResult, BracketView, Competitor, Match, MatchId,
    RecordOutcome, Round,
};

/// Cloneable handle to a bracket shared across threads.
///
/// Clones all point at the same bracket. Every return value is an owned
/// copy, so no lock is held once a call returns.
#[derive(Clone, Debug, Default)]
pub struct BracketHandle {
    engine: Arc<RwLock<BracketEngine>>,
}

impl BracketHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh bracket and return its first round.
    ///
    /// # Errors
    ///
    /// See [`BracketEngine::initialize`].
    pub fn initialize(&self, competitors: Vec<Competitor>) -> BracketResult<Round> {
        let mut engine = self.engine.write().expect("RwLock poisoned");
        engine.initialize(competitors).cloned()
    }

    /// Record a match winner.
    ///
    /// # Errors
    ///
    /// See [`BracketEngine::record_result`].
    pub fn record_result(
        &self,
        match_id: MatchId,
        winner: &Competitor,
    ) -> BracketResult<RecordOutcome> {
        let mut engine = self.engine.write().expect("RwLock poisoned");
        engine.record_result(match_id, winner)
    }

    /// Snapshot the full tournament shape.
    ///
    /// The snapshot is internally consistent: it reflects one point in
    /// the write history, never a partially applied operation.
    #[must_use]
    pub fn view(&self) -> BracketView {
        let engine = self.engine.read().expect("RwLock poisoned");
        engine.view()
    }

    /// Matches a result could be recorded for at snapshot time.
    ///
    /// Another writer may decide one of these before the caller does;
    /// the slower write comes back as
    /// [`MatchAlreadyDecided`](crate::BracketError::MatchAlreadyDecided).
    #[must_use]
    pub fn ready_matches(&self) -> Vec<Match> {
        let engine = self.engine.read().expect("RwLock poisoned");
        engine.ready_matches().cloned().collect()
    }

    /// The champion, once the final is decided.
    #[must_use]
    pub fn champion(&self) -> Option<Competitor> {
        let engine = self.engine.read().expect("RwLock poisoned");
        engine.champion().cloned()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> BracketPhase {
        let engine = self.engine.read().expect("RwLock poisoned");
        engine.phase()
    }

    /// Discard the bracket and return to [`BracketPhase::Unseeded`].
    pub fn reset(&self) {
        let mut engine = self.engine.write().expect("RwLock poisoned");
        engine.reset();
    }
}
