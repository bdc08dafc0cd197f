//! # Knockout
//!
//! A single-elimination tournament bracket engine.
//!
//! This library seeds a bracket from a validated field of competitors,
//! records match results one winner at a time, and projects the full
//! tournament shape on demand. Progression is deterministic from the
//! recorded results; the only randomness is the initial draw.
//!
//! ## Architecture
//!
//! A bracket moves through three phases:
//!
//! - **Unseeded**: no field yet; the only useful operation is
//!   initialization
//! - **InProgress**: rounds exist and results are being recorded; when a
//!   result closes a round, the next round is drawn immediately from its
//!   winners
//! - **Complete**: the final is decided and a champion exists
//!
//! State only accretes. Rounds are appended, never edited in place, and
//! a decided match is never re-decided, so match ids stay valid for the
//! life of the bracket.
//!
//! ## Core Modules
//!
//! - [`bracket`]: bracket state, progression, entities, and views
//! - [`handle`]: shared thread-safe access to one bracket
//!
//! ## Example
//!
//! ```
//! use knockout::{BracketEngine, Competitor};
//!
//! # fn main() -> Result<(), knockout::BracketError> {
//! let mut engine = BracketEngine::new();
//! let alice = Competitor::new("Alice")?;
//! let bob = Competitor::new("Bob")?;
//! engine.initialize(vec![alice.clone(), bob])?;
//!
//! // A two-competitor bracket is a single final.
//! let final_id = engine.view().rounds[0].matches[0].id;
//! engine.record_result(final_id, &alice)?;
//! assert_eq!(engine.champion(), Some(&alice));
//! # Ok(())
//! # }
//! ```

/// Bracket state, progression, entities, and views.
pub mod bracket;
pub use bracket::{
    BracketEngine, BracketError, BracketPhase, BracketResult, BracketView, Competitor, Match,
    MatchId, RecordOutcome, Round, RoundNumber, Slot,
    constants::{self, BYE_MARKER, MAX_COMPETITORS, MIN_COMPETITORS, VALID_FIELD_SIZES},
};

/// Shared thread-safe access to one bracket.
pub mod handle;
pub use handle::BracketHandle;
