//! Single-elimination bracket engine.
//!
//! - [`entities`]: competitors, slots, matches, and rounds
//! - [`engine`]: bracket state, seeding, and result recording
//! - [`view`]: materialized projections of the full tournament shape
//! - [`errors`]: validation failures
//! - [`constants`]: accepted field sizes and the reserved bye marker

pub mod constants;
pub mod engine;
pub mod entities;
pub mod errors;
mod seeding;
pub mod view;

pub use engine::{BracketEngine, BracketPhase, RecordOutcome};
pub use entities::{Competitor, Match, MatchId, Round, RoundNumber, Slot};
pub use errors::{BracketError, BracketResult};
pub use view::BracketView;
