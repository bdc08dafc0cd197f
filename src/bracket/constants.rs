//! Structural limits for bracket construction.

/// Field sizes accepted by [`initialize`](crate::BracketEngine::initialize).
///
/// Every later round is derived by halving the previous one, so only
/// power-of-two fields reduce cleanly to a single final.
pub const VALID_FIELD_SIZES: [usize; 4] = [2, 4, 8, 16];

/// Smallest accepted field.
pub const MIN_COMPETITORS: usize = 2;

/// Largest accepted field.
pub const MAX_COMPETITORS: usize = 16;

/// Reserved slot marker for a walkover. Never a legal competitor name.
pub const BYE_MARKER: &str = "BYE";
