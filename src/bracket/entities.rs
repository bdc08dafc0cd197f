//! Core bracket types.
//!
//! - [`Competitor`]: validated entrant name
//! - [`Slot`]: one side of a match (empty, bye, or a competitor)
//! - [`Match`]: a pairing with an optional recorded winner
//! - [`Round`]: one stage of the bracket

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{
    constants::BYE_MARKER,
    errors::{BracketError, BracketResult},
};

/// Type alias for match identifiers. Ids come from a counter that starts
/// at 1 and only moves forward for the life of a bracket.
pub type MatchId = u64;

/// Type alias for 1-based round numbers.
pub type RoundNumber = u32;

/// A validated competitor name.
///
/// Names are trimmed on construction and can never be blank or collide
/// with the bye marker, so every surviving value is displayable as-is.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Competitor(String);

impl Competitor {
    /// Create a competitor, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or is the reserved
    /// bye marker.
    pub fn new(name: &str) -> BracketResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BracketError::BlankCompetitor);
        }
        if name == BYE_MARKER {
            return Err(BracketError::ReservedName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Competitor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Competitor {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Competitor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::new(&name).map_err(de::Error::custom)
    }
}

/// One side of a match.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Slot {
    /// Not yet determined; the feeding match hasn't been decided.
    Empty,
    /// Walkover. The opposing competitor advances without playing.
    Bye,
    /// Occupied by a competitor.
    Filled(Competitor),
}

impl Slot {
    #[must_use]
    pub fn competitor(&self) -> Option<&Competitor> {
        match self {
            Self::Filled(competitor) => Some(competitor),
            Self::Empty | Self::Bye => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "TBD"),
            Self::Bye => write!(f, "{BYE_MARKER}"),
            Self::Filled(competitor) => write!(f, "{competitor}"),
        }
    }
}

// Slots cross the wire as a nullable string: null for empty, the bye
// marker for walkovers, otherwise the competitor name.
impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Bye => serializer.serialize_some(BYE_MARKER),
            Self::Filled(competitor) => serializer.serialize_some(competitor),
        }
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::Empty),
            Some(name) if name == BYE_MARKER => Ok(Self::Bye),
            Some(name) => Competitor::new(&name)
                .map(Self::Filled)
                .map_err(de::Error::custom),
        }
    }
}

/// A single pairing within a round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub slot_a: Slot,
    pub slot_b: Slot,
    pub winner: Option<Competitor>,
}

impl Match {
    #[must_use]
    pub fn new(id: MatchId, slot_a: Slot, slot_b: Slot) -> Self {
        Self {
            id,
            slot_a,
            slot_b,
            winner: None,
        }
    }

    /// Whether a winner has been recorded.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the match is waiting on a result: both slots hold real
    /// competitors and no winner has been recorded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.winner.is_none()
            && self.slot_a.competitor().is_some()
            && self.slot_b.competitor().is_some()
    }

    /// Whether `competitor` occupies one of the match's slots.
    #[must_use]
    pub fn has_competitor(&self, competitor: &Competitor) -> bool {
        self.slot_a.competitor() == Some(competitor) || self.slot_b.competitor() == Some(competitor)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.slot_a, self.slot_b)
    }
}

/// One stage of the bracket, numbered from 1.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub number: RoundNumber,
    pub matches: Vec<Match>,
}

impl Round {
    /// Whether every match in the round has a recorded winner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }

    /// Winners recorded so far, in match order.
    pub fn winners(&self) -> impl Iterator<Item = &Competitor> {
        self.matches.iter().filter_map(|m| m.winner.as_ref())
    }

    #[must_use]
    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub(super) fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }
}
