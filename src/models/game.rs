//! Game (one 2v2 on a court), Team, and the per-round result.

use crate::models::player::PlayerName;
use serde::{Deserialize, Serialize};

/// Two partners. Names are stored sorted so equal teams compare equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team(pub [PlayerName; 2]);

impl Team {
    pub fn new(a: impl Into<PlayerName>, b: impl Into<PlayerName>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self([a, b])
        } else {
            Self([b, a])
        }
    }

    pub fn players(&self) -> &[PlayerName; 2] {
        &self.0
    }

    /// "A, B" with names in alphabetical order.
    pub fn display(&self) -> String {
        self.0.join(", ")
    }
}

/// A recorded game: two disjoint teams on a court in a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub team_1: Team,
    pub team_2: Team,
    /// 1-based court number.
    pub court: u32,
    /// 1-based round number.
    pub round: u32,
}

/// One court's matchup inside a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CourtAssignment {
    pub court: u32,
    pub team_1: Team,
    pub team_2: Team,
}

impl CourtAssignment {
    pub fn players(&self) -> impl Iterator<Item = &PlayerName> {
        self.team_1.0.iter().chain(self.team_2.0.iter())
    }
}

/// Outcome of building one round.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    /// Sorted alphabetically.
    pub resting: Vec<PlayerName>,
    /// Ordered by court number, courts 1..=n without gaps.
    pub assignments: Vec<CourtAssignment>,
    /// True when the round search found no complete round and the greedy
    /// fallback built it instead.
    pub fallback: bool,
    /// True when the fallback had to repeat a partnership. Implies `fallback`.
    pub repeated_partnership: bool,
}
