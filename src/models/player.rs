//! PlayerStats and the per-round play/rest status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of a player, exactly as entered (identity within one run).
pub type PlayerName = String;

/// What a player did in a given round.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// No round recorded yet (before round 1).
    #[default]
    Unknown,
    Played,
    Rested,
}

/// History counters for one player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub rest_count: u32,
    /// Other player -> times partnered.
    pub partnerships: BTreeMap<PlayerName, u32>,
    /// Other player -> times opposed.
    pub oppositions: BTreeMap<PlayerName, u32>,
    /// Court number -> times assigned there.
    pub court_assignments: BTreeMap<u32, u32>,
    /// Status in the most recently recorded round.
    pub last_round: RoundStatus,
    /// Round number -> status. Rounds missing from the map are `Unknown`.
    pub rounds: BTreeMap<u32, RoundStatus>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times partnered with `other` (0 if never).
    pub fn partnered_with(&self, other: &str) -> u32 {
        self.partnerships.get(other).copied().unwrap_or(0)
    }

    /// Times opposed `other` (0 if never).
    pub fn opposed(&self, other: &str) -> u32 {
        self.oppositions.get(other).copied().unwrap_or(0)
    }

    /// Times assigned to `court` (0 if never).
    pub fn games_on_court(&self, court: u32) -> u32 {
        self.court_assignments.get(&court).copied().unwrap_or(0)
    }

    /// Distinct players faced at least once.
    pub fn unique_opponents(&self) -> usize {
        self.oppositions.len()
    }

    pub fn status_in(&self, round: u32) -> RoundStatus {
        self.rounds.get(&round).copied().unwrap_or_default()
    }

    /// Record that this player played in `round` on `court`.
    pub fn record_played(&mut self, round: u32, court: u32) {
        self.games_played += 1;
        *self.court_assignments.entry(court).or_insert(0) += 1;
        self.last_round = RoundStatus::Played;
        self.rounds.insert(round, RoundStatus::Played);
    }

    /// Record that this player sat out `round`.
    pub fn record_rested(&mut self, round: u32) {
        self.rest_count += 1;
        self.last_round = RoundStatus::Rested;
        self.rounds.insert(round, RoundStatus::Rested);
    }
}
