//! Fairness report shapes.

use crate::models::player::PlayerName;
use serde::Serialize;
use std::collections::BTreeMap;

/// An unordered pair that met more than once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RepeatedPair {
    /// Alphabetical order.
    pub players: (PlayerName, PlayerName),
    pub count: u32,
}

/// Summary for partnerships or oppositions.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PairStats {
    /// Distinct pairs that met at least once.
    pub total: usize,
    /// Pairs that met more than once.
    pub repeated: usize,
    pub max_repeats: u32,
    /// Times met -> number of pairs.
    pub distribution: BTreeMap<u32, usize>,
    pub repeated_pairs: Vec<RepeatedPair>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CourtUsage {
    pub court: u32,
    /// Games hosted (player slots / 4, rounded).
    pub games: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CourtStats {
    /// Players with any court history.
    pub players: usize,
    /// Sorted by court number.
    pub all_courts: Vec<CourtUsage>,
    pub most_used: CourtUsage,
    pub least_used: CourtUsage,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FairnessReport {
    pub partnerships: PairStats,
    pub oppositions: PairStats,
    pub courts: CourtStats,
    /// Rounds built by the greedy fallback instead of the round search.
    pub fallback_rounds: Vec<u32>,
    /// Fallback rounds that repeated a partnership.
    pub repeated_partnership_rounds: Vec<u32>,
}
