//! History tracker: per-player counters plus the list of recorded games.

use crate::models::game::{Game, Team};
use crate::models::player::{PlayerName, PlayerStats, RoundStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the scorer needs to know about past rounds.
///
/// Counters only ever grow. Partnership and opposition counts are written on
/// both players in the same call so they stay symmetric.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct History {
    stats: BTreeMap<PlayerName, PlayerStats>,
    games: Vec<Game>,
}

impl History {
    /// Empty counters for every player in `players`.
    pub fn new<'a>(players: impl IntoIterator<Item = &'a PlayerName>) -> Self {
        Self {
            stats: players
                .into_iter()
                .map(|p| (p.clone(), PlayerStats::new()))
                .collect(),
            games: Vec::new(),
        }
    }

    /// Stats for `player`, or None if the player is not registered.
    pub fn player(&self, player: &str) -> Option<&PlayerStats> {
        self.stats.get(player)
    }

    pub fn players(&self) -> impl Iterator<Item = (&PlayerName, &PlayerStats)> {
        self.stats.iter()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    fn entry(&mut self, player: &str) -> &mut PlayerStats {
        self.stats.entry(player.to_string()).or_default()
    }

    pub fn games_played(&self, player: &str) -> u32 {
        self.player(player).map_or(0, |s| s.games_played)
    }

    pub fn rest_count(&self, player: &str) -> u32 {
        self.player(player).map_or(0, |s| s.rest_count)
    }

    pub fn partnership_count(&self, a: &str, b: &str) -> u32 {
        self.player(a).map_or(0, |s| s.partnered_with(b))
    }

    pub fn opposition_count(&self, a: &str, b: &str) -> u32 {
        self.player(a).map_or(0, |s| s.opposed(b))
    }

    pub fn court_count(&self, player: &str, court: u32) -> u32 {
        self.player(player).map_or(0, |s| s.games_on_court(court))
    }

    pub fn status_in(&self, player: &str, round: u32) -> RoundStatus {
        self.player(player)
            .map_or(RoundStatus::Unknown, |s| s.status_in(round))
    }

    /// Record one game: games played, court use, both partnerships and all
    /// four oppositions, each on both players involved.
    pub fn record_game(&mut self, team_1: &Team, team_2: &Team, court: u32, round: u32) {
        for team in [team_1, team_2] {
            let [a, b] = team.players();
            *self.entry(a).partnerships.entry(b.clone()).or_insert(0) += 1;
            *self.entry(b).partnerships.entry(a.clone()).or_insert(0) += 1;
        }
        for a in team_1.players() {
            for b in team_2.players() {
                *self.entry(a).oppositions.entry(b.clone()).or_insert(0) += 1;
                *self.entry(b).oppositions.entry(a.clone()).or_insert(0) += 1;
            }
        }
        for p in team_1.players().iter().chain(team_2.players()) {
            self.entry(p).record_played(round, court);
        }
        self.games.push(Game {
            team_1: team_1.clone(),
            team_2: team_2.clone(),
            court,
            round,
        });
    }

    /// Record that `player` sat out `round`.
    pub fn record_rest(&mut self, player: &str, round: u32) {
        self.entry(player).record_rested(round);
    }

    /// Unbroken run of rounds played immediately before `upto_round`.
    pub fn consecutive_games_played(&self, player: &str, upto_round: u32) -> u32 {
        self.streak(player, upto_round, RoundStatus::Played)
    }

    /// Unbroken run of rounds rested immediately before `upto_round`.
    pub fn consecutive_rests(&self, player: &str, upto_round: u32) -> u32 {
        self.streak(player, upto_round, RoundStatus::Rested)
    }

    /// Walks back from `upto_round - 1`; stops at the first round whose status
    /// differs, `Unknown` included.
    fn streak(&self, player: &str, upto_round: u32, wanted: RoundStatus) -> u32 {
        let Some(stats) = self.player(player) else {
            return 0;
        };
        (1..upto_round)
            .rev()
            .take_while(|&r| stats.status_in(r) == wanted)
            .count() as u32
    }

    /// True if `player` sat out the round right before `round`.
    pub fn rested_previous_round(&self, player: &str, round: u32) -> bool {
        round > 1 && self.status_in(player, round - 1) == RoundStatus::Rested
    }
}
