//! Engine configuration: court/round limits, search bounds and scoring weights.

use serde::{Deserialize, Serialize};

/// Upper bound on courts per round.
pub const MAX_COURTS: u32 = 6;
/// Upper bound on rounds per schedule.
pub const MAX_ROUNDS: u32 = 10;
/// Fewest players that can fill one court.
pub const MIN_PLAYERS: usize = 4;
pub const PLAYERS_PER_COURT: usize = 4;
/// Longest name accepted without a warning.
pub const MAX_NAME_LENGTH: usize = 20;

/// Scheduler settings. Missing fields in a config file fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub max_courts: u32,
    pub max_rounds: u32,
    /// Largest accepted player list (None = unlimited).
    pub max_players: Option<usize>,
    /// Append the fairness summary to the generated schedule text.
    pub print_stats: bool,
    /// Seed for the search; None draws one from the OS.
    pub seed: Option<u64>,
    pub search: SearchLimits,
    pub weights: Weights,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_courts: 4,
            max_rounds: 10,
            max_players: Some(50),
            print_stats: false,
            seed: None,
            search: SearchLimits::default(),
            weights: Weights::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn new(max_courts: u32, max_rounds: u32) -> Self {
        Self {
            max_courts,
            max_rounds,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_print_stats(mut self, print_stats: bool) -> Self {
        self.print_stats = print_stats;
        self
    }

    pub fn with_max_players(mut self, max_players: Option<usize>) -> Self {
        self.max_players = max_players;
        self
    }
}

/// Bounds on the randomized search so every round terminates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Full-round trials per active player.
    pub trials_per_player: usize,
    pub min_trials: usize,
    pub max_trials: usize,
    /// 4-player groups examined per court inside one trial.
    pub groups_per_court: usize,
    /// 4-player groups examined per court by the greedy fallback.
    pub fallback_groups_per_court: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            trials_per_player: 25,
            min_trials: 50,
            max_trials: 500,
            groups_per_court: 64,
            fallback_groups_per_court: 2000,
        }
    }
}

impl SearchLimits {
    /// Trials for a round with `active` players.
    pub fn trials_for(&self, active: usize) -> usize {
        let max = self.max_trials.max(self.min_trials);
        (active * self.trials_per_player).clamp(self.min_trials, max)
    }
}

/// Tunable constants for scoring, resting and sampling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Bonus per team whose two players never partnered before.
    pub new_partnership: f64,
    /// Soft penalty `weight * (count + 1)^2` used only by the fallback.
    pub partnership_repeat: f64,
    pub opposition: f64,
    pub opposition_exponent: f64,
    /// Bonus per cross-team pair meeting for the first time.
    pub new_opposition: f64,
    pub game_balance: f64,
    /// Games-played difference tolerated between teams before penalizing.
    pub game_balance_tolerance: u32,
    pub game_balance_exponent: f64,
    pub court_repeat: f64,
    /// Court count up to which the court penalty grows quadratically.
    pub court_repeat_cap: u32,
    pub new_court: f64,
    pub rested_last_round: f64,
    pub consecutive_games: f64,
    /// Streak length at which the consecutive-games penalty starts.
    pub consecutive_games_threshold: u32,

    /// Resting priority (higher need means more likely to play).
    pub select_games: f64,
    pub select_rests: f64,
    pub select_rest_streak: f64,
    pub select_rested_last: f64,

    /// Sampling order within a trial (ascending weight is drawn first).
    pub shuffle_games: f64,
    pub shuffle_streak: f64,
    pub shuffle_diversity: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            new_partnership: 1000.0,
            partnership_repeat: 2000.0,
            opposition: 800.0,
            opposition_exponent: 1.5,
            new_opposition: 800.0,
            game_balance: 200.0,
            game_balance_tolerance: 1,
            game_balance_exponent: 1.8,
            court_repeat: 150.0,
            court_repeat_cap: 3,
            new_court: 50.0,
            rested_last_round: 500.0,
            consecutive_games: 300.0,
            consecutive_games_threshold: 2,
            select_games: 500.0,
            select_rests: 1000.0,
            select_rest_streak: 800.0,
            select_rested_last: 1200.0,
            shuffle_games: 0.1,
            shuffle_streak: 0.2,
            shuffle_diversity: 0.05,
        }
    }
}
