//! Doubles round-robin scheduler: library with models and scheduling logic.
//!
//! Load a newline-separated player list, then generate a fixed number of
//! rounds in which partners, opponents, rests and courts are spread as evenly
//! as the randomized search can manage.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_fairness_stats, config_warnings, find_duplicates, generate_round, generate_schedule,
    load_players, name_warnings, parse_player_names, render_fairness,
};
pub use models::{
    CourtAssignment, CourtStats, CourtUsage, FairnessReport, Game, History, PairStats, PlayerName,
    PlayerStats, RepeatedPair, RoundResult, RoundStatus, Scheduler, SchedulerConfig,
    SchedulerError, SearchLimits, Team, Weights, MAX_COURTS, MAX_NAME_LENGTH, MAX_ROUNDS,
};
