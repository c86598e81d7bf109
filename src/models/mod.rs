//! Data structures for the scheduler: players, games, history, config and reports.

mod config;
mod game;
mod history;
mod player;
mod scheduler;
mod stats;

pub use config::{
    SchedulerConfig, SearchLimits, Weights, MAX_COURTS, MAX_NAME_LENGTH, MAX_ROUNDS, MIN_PLAYERS,
    PLAYERS_PER_COURT,
};
pub use game::{CourtAssignment, Game, RoundResult, Team};
pub use history::History;
pub use player::{PlayerName, PlayerStats, RoundStatus};
pub use scheduler::{Scheduler, SchedulerError};
pub use stats::{CourtStats, CourtUsage, FairnessReport, PairStats, RepeatedPair};
