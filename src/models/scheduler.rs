//! Scheduler (engine handle) and SchedulerError.

use crate::models::config::{SchedulerConfig, MAX_COURTS, MAX_ROUNDS, PLAYERS_PER_COURT};
use crate::models::game::RoundResult;
use crate::models::history::History;
use crate::models::player::PlayerName;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Errors from loading players or generating a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchedulerError {
    /// Names equal ignoring case. One group per lowercased name, original spellings in input order.
    DuplicateNames(Vec<Vec<String>>),
    /// Fewer than 4 unique names.
    InsufficientPlayers { count: usize },
    /// More names than the configured upper bound.
    TooManyPlayers { count: usize, max: usize },
    /// Court or round limits out of range.
    InvalidConfig(String),
    /// Round number outside `1..=max_rounds`, or not the next round to build.
    InvalidRoundRange { round: u32, max_rounds: u32 },
    /// Generation attempted before a successful load.
    NoPlayersLoaded,
    /// This engine already produced a schedule; create a new one to regenerate.
    ScheduleAlreadyGenerated,
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::DuplicateNames(groups) => {
                write!(
                    f,
                    "Duplicate names detected!\nPlease add surnames to make these names unique:"
                )?;
                for group in groups {
                    write!(f, "\n{}", group.join(", "))?;
                }
                Ok(())
            }
            SchedulerError::InsufficientPlayers { count } => {
                write!(f, "Need at least 4 players to create games (got {})", count)
            }
            SchedulerError::TooManyPlayers { count, max } => {
                write!(f, "Maximum {} players supported (got {})", max, count)
            }
            SchedulerError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SchedulerError::InvalidRoundRange { round, max_rounds } => {
                write!(f, "Round {} is outside 1..={} or out of order", round, max_rounds)
            }
            SchedulerError::NoPlayersLoaded => write!(f, "No players loaded"),
            SchedulerError::ScheduleAlreadyGenerated => {
                write!(f, "Schedule already generated; start a new scheduler")
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// One schedule generation: registry, history, rounds and the random source.
///
/// Owns all mutable state; nothing is shared with callers except through `&` accessors.
#[derive(Clone, Debug)]
pub struct Scheduler {
    pub(crate) config: SchedulerConfig,
    /// Registered players in input order.
    pub(crate) players: Vec<PlayerName>,
    pub(crate) history: History,
    pub(crate) rounds: Vec<RoundResult>,
    pub(crate) games_only: String,
    pub(crate) rng: StdRng,
}

impl Scheduler {
    /// Create an engine with no players. Fails if courts or rounds are out of range.
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        if !(1..=MAX_COURTS).contains(&config.max_courts) {
            return Err(SchedulerError::InvalidConfig(format!(
                "courts must be between 1 and {} (got {})",
                MAX_COURTS, config.max_courts
            )));
        }
        if !(1..=MAX_ROUNDS).contains(&config.max_rounds) {
            return Err(SchedulerError::InvalidConfig(format!(
                "rounds must be between 1 and {} (got {})",
                MAX_ROUNDS, config.max_rounds
            )));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            players: Vec::new(),
            history: History::default(),
            rounds: Vec::new(),
            games_only: String::new(),
            rng,
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Rounds built so far, in order.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Round transcript without the fairness summary (empty before generation).
    pub fn games_only_text(&self) -> &str {
        &self.games_only
    }

    /// Courts used per round for the loaded player count.
    pub fn courts_per_round(&self) -> u32 {
        let by_players = (self.players.len() / PLAYERS_PER_COURT) as u32;
        by_players.min(self.config.max_courts)
    }
}
