//! Scheduler logic: registry, resting, scoring, round search, rendering and stats.

mod registry;
mod render;
mod round;
mod scoring;
mod search;
mod selection;
mod stats;

pub use registry::{
    config_warnings, find_duplicates, load_players, name_warnings, parse_player_names,
};
pub use render::{render_fairness, render_round, render_rounds};
pub use round::{generate_round, generate_schedule};
pub use scoring::{court_score, matchup_score, team_splits, PartnerRule};
pub use search::{bias_order, greedy_fallback, optimize_round};
pub use selection::{need_to_play, select_players};
pub use stats::calculate_fairness_stats;
