//! Player registry: parse the raw name list and validate it.

use crate::models::{History, PlayerName, Scheduler, SchedulerError, MIN_PLAYERS};
use std::collections::HashMap;

/// Split on line breaks, trim, drop blank lines.
pub fn parse_player_names(text: &str) -> Vec<PlayerName> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Groups of names that are equal ignoring case, with each original spelling
/// kept in input order. Groups are ordered by first appearance.
pub fn find_duplicates(text: &str) -> Vec<Vec<String>> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    for name in parse_player_names(text) {
        let key = name.to_lowercase();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        group.push(name);
    }
    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|group| group.len() > 1)
        .collect()
}

/// Load the player list into the scheduler, replacing any earlier list.
///
/// On error the scheduler is left as it was.
pub fn load_players(scheduler: &mut Scheduler, text: &str) -> Result<(), SchedulerError> {
    if !scheduler.rounds.is_empty() {
        return Err(SchedulerError::ScheduleAlreadyGenerated);
    }
    let duplicates = find_duplicates(text);
    if !duplicates.is_empty() {
        return Err(SchedulerError::DuplicateNames(duplicates));
    }
    let players = parse_player_names(text);
    if players.len() < MIN_PLAYERS {
        return Err(SchedulerError::InsufficientPlayers {
            count: players.len(),
        });
    }
    if let Some(max) = scheduler.config.max_players {
        if players.len() > max {
            return Err(SchedulerError::TooManyPlayers {
                count: players.len(),
                max,
            });
        }
    }
    log::debug!("Loaded {} players", players.len());
    scheduler.history = History::new(&players);
    scheduler.players = players;
    Ok(())
}

/// Advisory notes about the names themselves: too long, or characters other
/// than ASCII letters, spaces, dots and hyphens. Never blocks loading.
pub fn name_warnings(names: &[PlayerName], max_len: usize) -> Vec<String> {
    let mut warnings = Vec::new();
    let long: Vec<&str> = names
        .iter()
        .filter(|n| n.chars().count() > max_len)
        .map(String::as_str)
        .collect();
    if !long.is_empty() {
        warnings.push(format!(
            "Player names too long (max {} characters): {}",
            max_len,
            long.join(", ")
        ));
    }
    let invalid: Vec<&str> = names
        .iter()
        .filter(|n| {
            !n.chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '.' || c == '-')
        })
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        warnings.push(format!(
            "Unusual characters in names (letters, spaces, dots and hyphens expected): {}",
            invalid.join(", ")
        ));
    }
    warnings
}

/// Advisory notes about a player/court/round combination. Never blocks generation.
pub fn config_warnings(player_count: usize, max_courts: u32, max_rounds: u32) -> Vec<String> {
    let mut warnings = Vec::new();
    let courts = max_courts as usize;
    if player_count > courts * 4 * 2 {
        warnings.push("Many players will rest each round".to_string());
    }
    if max_rounds as usize > player_count {
        warnings.push("More rounds than players - some may play very frequently".to_string());
    }
    if courts > player_count / 4 {
        warnings.push("Not enough players to fill all courts".to_string());
    }
    warnings
}
