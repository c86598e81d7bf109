//! Fairness statistics derived from the final history.

use crate::models::{
    CourtStats, CourtUsage, FairnessReport, History, PairStats, PlayerStats, RepeatedPair,
    Scheduler, PLAYERS_PER_COURT,
};
use std::collections::BTreeMap;

/// Pair summary over one relationship map (partners or opponents).
///
/// Each unordered pair is counted once, from the alphabetically first player.
fn pair_stats(
    history: &History,
    counts: impl Fn(&PlayerStats) -> &BTreeMap<String, u32>,
) -> PairStats {
    let mut stats = PairStats::default();
    for (player, player_stats) in history.players() {
        for (other, &count) in counts(player_stats) {
            if other <= player || count == 0 {
                continue;
            }
            stats.total += 1;
            stats.max_repeats = stats.max_repeats.max(count);
            *stats.distribution.entry(count).or_insert(0) += 1;
            if count > 1 {
                stats.repeated += 1;
                stats.repeated_pairs.push(RepeatedPair {
                    players: (player.clone(), other.clone()),
                    count,
                });
            }
        }
    }
    stats
}

fn court_stats(history: &History) -> CourtStats {
    let mut slots: BTreeMap<u32, u32> = BTreeMap::new();
    let mut players = 0;
    for (_, s) in history.players() {
        if s.court_assignments.is_empty() {
            continue;
        }
        players += 1;
        for (&court, &count) in &s.court_assignments {
            *slots.entry(court).or_insert(0) += count;
        }
    }
    let per_court = PLAYERS_PER_COURT as f64;
    let all_courts: Vec<CourtUsage> = slots
        .into_iter()
        .map(|(court, count)| CourtUsage {
            court,
            games: (count as f64 / per_court).round() as u32,
        })
        .collect();

    // Ties go to the lowest court number.
    let most_used = all_courts
        .iter()
        .copied()
        .reduce(|best, c| if c.games > best.games { c } else { best })
        .unwrap_or(CourtUsage { court: 1, games: 0 });
    let least_used = all_courts
        .iter()
        .copied()
        .reduce(|best, c| if c.games < best.games { c } else { best })
        .unwrap_or(CourtUsage { court: 1, games: 0 });

    CourtStats {
        players,
        all_courts,
        most_used,
        least_used,
    }
}

/// Partnership, opposition and court-usage summary of everything recorded so far.
///
/// Read-only: calling it repeatedly returns the same report.
pub fn calculate_fairness_stats(scheduler: &Scheduler) -> FairnessReport {
    let history = scheduler.history();
    FairnessReport {
        partnerships: pair_stats(history, |s| &s.partnerships),
        oppositions: pair_stats(history, |s| &s.oppositions),
        courts: court_stats(history),
        fallback_rounds: scheduler
            .rounds()
            .iter()
            .filter(|r| r.fallback)
            .map(|r| r.round)
            .collect(),
        repeated_partnership_rounds: scheduler
            .rounds()
            .iter()
            .filter(|r| r.repeated_partnership)
            .map(|r| r.round)
            .collect(),
    }
}
