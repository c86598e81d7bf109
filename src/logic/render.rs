//! Text rendering of rounds and the fairness summary.

use crate::models::{FairnessReport, PairStats, RoundResult};
use std::fmt::Write;

/// Line closing each round.
pub const ROUND_SEPARATOR_WIDTH: usize = 50;

/// One round: header, resting line, one line per court, separator.
pub fn render_round(result: &RoundResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {}", result.round);
    let _ = writeln!(out, "Resting Players: {}", result.resting.join(", "));
    let mut courts: Vec<_> = result.assignments.iter().collect();
    courts.sort_by_key(|a| a.court);
    for a in courts {
        let _ = writeln!(
            out,
            "Court {}: {} vs {}",
            a.court,
            a.team_1.display(),
            a.team_2.display()
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(ROUND_SEPARATOR_WIDTH));
    out
}

/// All rounds in order.
pub fn render_rounds(rounds: &[RoundResult]) -> String {
    rounds.iter().map(render_round).collect()
}

fn render_pairs(out: &mut String, label: &str, stats: &PairStats) {
    let _ = writeln!(
        out,
        "{}: {} unique pairs, {} repeated (max {} times)",
        label, stats.total, stats.repeated, stats.max_repeats
    );
    for pair in &stats.repeated_pairs {
        let _ = writeln!(out, "  {} & {}: {} times", pair.players.0, pair.players.1, pair.count);
    }
}

fn render_round_list(out: &mut String, label: &str, rounds: &[u32]) {
    if rounds.is_empty() {
        return;
    }
    let rounds: Vec<String> = rounds.iter().map(|r| r.to_string()).collect();
    let _ = writeln!(out, "{}: {}", label, rounds.join(", "));
}

/// Human-readable fairness summary.
pub fn render_fairness(report: &FairnessReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fairness Statistics");
    render_pairs(&mut out, "Partnerships", &report.partnerships);
    render_pairs(&mut out, "Oppositions", &report.oppositions);
    let _ = writeln!(out, "Court usage ({} players):", report.courts.players);
    for c in &report.courts.all_courts {
        let _ = writeln!(out, "  Court {}: {} games", c.court, c.games);
    }
    let _ = writeln!(
        out,
        "Most used: Court {} ({} games)",
        report.courts.most_used.court, report.courts.most_used.games
    );
    let _ = writeln!(
        out,
        "Least used: Court {} ({} games)",
        report.courts.least_used.court, report.courts.least_used.games
    );
    render_round_list(&mut out, "Fallback rounds", &report.fallback_rounds);
    render_round_list(
        &mut out,
        "Rounds with a repeated partnership",
        &report.repeated_partnership_rounds,
    );
    out
}
