//! Scoring of a candidate 2v2 against the history. Higher is better.

use crate::models::{History, Team, Weights};

/// How repeated partnerships are treated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PartnerRule {
    /// Any repeat scores negative infinity.
    Block,
    /// Repeats cost `partnership_repeat * (count + 1)^2`. Used by the fallback.
    Penalize,
}

/// Score two teams for `round`, excluding the court term.
pub fn matchup_score(
    history: &History,
    weights: &Weights,
    team_1: &Team,
    team_2: &Team,
    round: u32,
    rule: PartnerRule,
) -> f64 {
    let mut score = 0.0;

    for team in [team_1, team_2] {
        let [a, b] = team.players();
        let count = history.partnership_count(a, b);
        if count == 0 {
            score += weights.new_partnership;
        } else {
            match rule {
                PartnerRule::Block => return f64::NEG_INFINITY,
                PartnerRule::Penalize => {
                    score -= weights.partnership_repeat * ((count + 1) as f64).powi(2);
                }
            }
        }
    }

    for a in team_1.players() {
        for b in team_2.players() {
            let count = history.opposition_count(a, b);
            if count == 0 {
                score += weights.new_opposition;
            } else {
                score -= weights.opposition * (count as f64).powf(weights.opposition_exponent);
            }
        }
    }

    score -= game_balance_penalty(history, weights, team_1, team_2);

    for p in team_1.players().iter().chain(team_2.players()) {
        if history.rested_previous_round(p, round) {
            score += weights.rested_last_round;
        }
        let streak = history.consecutive_games_played(p, round);
        if streak >= weights.consecutive_games_threshold.max(1) {
            score -= weights.consecutive_games * streak as f64;
        }
    }

    score
}

fn game_balance_penalty(history: &History, weights: &Weights, team_1: &Team, team_2: &Team) -> f64 {
    let total = |t: &Team| -> i64 {
        t.players()
            .iter()
            .map(|p| history.games_played(p) as i64)
            .sum()
    };
    let diff = (total(team_1) - total(team_2)).unsigned_abs();
    let tolerance = weights.game_balance_tolerance as u64;
    if diff <= tolerance {
        return 0.0;
    }
    weights.game_balance * ((diff - tolerance) as f64).powf(weights.game_balance_exponent)
}

/// Court-balance term for placing these players on `court`.
///
/// Per player: bonus for a first visit, quadratic penalty up to
/// `court_repeat_cap` visits, logarithmic growth after that.
pub fn court_score<'a>(
    history: &History,
    weights: &Weights,
    players: impl IntoIterator<Item = &'a String>,
    court: u32,
) -> f64 {
    let cap = weights.court_repeat_cap.max(1) as f64;
    players
        .into_iter()
        .map(|p| {
            let count = history.court_count(p, court) as f64;
            if count == 0.0 {
                weights.new_court
            } else if count <= cap {
                -weights.court_repeat * count * count
            } else {
                -weights.court_repeat * cap * cap * (1.0 + (count / cap).ln())
            }
        })
        .sum()
}

/// The three ways to split four players into two teams of two.
pub fn team_splits(players: [&String; 4]) -> [(Team, Team); 3] {
    let [a, b, c, d] = players;
    [
        (Team::new(a.as_str(), b.as_str()), Team::new(c.as_str(), d.as_str())),
        (Team::new(a.as_str(), c.as_str()), Team::new(b.as_str(), d.as_str())),
        (Team::new(a.as_str(), d.as_str()), Team::new(b.as_str(), c.as_str())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a, b` vs `c, d` in round 2 with default weights.
    fn score(h: &History, [a, b, c, d]: [&str; 4], rule: PartnerRule) -> f64 {
        let w = Weights::default();
        matchup_score(h, &w, &Team::new(a, b), &Team::new(c, d), 2, rule)
    }

    fn history() -> History {
        let players: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        History::new(&players)
    }

    #[test]
    fn repeat_partnership_is_blocked_or_penalized() {
        let mut h = history();
        h.record_game(&Team::new("A", "B"), &Team::new("C", "D"), 1, 1);

        let blocked = score(&h, ["A", "B", "E", "F"], PartnerRule::Block);
        assert_eq!(blocked, f64::NEG_INFINITY);

        let soft = score(&h, ["A", "B", "E", "F"], PartnerRule::Penalize);
        assert!(soft.is_finite());
        let fresh = score(&h, ["A", "E", "B", "F"], PartnerRule::Penalize);
        assert!(fresh > soft);
    }

    #[test]
    fn repeated_opposition_scores_lower_than_new() {
        let mut h = history();
        h.record_game(&Team::new("A", "B"), &Team::new("C", "D"), 1, 1);
        // A vs C again vs. A vs E for the first time, same partnership novelty.
        let repeat = score(&h, ["A", "E", "C", "F"], PartnerRule::Block);
        let fresh = score(&h, ["A", "C", "E", "F"], PartnerRule::Block);
        assert!(fresh > repeat);
    }

    #[test]
    fn game_balance_has_tolerance() {
        let mut h = history();
        let w = Weights::default();
        h.record_game(&Team::new("A", "B"), &Team::new("C", "D"), 1, 1);
        // Team totals 1 vs 1: balanced.
        assert_eq!(game_balance_penalty(&h, &w, &Team::new("A", "E"), &Team::new("C", "F")), 0.0);
        // 2 vs 0: one past the tolerance.
        let p = game_balance_penalty(&h, &w, &Team::new("A", "B"), &Team::new("E", "F"));
        assert!((p - w.game_balance).abs() < 1e-9);
    }

    #[test]
    fn court_term_grows_then_flattens() {
        let mut h = history();
        let w = Weights::default();
        let a = "A".to_string();
        assert_eq!(court_score(&h, &w, [&a], 1), w.new_court);
        let mut last = f64::INFINITY;
        let mut steps = Vec::new();
        for round in 1..=8 {
            h.record_game(&Team::new("A", "B"), &Team::new("C", "D"), 1, round);
            let s = court_score(&h, &w, [&a], 1);
            assert!(s < last);
            steps.push(last - s);
            last = s;
        }
        // Past the cap each extra visit costs less than the one before.
        assert!(steps[7] < steps[4]);
    }

    #[test]
    fn rested_players_get_a_bonus() {
        let mut h = history();
        h.record_rest("E", 1);
        h.record_rest("F", 1);
        h.record_game(&Team::new("A", "B"), &Team::new("C", "D"), 1, 1);
        let with_rested = score(&h, ["A", "E", "C", "F"], PartnerRule::Block);
        let no_rested = score(&h, ["A", "C", "B", "D"], PartnerRule::Block);
        assert!(with_rested > no_rested);
    }

    #[test]
    fn three_distinct_splits() {
        let names: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let splits = team_splits([&names[0], &names[1], &names[2], &names[3]]);
        assert_eq!(splits[0], (Team::new("A", "B"), Team::new("C", "D")));
        assert_eq!(splits[1], (Team::new("A", "C"), Team::new("B", "D")));
        assert_eq!(splits[2], (Team::new("A", "D"), Team::new("B", "C")));
    }
}
