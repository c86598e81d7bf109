//! Randomized search for a whole round's court assignments.
//!
//! Each trial orders the active players with a biased shuffle, then fills the
//! courts one after another, taking for each court the first 4-player group
//! (in that order) that has a split with no repeated partnership. A trial that
//! can't fill every court is thrown away. The best-scoring complete trial wins.
//! If no trial completes, [`greedy_fallback`] builds the round court by court
//! and, only when nothing else is possible, accepts a repeated partnership.

use crate::logic::scoring::{court_score, matchup_score, team_splits, PartnerRule};
use crate::models::{CourtAssignment, History, PlayerName, SearchLimits, Team, Weights};
use rand::Rng;
use std::cmp::Ordering;

/// Sampling order for a trial: ascending `jitter + games + streak + opponents seen`.
///
/// Players with fewer games, shorter streaks and fewer distinct opponents come
/// first, so they get first pick of fresh partners.
pub fn bias_order<R: Rng>(
    history: &History,
    weights: &Weights,
    players: &[PlayerName],
    round: u32,
    rng: &mut R,
) -> Vec<PlayerName> {
    let mut keyed: Vec<(f64, &PlayerName)> = players
        .iter()
        .map(|p| {
            let unique_opponents = history.player(p).map_or(0, |s| s.unique_opponents());
            let weight = rng.gen::<f64>()
                + history.games_played(p) as f64 * weights.shuffle_games
                + history.consecutive_games_played(p, round) as f64 * weights.shuffle_streak
                + unique_opponents as f64 * weights.shuffle_diversity;
            (weight, p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}

/// Index quadruples `i < j < k < l` below `n`, in lexicographic order.
fn groups_of_four(n: usize) -> impl Iterator<Item = [usize; 4]> {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| {
            (j + 1..n).flat_map(move |k| (k + 1..n).map(move |l| [i, j, k, l]))
        })
    })
}

/// Best split of one group under `rule`, with its score including the court term.
fn best_split(
    history: &History,
    weights: &Weights,
    group: [&PlayerName; 4],
    court: u32,
    round: u32,
    rule: PartnerRule,
) -> Option<(Team, Team, f64)> {
    let court_term = court_score(history, weights, group, court);
    team_splits(group)
        .into_iter()
        .map(|(t1, t2)| {
            let s = matchup_score(history, weights, &t1, &t2, round, rule);
            (t1, t2, s + court_term)
        })
        .filter(|(_, _, s)| s.is_finite())
        .max_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
}

fn take_group(pool: &mut Vec<PlayerName>, idx: [usize; 4]) {
    for &i in idx.iter().rev() {
        pool.remove(i);
    }
}

/// One full-round attempt. None if some court couldn't be filled without a repeat.
fn run_trial(
    history: &History,
    weights: &Weights,
    limits: &SearchLimits,
    mut pool: Vec<PlayerName>,
    num_courts: u32,
    round: u32,
) -> Option<(Vec<CourtAssignment>, f64)> {
    let mut assignments = Vec::with_capacity(num_courts as usize);
    let mut total = 0.0;
    for court in 1..=num_courts {
        let (idx, team_1, team_2, score) = groups_of_four(pool.len())
            .take(limits.groups_per_court.max(1))
            .find_map(|idx| {
                let group = idx.map(|i| &pool[i]);
                best_split(history, weights, group, court, round, PartnerRule::Block)
                    .map(|(t1, t2, s)| (idx, t1, t2, s))
            })?;
        take_group(&mut pool, idx);
        total += score;
        assignments.push(CourtAssignment {
            court,
            team_1,
            team_2,
        });
    }
    Some((assignments, total))
}

/// Best repeat-free assignment found over the trial budget, if any.
pub fn optimize_round<R: Rng>(
    history: &History,
    weights: &Weights,
    limits: &SearchLimits,
    active: &[PlayerName],
    num_courts: u32,
    round: u32,
    rng: &mut R,
) -> Option<Vec<CourtAssignment>> {
    let trials = limits.trials_for(active.len());
    let mut best: Option<(Vec<CourtAssignment>, f64)> = None;
    let mut valid = 0usize;
    for _ in 0..trials {
        let order = bias_order(history, weights, active, round, rng);
        let trial = run_trial(history, weights, limits, order, num_courts, round);
        let Some((assignments, score)) = trial else {
            continue;
        };
        valid += 1;
        if best.as_ref().map_or(true, |(_, b)| score > *b) {
            best = Some((assignments, score));
        }
    }
    log::debug!(
        "Round {}: {} of {} trials valid, best score {:?}",
        round,
        valid,
        trials,
        best.as_ref().map(|(_, s)| *s)
    );
    best.map(|(assignments, _)| assignments)
}

/// Court-by-court greedy assignment used when no trial succeeded.
///
/// Per court, examines groups from a fresh biased order and keeps the best
/// repeat-free split; if every examined group would repeat a partnership it
/// takes the least penalized one. Returns the assignments and whether any
/// partnership was repeated.
pub fn greedy_fallback<R: Rng>(
    history: &History,
    weights: &Weights,
    limits: &SearchLimits,
    active: &[PlayerName],
    num_courts: u32,
    round: u32,
    rng: &mut R,
) -> (Vec<CourtAssignment>, bool) {
    let mut pool = bias_order(history, weights, active, round, rng);
    let mut assignments = Vec::with_capacity(num_courts as usize);
    let mut repeated = false;

    for court in 1..=num_courts {
        if pool.len() < 4 {
            break;
        }
        let mut best: Option<([usize; 4], Team, Team, f64)> = None;
        let mut best_soft: Option<([usize; 4], Team, Team, f64)> = None;
        for idx in groups_of_four(pool.len()).take(limits.fallback_groups_per_court.max(1)) {
            let group = idx.map(|i| &pool[i]);
            let blocked = best_split(history, weights, group, court, round, PartnerRule::Block);
            if let Some((t1, t2, s)) = blocked {
                if best.as_ref().map_or(true, |b| s > b.3) {
                    best = Some((idx, t1, t2, s));
                }
            } else if best.is_none() {
                if let Some((t1, t2, s)) =
                    best_split(history, weights, group, court, round, PartnerRule::Penalize)
                {
                    if best_soft.as_ref().map_or(true, |b| s > b.3) {
                        best_soft = Some((idx, t1, t2, s));
                    }
                }
            }
        }
        let chosen = match (best, best_soft) {
            (Some(b), _) => b,
            (None, Some(soft)) => {
                repeated = true;
                soft
            }
            (None, None) => {
                // Penalize scores are always finite; keep the first group as is.
                let idx = [0, 1, 2, 3];
                let [a, b, c, d] = idx.map(|i| pool[i].clone());
                (idx, Team::new(a, b), Team::new(c, d), 0.0)
            }
        };
        let (idx, team_1, team_2, _) = chosen;
        take_group(&mut pool, idx);
        assignments.push(CourtAssignment {
            court,
            team_1,
            team_2,
        });
    }
    (assignments, repeated)
}
