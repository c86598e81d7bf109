//! Choose who rests and who plays in a round.

use crate::models::{History, PlayerName, Weights};
use rand::Rng;
use std::cmp::Ordering;

/// How strongly a player should play this round (higher plays first).
pub fn need_to_play(history: &History, weights: &Weights, player: &str, round: u32) -> f64 {
    let games = history.games_played(player) as f64;
    let rests = history.rest_count(player) as f64;
    let rest_streak = history.consecutive_rests(player, round) as f64;
    let mut score = rests * weights.select_rests - games * weights.select_games;
    score += rest_streak * weights.select_rest_streak;
    if history.rested_previous_round(player, round) {
        score += weights.select_rested_last;
    }
    score
}

/// Split `players` into (active, resting) with exactly `needed` active.
///
/// Ranked by need to play, then fewest games, then most rests; remaining ties
/// are broken randomly so the same names don't always sit out first.
pub fn select_players<R: Rng>(
    history: &History,
    weights: &Weights,
    players: &[PlayerName],
    needed: usize,
    round: u32,
    rng: &mut R,
) -> (Vec<PlayerName>, Vec<PlayerName>) {
    let mut ranked: Vec<(&PlayerName, f64, u32, u32, u32)> = players
        .iter()
        .map(|p| {
            (
                p,
                need_to_play(history, weights, p, round),
                history.games_played(p),
                history.rest_count(p),
                rng.gen::<u32>(),
            )
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.2.cmp(&b.2))
            .then(b.3.cmp(&a.3))
            .then(a.4.cmp(&b.4))
    });

    let needed = needed.min(ranked.len());
    let resting = ranked[needed..].iter().map(|r| r.0.clone()).collect();
    let active = ranked[..needed].iter().map(|r| r.0.clone()).collect();
    (active, resting)
}
