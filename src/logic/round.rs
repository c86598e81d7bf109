//! Building rounds and the full schedule.

use crate::logic::registry::{config_warnings, name_warnings};
use crate::logic::render::{render_fairness, render_rounds};
use crate::logic::search::{greedy_fallback, optimize_round};
use crate::logic::selection::select_players;
use crate::logic::stats::calculate_fairness_stats;
use crate::models::{
    RoundResult, Scheduler, SchedulerError, MAX_NAME_LENGTH, PLAYERS_PER_COURT,
};

/// Build round `round` (must be the next unbuilt round, within `1..=max_rounds`)
/// and record it in the history.
///
/// 1. Courts = min(players / 4, max_courts); everyone beyond courts * 4 rests.
/// 2. Resting players are those with the least need to play.
/// 3. Active players are placed by the randomized round search, or by the
///    greedy fallback when no repeat-free round was found.
///
/// The games-only transcript is extended as each round is added.
pub fn generate_round(
    scheduler: &mut Scheduler,
    round: u32,
) -> Result<&RoundResult, SchedulerError> {
    if scheduler.players.is_empty() {
        return Err(SchedulerError::NoPlayersLoaded);
    }
    let max_rounds = scheduler.config.max_rounds;
    let next = scheduler.rounds.len() as u32 + 1;
    if !(1..=max_rounds).contains(&round) || round != next {
        return Err(SchedulerError::InvalidRoundRange { round, max_rounds });
    }

    let num_courts = scheduler.courts_per_round();
    let needed = num_courts as usize * PLAYERS_PER_COURT;

    let (active, mut resting) = if scheduler.players.len() > needed {
        select_players(
            &scheduler.history,
            &scheduler.config.weights,
            &scheduler.players,
            needed,
            round,
            &mut scheduler.rng,
        )
    } else {
        (scheduler.players.clone(), Vec::new())
    };
    for p in &resting {
        scheduler.history.record_rest(p, round);
    }
    resting.sort();

    let weights = &scheduler.config.weights;
    let limits = &scheduler.config.search;
    let (assignments, fallback, repeated_partnership) = match optimize_round(
        &scheduler.history,
        weights,
        limits,
        &active,
        num_courts,
        round,
        &mut scheduler.rng,
    ) {
        Some(assignments) => (assignments, false, false),
        None => {
            let (assignments, repeated) = greedy_fallback(
                &scheduler.history,
                weights,
                limits,
                &active,
                num_courts,
                round,
                &mut scheduler.rng,
            );
            if repeated {
                log::warn!(
                    "Round {}: no assignment without a repeated partnership; accepting a repeat",
                    round
                );
            } else {
                log::warn!("Round {}: search found no valid round, used greedy fallback", round);
            }
            (assignments, true, repeated)
        }
    };

    for a in &assignments {
        scheduler
            .history
            .record_game(&a.team_1, &a.team_2, a.court, round);
    }
    log::debug!(
        "Round {}: {} courts, {} resting",
        round,
        assignments.len(),
        resting.len()
    );

    scheduler.rounds.push(RoundResult {
        round,
        resting,
        assignments,
        fallback,
        repeated_partnership,
    });
    scheduler.games_only = render_rounds(&scheduler.rounds).trim().to_string();
    Ok(&scheduler.rounds[scheduler.rounds.len() - 1])
}

/// Build every round and return the schedule text.
///
/// With `print_stats` set the fairness summary follows the rounds; the
/// games-only transcript never includes it.
pub fn generate_schedule(scheduler: &mut Scheduler) -> Result<String, SchedulerError> {
    if scheduler.players.is_empty() {
        return Err(SchedulerError::NoPlayersLoaded);
    }
    if !scheduler.rounds.is_empty() {
        return Err(SchedulerError::ScheduleAlreadyGenerated);
    }
    let warnings = config_warnings(
        scheduler.players.len(),
        scheduler.config.max_courts,
        scheduler.config.max_rounds,
    )
    .into_iter()
    .chain(name_warnings(&scheduler.players, MAX_NAME_LENGTH));
    for warning in warnings {
        log::warn!("{}", warning);
    }

    for round in 1..=scheduler.config.max_rounds {
        generate_round(scheduler, round)?;
    }
    let mut output = render_rounds(&scheduler.rounds);

    if scheduler.config.print_stats {
        let report = calculate_fairness_stats(scheduler);
        output.push('\n');
        output.push_str(&render_fairness(&report));
    }

    let fallback_rounds = scheduler.rounds.iter().filter(|r| r.fallback).count();
    let repeat_rounds = scheduler
        .rounds
        .iter()
        .filter(|r| r.repeated_partnership)
        .count();
    log::info!(
        "Generated {} rounds for {} players ({} fallback, {} with a repeated partnership)",
        scheduler.rounds.len(),
        scheduler.players.len(),
        fallback_rounds,
        repeat_rounds
    );
    Ok(output)
}
