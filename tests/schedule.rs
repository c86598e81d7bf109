//! Integration tests for round generation, the schedule text and fairness stats.

use badminton_scheduler::{
    calculate_fairness_stats, generate_round, generate_schedule, load_players, RoundResult,
    Scheduler, SchedulerConfig, SchedulerError, SearchLimits, Team,
};
use std::collections::HashSet;

fn names(n: usize) -> String {
    (0..n)
        .map(|i| format!("Player {}", (b'A' + i as u8) as char))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scheduler_with(players: &str, courts: u32, rounds: u32, seed: u64) -> Scheduler {
    let mut s = Scheduler::new(SchedulerConfig::new(courts, rounds).with_seed(seed)).unwrap();
    load_players(&mut s, players).unwrap();
    s
}

/// Every loaded player appears exactly once per round, resting or on a court.
fn assert_round_valid(s: &Scheduler, round: &RoundResult) {
    let expected_courts = (s.players().len() / 4).min(s.config().max_courts as usize);
    assert_eq!(round.assignments.len(), expected_courts, "round {}", round.round);
    let courts: Vec<u32> = round.assignments.iter().map(|a| a.court).collect();
    assert_eq!(courts, (1..=expected_courts as u32).collect::<Vec<_>>());

    let mut seen = HashSet::new();
    for a in &round.assignments {
        for p in a.players() {
            assert!(seen.insert(p.clone()), "{} double-booked in round {}", p, round.round);
        }
    }
    assert_eq!(seen.len(), expected_courts * 4);
    for p in &round.resting {
        assert!(seen.insert(p.clone()), "{} rests and plays in round {}", p, round.round);
    }
    assert_eq!(seen.len(), s.players().len());
    let mut sorted = round.resting.clone();
    sorted.sort();
    assert_eq!(sorted, round.resting);
}

fn partner_pairs(team: &Team) -> (String, String) {
    let [a, b] = team.players();
    (a.clone(), b.clone())
}

#[test]
fn eight_players_two_courts_three_rounds() {
    let mut s = scheduler_with("A\nB\nC\nD\nE\nF\nG\nH", 2, 3, 42);
    let out = generate_schedule(&mut s).unwrap();

    assert_eq!(out.matches("Round ").count(), 3);
    assert_eq!(out.lines().filter(|l| l.starts_with("Court ")).count(), 6);
    let resting: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Resting Players:"))
        .collect();
    assert_eq!(resting.len(), 3);
    for line in resting {
        assert_eq!(line.trim_end(), "Resting Players:");
    }
    assert!(out.contains("Court 1:"));
    assert!(out.contains("Court 2:"));
    assert_eq!(out.lines().filter(|l| *l == "-".repeat(50)).count(), 3);
}

#[test]
fn every_round_is_valid_across_seeds() {
    for (players, courts, rounds) in [(5, 2, 10), (9, 2, 8), (13, 3, 10), (18, 4, 10), (26, 6, 6)] {
        for seed in 0..3 {
            let mut s = scheduler_with(&names(players), courts, rounds, seed);
            generate_schedule(&mut s).unwrap();
            assert_eq!(s.rounds().len(), rounds as usize);
            for round in s.rounds() {
                assert_round_valid(&s, round);
            }
        }
    }
}

#[test]
fn partnership_and_opposition_counts_are_symmetric() {
    let mut s = scheduler_with(&names(11), 2, 10, 3);
    generate_schedule(&mut s).unwrap();
    let history = s.history();
    for p in s.players() {
        for q in s.players() {
            assert_eq!(history.partnership_count(p, q), history.partnership_count(q, p));
            assert_eq!(history.opposition_count(p, q), history.opposition_count(q, p));
        }
    }
    let total_games: u32 = s.players().iter().map(|p| history.games_played(p)).sum();
    assert_eq!(total_games as usize, history.games().len() * 4);
}

#[test]
fn partnerships_repeat_only_in_flagged_rounds() {
    for seed in 0..5 {
        let mut s = scheduler_with(&names(12), 3, 10, seed);
        generate_schedule(&mut s).unwrap();
        let mut pairs = HashSet::new();
        for round in s.rounds() {
            for a in &round.assignments {
                for team in [&a.team_1, &a.team_2] {
                    let fresh = pairs.insert(partner_pairs(team));
                    assert!(
                        fresh || round.repeated_partnership,
                        "repeated partnership {:?} in round {}",
                        team,
                        round.round
                    );
                }
            }
        }
    }
}

#[test]
fn eight_players_three_rounds_never_repeat_partners() {
    for seed in 0..10 {
        let mut s = scheduler_with(&names(8), 2, 3, seed);
        generate_schedule(&mut s).unwrap();
        assert!(s.rounds().iter().all(|r| !r.fallback));
        let report = calculate_fairness_stats(&s);
        assert_eq!(report.partnerships.repeated, 0);
        assert_eq!(report.partnerships.total, 12);
    }
}

#[test]
fn four_players_fall_back_after_all_partnerships_used() {
    // Four players have only three distinct team splits.
    let mut s = scheduler_with("A\nB\nC\nD", 2, 4, 9);
    generate_schedule(&mut s).unwrap();
    let fallbacks: Vec<bool> = s.rounds().iter().map(|r| r.fallback).collect();
    assert_eq!(fallbacks, vec![false, false, false, true]);
    let repeats: Vec<bool> = s.rounds().iter().map(|r| r.repeated_partnership).collect();
    assert_eq!(repeats, vec![false, false, false, true]);

    let mut first_three = HashSet::new();
    for round in &s.rounds()[..3] {
        assert_eq!(round.assignments.len(), 1);
        let a = &round.assignments[0];
        assert!(first_three.insert(partner_pairs(&a.team_1)));
        assert!(first_three.insert(partner_pairs(&a.team_2)));
    }
    assert_eq!(first_three.len(), 6);

    let report = calculate_fairness_stats(&s);
    assert_eq!(report.fallback_rounds, vec![4]);
    assert_eq!(report.repeated_partnership_rounds, vec![4]);
    assert_eq!(report.partnerships.repeated, 2);
    assert_eq!(report.partnerships.max_repeats, 2);
}

#[test]
fn fallback_without_repeats_is_reported_apart() {
    // No search trials: every round goes through the greedy fallback, which
    // still finds repeat-free splits for 8 players over 2 rounds.
    let mut config = SchedulerConfig::new(2, 2).with_seed(11);
    config.search = SearchLimits {
        min_trials: 0,
        max_trials: 0,
        ..SearchLimits::default()
    };
    let mut s = Scheduler::new(config).unwrap();
    load_players(&mut s, &names(8)).unwrap();
    generate_schedule(&mut s).unwrap();

    assert!(s.rounds().iter().all(|r| r.fallback && !r.repeated_partnership));
    let report = calculate_fairness_stats(&s);
    assert_eq!(report.fallback_rounds, vec![1, 2]);
    assert!(report.repeated_partnership_rounds.is_empty());
    assert_eq!(report.partnerships.repeated, 0);
}

#[test]
fn resting_is_spread_evenly() {
    // 10 players, 2 courts: 2 rest per round, 20 rests over 10 rounds.
    let mut s = scheduler_with(&names(10), 2, 10, 5);
    generate_schedule(&mut s).unwrap();
    let history = s.history();
    let rests: Vec<u32> = s.players().iter().map(|p| history.rest_count(p)).collect();
    assert_eq!(rests.iter().sum::<u32>(), 20);
    for r in &rests {
        assert_eq!(*r, 2, "rests: {:?}", rests);
    }
    for round in s.rounds() {
        assert_eq!(round.resting.len(), 2);
    }
}

#[test]
fn games_only_text_has_no_statistics() {
    let config = SchedulerConfig::new(2, 4).with_seed(1).with_print_stats(true);
    let mut s = Scheduler::new(config).unwrap();
    load_players(&mut s, &names(9)).unwrap();
    let out = generate_schedule(&mut s).unwrap();
    assert!(out.contains("Fairness Statistics"));
    assert!(out.starts_with(s.games_only_text()));
    assert!(!s.games_only_text().contains("Fairness Statistics"));
    assert!(s.games_only_text().ends_with(&"-".repeat(50)));
}

#[test]
fn games_only_text_follows_round_by_round_generation() {
    let mut s = scheduler_with(&names(9), 2, 3, 8);
    assert!(s.games_only_text().is_empty());
    generate_round(&mut s, 1).unwrap();
    assert!(s.games_only_text().contains("Round 1"));
    generate_round(&mut s, 2).unwrap();
    generate_round(&mut s, 3).unwrap();
    let text = s.games_only_text();
    assert_eq!(text.matches("Round ").count(), 3);
    assert!(text.contains("Round 3"));
    assert!(text.ends_with(&"-".repeat(50)));
}

#[test]
fn same_seed_same_schedule() {
    let run = |seed| {
        let mut s = scheduler_with(&names(14), 3, 7, seed);
        generate_schedule(&mut s).unwrap()
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn fairness_stats_are_idempotent() {
    let mut s = scheduler_with(&names(10), 2, 8, 21);
    generate_schedule(&mut s).unwrap();
    let first = calculate_fairness_stats(&s);
    let second = calculate_fairness_stats(&s);
    assert_eq!(first, second);

    let slots: u32 = first.courts.all_courts.iter().map(|c| c.games).sum();
    assert_eq!(slots, 16);
    assert_eq!(first.courts.players, 10);
    assert!(first.courts.most_used.games >= first.courts.least_used.games);
}

#[test]
fn generation_requires_players() {
    let mut s = Scheduler::new(SchedulerConfig::new(2, 3)).unwrap();
    assert_eq!(generate_schedule(&mut s), Err(SchedulerError::NoPlayersLoaded));
    assert!(matches!(generate_round(&mut s, 1), Err(SchedulerError::NoPlayersLoaded)));
}

#[test]
fn rounds_must_be_in_range_and_in_order() {
    let mut s = scheduler_with(&names(8), 2, 3, 2);
    assert!(matches!(
        generate_round(&mut s, 0),
        Err(SchedulerError::InvalidRoundRange { round: 0, max_rounds: 3 })
    ));
    assert!(matches!(
        generate_round(&mut s, 2),
        Err(SchedulerError::InvalidRoundRange { round: 2, .. })
    ));
    generate_round(&mut s, 1).unwrap();
    generate_round(&mut s, 2).unwrap();
    generate_round(&mut s, 3).unwrap();
    assert!(matches!(
        generate_round(&mut s, 4),
        Err(SchedulerError::InvalidRoundRange { round: 4, .. })
    ));
}

#[test]
fn schedule_cannot_be_generated_twice() {
    let mut s = scheduler_with(&names(8), 2, 2, 4);
    generate_schedule(&mut s).unwrap();
    assert_eq!(
        generate_schedule(&mut s),
        Err(SchedulerError::ScheduleAlreadyGenerated)
    );
}
