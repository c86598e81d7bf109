//! Command line front end: read a player list, print the schedule.
//! Run with: cargo run --bin scheduler -- --players players.txt --courts 3 --rounds 8
//! Reads names from stdin when no file is given. Log level via RUST_LOG (default info).

use anyhow::{Context, Result};
use badminton_scheduler::{
    calculate_fairness_stats, generate_schedule, load_players, render_fairness, Scheduler,
    SchedulerConfig,
};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scheduler", about = "Generate a balanced doubles schedule")]
struct Args {
    /// File with one player name per line (stdin if omitted)
    #[arg(short, long)]
    players: Option<PathBuf>,

    /// JSON config file; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum courts per round
    #[arg(long)]
    courts: Option<u32>,

    /// Number of rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for a reproducible schedule
    #[arg(long)]
    seed: Option<u64>,

    /// Append fairness statistics to the schedule
    #[arg(long)]
    stats: bool,

    /// Print the fairness report as JSON after the games
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<SchedulerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SchedulerConfig::default(),
    };
    if let Some(courts) = args.courts {
        config.max_courts = courts;
    }
    if let Some(rounds) = args.rounds {
        config.max_rounds = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.print_stats |= args.stats;
    Ok(config)
}

fn read_players(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading players {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading players from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!(
        "Scheduling {} rounds on up to {} courts",
        config.max_rounds,
        config.max_courts
    );

    let players = read_players(args.players.as_ref())?;
    let mut scheduler = Scheduler::new(config)?;
    load_players(&mut scheduler, &players)?;

    if args.json {
        generate_schedule(&mut scheduler)?;
        println!("{}", scheduler.games_only_text());
        let report = calculate_fairness_stats(&scheduler);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let schedule = generate_schedule(&mut scheduler)?;
        print!("{}", schedule);
        if !scheduler.config().print_stats {
            log::debug!("{}", render_fairness(&calculate_fairness_stats(&scheduler)));
        }
    }
    Ok(())
}
