//! scopone-selfplay - play one hand of Scopone, search agent against greedy seats
//!
//! Deals a seeded hand, lets the search agent play one seat and the greedy
//! policy play the other three, and logs every move and the final score.
//!
//! Usage: scopone-selfplay --seed 7 --budget 500 --seat 0

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use rust_scopone::core::{GameConfig, PlayerId, Team};
use rust_scopone::games::scopone::ScoponeBuilder;
use rust_scopone::greedy::{GreedyPolicy, OpponentPolicy};
use rust_scopone::mcts::SearchConfig;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "scopone-selfplay")]
#[command(about = "Play one hand of Scopone: search agent against greedy seats")]
#[command(version)]
struct Args {
    /// Seed for the deal and the search
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    seed: u64,

    /// Rollouts per agent decision
    #[arg(short = 'b', long = "budget", default_value_t = 500)]
    budget: u32,

    /// Seat played by the search agent (0-3)
    #[arg(long = "seat", default_value_t = 0)]
    seat: u8,

    /// Rules configuration as JSON (point table, sweep bonus, leftover rule)
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let agent_seat = PlayerId::new(args.seat)?;
    let config = match &args.config {
        Some(path) => GameConfig::from_json(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let (game, mut state) = ScoponeBuilder::new().config(config).deal(args.seed).build()?;
    info!(seed = args.seed, budget = args.budget, agent = %agent_seat, "dealt");

    let mut turn = 0u64;
    while !state.is_terminal() {
        let seat = state.active();
        let mv = if seat == agent_seat {
            let search = SearchConfig::default()
                .with_budget(args.budget)
                .with_seed(args.seed.wrapping_add(turn));
            let (mv, stats) = game.agent_decide_with(&state, search)?;
            info!(
                %seat,
                %mv,
                rollouts = stats.rollouts,
                macro_children = stats.macro_children,
                time_us = stats.time_us,
                "agent move"
            );
            mv
        } else {
            let mv = GreedyPolicy
                .choose_move(&state, game.engine().values())
                .ok_or("greedy seat has no move")?;
            info!(%seat, %mv, "greedy move");
            mv
        };

        state = game.apply_external_move(&state, &mv)?;
        turn += 1;
    }

    let agent_team = agent_seat.team();
    info!(
        hand = state.score(Team::Hand),
        deck = state.score(Team::Deck),
        agent_team = %agent_team,
        margin = state.reward_for(agent_team),
        "hand over"
    );
    println!(
        "Hand {} - Deck {} (agent on {}, margin {:+})",
        state.score(Team::Hand),
        state.score(Team::Deck),
        agent_team,
        state.reward_for(agent_team)
    );
    Ok(())
}
