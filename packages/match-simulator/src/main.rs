//! Match simulator CLI - runs all-bot matches in memory through the engine's
//! registry and records per-round contract results.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use engine::ai::registered_ais;
use engine::config::EngineConfig;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Fast in-memory simulator for all-bot matches")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Rounds per match
    #[arg(short, long, default_value = "4")]
    rounds: u32,

    /// Base seed; match N uses "{seed}:{N}". Random when omitted.
    #[arg(long)]
    seed: Option<String>,

    /// Bot policy for every seat
    #[arg(long, default_value = "Baseline")]
    policy: String,

    /// Bot decisions allowed per intent chain
    #[arg(long, default_value = "128")]
    iteration_cap: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL output with gzip
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    if args.json_logs {
        engine::telemetry::init_tracing(filter);
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if !registered_ais().iter().any(|f| f.name == args.policy) {
        let known: Vec<&str> = registered_ais().iter().map(|f| f.name).collect();
        return Err(format!("Unknown policy '{}'; expected one of {known:?}", args.policy).into());
    }

    let config = EngineConfig {
        bot_iteration_cap: args.iteration_cap.max(1),
        bot_policy: args.policy.clone(),
        ..EngineConfig::default()
    };
    let simulator = Simulator::new(config, args.rounds);
    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    info!(matches = args.matches, rounds = args.rounds, policy = %args.policy, "Starting simulation");

    let base_seed = args
        .seed
        .clone()
        .unwrap_or_else(|| format!("{:016x}", rand::random::<u64>()));

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_no in 1..=args.matches {
        let match_start = Instant::now();
        let seed = format!("{base_seed}:{match_no}");

        match simulator.simulate_match(match_no, &seed) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(match_no, &args.policy, &result, duration_ms);
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!(match_no, error = %e, "Failed to write match record");
                }
                info!(match_no, scores = ?result.final_scores, "Match completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(match_no, %seed, error = %e, "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if let Some(path) = jsonl_path {
        println!("Match records: {}", path.display());
    }
    println!("Summary CSV: {}", csv_path.display());
    print_summary(&results, errors, elapsed, args.matches);

    Ok(())
}

fn print_summary(results: &[MatchResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    let mut totals = [0i64; 2];
    let mut contracts = 0usize;
    let mut made = 0usize;

    for result in results {
        let teams = [result.final_scores[0], result.final_scores[1]];
        totals[0] += i64::from(teams[0]);
        totals[1] += i64::from(teams[1]);
        match teams[0].cmp(&teams[1]) {
            std::cmp::Ordering::Greater => wins[0] += 1,
            std::cmp::Ordering::Less => wins[1] += 1,
            std::cmp::Ordering::Equal => ties += 1,
        }
        contracts += result.rounds.len();
        made += result.rounds.iter().filter(|r| r.outcome.is_success).count();
    }

    println!("\n=== Results by Team ===");
    for team in 0..2 {
        let avg = totals[team] as f64 / results.len() as f64;
        let win_rate = f64::from(wins[team]) / results.len() as f64 * 100.0;
        println!(
            "Team {team} (seats {} and {}): avg={avg:.1}, wins={} ({win_rate:.1}%)",
            team,
            team + 2,
            wins[team]
        );
    }
    println!("Ties: {ties}");
    println!(
        "Contracts made: {made}/{contracts} ({:.1}%)",
        made as f64 / contracts as f64 * 100.0
    );
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
