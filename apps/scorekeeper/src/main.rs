//! Scorekeeper simulator CLI - plays complete Judgment games through the
//! scoring engine and records per-game metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use judgment_core::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{OutputFormat, ScoringArg};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Headless Kachuphool/Judgment game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per game
    #[arg(short, long, default_value = "4", value_parser = parse_players)]
    players: usize,

    /// Scoring system (overrides JUDGMENT_SCORING)
    #[arg(long)]
    scoring: Option<ScoringArg>,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn parse_players(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}"
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = GameConfig::from_env()?;
    if let Some(scoring) = args.scoring {
        config.scoring = scoring.into();
    }

    if args.show_output {
        info!(
            games = args.games,
            players = args.players,
            scoring = %config.scoring,
            "Starting simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));

        match Simulator::new(game_seed, game_num).simulate_game(args.players, config) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_game_metrics(game_num, game_seed, args.games, &result, duration_ms);

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?}",
                        game_num,
                        result.final_scores()
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = {
        let (d, c) = output_writer.output_paths();
        (d.clone(), c.clone())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let seats = results[0].snapshot.players.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0i64; seats];
    let mut max_scores = vec![i32::MIN; seats];
    let mut min_scores = vec![i32::MAX; seats];
    let mut success_pct = vec![0u64; seats];

    for result in results {
        let scores = result.final_scores();
        let max_score = scores.iter().max().copied().unwrap_or(0);
        for (seat, &score) in scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
            // Count wins (every player on the top score wins)
            if score == max_score {
                wins[seat] += 1;
            }
        }
        for (seat, stats) in result.stats.iter().enumerate() {
            success_pct[seat] += u64::from(stats.success_pct);
        }
    }

    println!("\n=== Results by Seat ===");
    let n = results.len() as f64;
    for seat in 0..seats {
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%), bids made={:.0}%",
            seat + 1,
            total_scores[seat] as f64 / n,
            min_scores[seat],
            max_scores[seat],
            wins[seat],
            f64::from(wins[seat]) / n * 100.0,
            success_pct[seat] as f64 / n
        );
    }
}
