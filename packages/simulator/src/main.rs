//! Simulator CLI - plays seeded games between bots entirely in memory.

mod output;
mod simulator;

use std::time::{Duration, Instant};

use clap::Parser;
use four_hundred::telemetry;
use output::{GameRecord, OutputWriter};
use simulator::Simulator;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "four-hundred-sim")]
#[command(about = "Plays Four Hundred games between random bots")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary and output path
    #[arg(long)]
    show_output: bool,

    /// Write one JSON line per game to this file
    #[arg(long)]
    output: Option<String>,

    /// Stop a game after this many rounds and report it unfinished
    #[arg(long, default_value = "200")]
    max_rounds: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    telemetry::init_tracing_with_default(filter);

    let mut output_writer = OutputWriter::new(args.output.as_deref())?;
    let start = Instant::now();
    let mut records = Vec::new();
    let mut errors = 0;

    for game_no in 1..=args.games {
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_no - 1)),
            None => rand::random(),
        };

        let outcome = match Simulator::new(game_seed, args.max_rounds) {
            Ok(sim) => sim.run(game_no).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(record) => {
                if let Err(e) = output_writer.write_game(&record) {
                    warn!(game_no, error = %e, "Failed to write game record");
                }
                info!(
                    game_no,
                    seed = game_seed,
                    rounds = record.rounds_played,
                    scores = ?record.final_scores,
                    finished = record.finished,
                    "Game completed"
                );
                records.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!(game_no, seed = game_seed, error = %e, "Game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let path = output_writer.finish()?;

    if args.show_output {
        if let Some(path) = path {
            info!("Results written to: {}", path.display());
        }
        print_summary(&records, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(records: &[GameRecord], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", records.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if records.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / records.len() as u32
    );

    let unfinished = records.iter().filter(|r| !r.finished).count();
    let mut team_wins = [0u32; 2];
    for team in records.iter().filter_map(|r| r.winning_team) {
        team_wins[team] += 1;
    }
    let avg_rounds =
        records.iter().map(|r| f64::from(r.rounds_played)).sum::<f64>() / records.len() as f64;

    println!("\n=== Results ===");
    println!("Seats 0+2 wins: {}", team_wins[0]);
    println!("Seats 1+3 wins: {}", team_wins[1]);
    if unfinished > 0 {
        println!("Unfinished (round cap): {unfinished}");
    }
    println!("Average rounds per game: {avg_rounds:.1}");
}
