/// Main entry point for the workout report binary
///
/// This file sets up logging, parses command line arguments, builds the
/// fixed set of workouts, and prints a report for each to stdout.

use chrono::Duration;
use clap::Parser;
use tracing::info;

use workout_report::{render, Running, Swimming, Walking, Workout, STEP_LEN_M, STROKE_LEN_M};

/// Command line arguments for the workout report binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("workout_report={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Rendering workout reports");

    let swimming = Swimming::new(
        Workout::new(
            "Swimming".to_string(),
            2000,
            STROKE_LEN_M,
            Duration::minutes(90),
            85.0,
        )?,
        50.0,
        5,
    )?;
    println!("{}", render(&swimming));

    let walking = Walking::new(
        Workout::new(
            "Walking".to_string(),
            20000,
            STEP_LEN_M,
            Duration::hours(3) + Duration::minutes(45),
            85.0,
        )?,
        185.0,
    )?;
    println!("{}", render(&walking));

    let running = Running::new(Workout::new(
        "Running".to_string(),
        5000,
        STEP_LEN_M,
        Duration::minutes(30),
        85.0,
    )?);
    println!("{}", render(&running));

    Ok(())
}
