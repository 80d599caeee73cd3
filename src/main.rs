use clap::Parser;
use std::process;
use workout_wrapped::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(command) => result,
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => {
                        eprintln!("\nReceived CTRL+C, shutting down...");
                        Err(workout_wrapped::Error::processing_interrupted(
                            "Interrupted by user",
                        ))
                    }
                    Err(e) => Err(workout_wrapped::Error::io(
                        "Failed to install CTRL+C signal handler",
                        e,
                    )),
                }
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - the command has already printed its report
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Workout Wrapped - Your Year in Review");
    println!("=====================================");
    println!();
    println!("Turn a workout CSV export (one row per logged set) into a year-in-review");
    println!("summary: volume, workout days, streaks, favourite exercises and intensity.");
    println!();
    println!("USAGE:");
    println!("    workout-wrapped <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summarize   Summarize a workout export (main command)");
    println!("    story       Print the year-in-review story cards");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize 2025 from a Strong export:");
    println!("    workout-wrapped summarize strong_workouts.csv");
    println!();
    println!("    # Summarize another year as JSON, reading from stdin:");
    println!("    cat workouts.csv | workout-wrapped summarize - --year 2024 --output-format json");
    println!();
    println!("    # Show the story cards with the top 3 exercises:");
    println!("    workout-wrapped story workouts.csv --top 3");
    println!();
    println!("For detailed help on any command, use:");
    println!("    workout-wrapped <COMMAND> --help");
}
