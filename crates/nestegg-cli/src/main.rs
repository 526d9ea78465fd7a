mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::projection::{GoalArgs, LumpSumArgs, RecurringArgs};
use commands::readiness::ReadinessArgs;

/// Savings and investment projections
#[derive(Parser)]
#[command(
    name = "nestegg",
    version,
    about = "Savings and investment projections with decimal precision",
    long_about = "A CLI for the nestegg projection engine. Projects recurring \
                  contributions and lump sums month by month, solves for the \
                  monthly deposit needed to hit a savings goal, and evaluates \
                  the financial-readiness questionnaire into a staged plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project recurring monthly contributions
    Recurring(RecurringArgs),
    /// Project a single lump sum
    LumpSum(LumpSumArgs),
    /// Solve for the monthly deposit that reaches a target amount
    Goal(GoalArgs),
    /// Evaluate the financial-readiness questionnaire into a staged plan
    Readiness(ReadinessArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Recurring(args) => commands::projection::run_recurring(args),
        Commands::LumpSum(args) => commands::projection::run_lump_sum(args),
        Commands::Goal(args) => commands::projection::run_goal(args),
        Commands::Readiness(args) => commands::readiness::run_readiness(args),
        Commands::Version => {
            println!("nestegg {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
