mod serve;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use razzie_core::{analyze, group_wins, load_csv, IntervalSummary, MovieRecord};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Golden Raspberry producer win-interval toolchain.
#[derive(Parser)]
#[command(name = "razzie", version, about = "Producer win-interval analysis toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the min/max win intervals for a dataset
    Intervals {
        /// Path to the semicolon-separated dataset CSV
        file: PathBuf,
    },

    /// Summarize a dataset: record counts, year span, repeat winners
    Inspect {
        /// Path to the semicolon-separated dataset CSV
        file: PathBuf,
    },

    /// Start the HTTP JSON API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,
        /// Path to the dataset CSV (defaults to data/movielist.csv)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Intervals { file } => {
            cmd_intervals(&file, cli.output, cli.quiet);
        }
        Commands::Inspect { file } => {
            cmd_inspect(&file, cli.output);
        }
        Commands::Serve { port, data } => {
            let data = data.unwrap_or_else(default_data_path);
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(port, &data)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Default dataset location, resolved relative to the current directory.
fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("movielist.csv")
}

/// Load a dataset or exit 1 with the error on stderr.
fn load_or_exit(file: &Path) -> Vec<MovieRecord> {
    match load_csv(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {}: {}", file.display(), e);
            process::exit(1);
        }
    }
}

fn cmd_intervals(file: &Path, output: OutputFormat, quiet: bool) {
    let records = load_or_exit(file);
    if !quiet {
        eprintln!("Loaded {} records from {}", records.len(), file.display());
    }
    let summary = analyze(&records);

    match output {
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&summary)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            print_summary_text(&summary);
        }
    }
}

fn print_summary_text(summary: &IntervalSummary) {
    if summary.min.is_empty() {
        println!("No producer has more than one win.");
        return;
    }
    println!("Shortest interval(s):");
    for entry in &summary.min {
        println!(
            "  {}: {} ({} -> {})",
            entry.producer,
            plural_years(entry.interval),
            entry.previous_win,
            entry.following_win
        );
    }
    println!("Longest interval(s):");
    for entry in &summary.max {
        println!(
            "  {}: {} ({} -> {})",
            entry.producer,
            plural_years(entry.interval),
            entry.previous_win,
            entry.following_win
        );
    }
}

fn plural_years(n: i32) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", n)
    }
}

fn cmd_inspect(file: &Path, output: OutputFormat) {
    let records = load_or_exit(file);
    let winners = records.iter().filter(|r| r.winner).count();
    let year_min = records.iter().map(|r| r.year).min();
    let year_max = records.iter().map(|r| r.year).max();

    let history = group_wins(&records);
    let repeat_winners: Vec<(&str, usize)> = history
        .iter()
        .filter(|p| p.years.len() >= 2)
        .map(|p| (p.producer.as_str(), p.years.len()))
        .collect();

    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "records": records.len(),
                "winners": winners,
                "first_year": year_min,
                "last_year": year_max,
                "repeat_winners": repeat_winners
                    .iter()
                    .map(|(producer, wins)| serde_json::json!({
                        "producer": producer,
                        "wins": wins,
                    }))
                    .collect::<Vec<_>>(),
            });
            let pretty = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            println!("Records:  {}", records.len());
            println!("Winners:  {}", winners);
            match (year_min, year_max) {
                (Some(first), Some(last)) => println!("Years:    {} - {}", first, last),
                _ => println!("Years:    (none)"),
            }
            if repeat_winners.is_empty() {
                println!("No producer has more than one win.");
            } else {
                println!("Producers with multiple wins:");
                for (producer, wins) in &repeat_winners {
                    println!("  {} ({} wins)", producer, wins);
                }
            }
        }
    }
}
