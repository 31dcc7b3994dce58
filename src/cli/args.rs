use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TACBOARD: Benchmark Leaderboard Dashboard
///
/// Fetches a YAML scores document describing AI-model benchmark results and
/// renders it as a ranked leaderboard with per-question breakdowns, either
/// on the terminal or through a small web dashboard.
#[derive(Parser, Debug)]
#[command(name = "tacboard")]
#[command(version = "0.1.0")]
#[command(about = "Rank and explore AI-model benchmark scores")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web dashboard server
    Serve(ServeArgs),

    /// Print the ranked leaderboard from a local scores file
    Show(ShowArgs),

    /// Print per-question success statistics from a local scores file
    Questions(QuestionsArgs),

    /// Fetch a scores document from a URL and print the leaderboard
    Fetch(FetchArgs),

    /// Generate a sample dashboard config file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the dashboard config file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of the scores document (overrides the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the scores file (.yaml or .yml)
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct QuestionsArgs {
    /// Path to the scores file (.yaml or .yml)
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// URL of the scores document
    pub url: String,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the config file
    #[arg(short, long, default_value = "tacboard.yaml")]
    pub output: PathBuf,
}
