use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "contrib-board",
    version,
    about = "Community contributor leaderboard built from merged pull requests and events"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch pull requests live and rank contributors
    Rank(RankCommand),
    /// Rank contributors from a saved pull request dump
    Score(ScoreCommand),
    /// List upcoming and past events
    Events(EventsCommand),
    /// Inspect or clear the cached leaderboard
    Cache(CacheCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// Directory holding board.toml and the cache
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub repo: Option<String>,
    /// Events feed: local path or http(s) URL
    #[arg(long)]
    pub events: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Only show the first N ranks
    #[arg(long)]
    pub top: Option<usize>,
    /// Evaluation time (RFC 3339); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON array of pull requests as returned by the GitHub pulls API
    pub pulls: PathBuf,
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub events: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct EventsCommand {
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub events: Option<String>,
    /// Reference day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand)]
pub enum CacheAction {
    Show(CachePathArgs),
    Clear(CachePathArgs),
}

#[derive(Args)]
pub struct CachePathArgs {
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
