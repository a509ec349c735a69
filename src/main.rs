mod agenda;
mod board;
mod cache;
mod cli;
mod config;
mod error;
mod report;
mod scoring;
mod source;
mod types;

use crate::error::BoardError;
use crate::types::config::BoardConfig;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const STALE: i32 = 1;
    pub const UNAVAILABLE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn ensure_root(path: &Path) -> Result<(), BoardError> {
    if !path.exists() {
        return Err(BoardError::PathNotFound(path.display().to_string()));
    }
    Ok(())
}

fn load_or_default(root: &Path) -> Result<BoardConfig, BoardError> {
    Ok(config::load_config(root)?.unwrap_or_default())
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>, BoardError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| BoardError::InvalidTimestamp(format!("{raw}: {e}"))),
        None => Ok(Utc::now()),
    }
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, BoardError> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| BoardError::InvalidTimestamp(format!("{raw}: {e}"))),
        None => Ok(Utc::now().date_naive()),
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, BoardError> {
    match cli.command {
        cli::Commands::Rank(cmd) => {
            ensure_root(&cmd.path)?;
            let cfg = load_or_default(&cmd.path)?;

            let owner = cmd
                .owner
                .as_deref()
                .or(cfg.owner())
                .ok_or_else(|| {
                    BoardError::MissingRepository(
                        "pass --owner or set repository.owner in board.toml".to_string(),
                    )
                })?;
            let repo = cmd.repo.as_deref().or(cfg.repo_name()).ok_or_else(|| {
                BoardError::MissingRepository(
                    "pass --repo or set repository.name in board.toml".to_string(),
                )
            })?;
            let token = cfg
                .token()
                .map(str::to_string)
                .or_else(|| std::env::var("GITHUB_TOKEN").ok());
            let now = resolve_now(cmd.now.as_deref())?;

            let events_location = cmd.events.as_deref().unwrap_or(cfg.events_source());
            let events = source::events::load_events(&cmd.path, events_location);
            let client = source::github::GithubClient::new(cfg.api_base(), owner, repo, token);
            let cache = cache::ResultCache::new(cmd.path.join(cfg.cache_path()));
            let rules = cfg.scoring_rules();

            let request = board::RefreshRequest {
                repository_owner: owner,
                events: &events,
                limits: cfg.fetch_limits(),
                rules: &rules,
                now,
            };
            let format = output_format(&cmd.format);

            match board::refresh(&client, &request, &cache) {
                board::Outcome::Live(leaderboard) => {
                    let rendered = report::render(&leaderboard.truncated(cmd.top), format)?;
                    println!("{rendered}");
                    Ok(exit_code::SUCCESS)
                }
                board::Outcome::Cached { entry, reason } => {
                    eprintln!(
                        "warning: showing cached data from {} ({reason})",
                        entry.saved_at.format("%Y-%m-%d %H:%M UTC")
                    );
                    let rendered = report::render(&entry.leaderboard.truncated(cmd.top), format)?;
                    println!("{rendered}");
                    Ok(exit_code::STALE)
                }
                board::Outcome::Unavailable { reason } => {
                    eprintln!("leaderboard data unavailable: {reason}");
                    Ok(exit_code::UNAVAILABLE)
                }
            }
        }
        cli::Commands::Score(cmd) => {
            ensure_root(&cmd.path)?;
            if !cmd.pulls.exists() {
                return Err(BoardError::PathNotFound(cmd.pulls.display().to_string()));
            }
            let cfg = load_or_default(&cmd.path)?;
            let owner = cmd.owner.as_deref().or(cfg.owner()).unwrap_or_default();
            if owner.is_empty() {
                tracing::warn!("no repository owner configured; nobody is excluded");
            }
            let now = resolve_now(cmd.now.as_deref())?;

            let content = std::fs::read_to_string(&cmd.pulls)?;
            let pulls = match serde_json::from_str::<serde_json::Value>(&content)? {
                serde_json::Value::Array(items) => types::records::pull_requests_from_values(items),
                _ => return Err(BoardError::InvalidDump(cmd.pulls.display().to_string())),
            };
            let events_location = cmd.events.as_deref().unwrap_or(cfg.events_source());
            let events = source::events::load_events(&cmd.path, events_location);

            let leaderboard =
                scoring::aggregate(&pulls, &events, owner, now, &cfg.scoring_rules());
            let rendered =
                report::render(&leaderboard.truncated(cmd.top), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Events(cmd) => {
            ensure_root(&cmd.path)?;
            let cfg = load_or_default(&cmd.path)?;
            let today = resolve_today(cmd.today.as_deref())?;

            let events_location = cmd.events.as_deref().unwrap_or(cfg.events_source());
            let events = source::events::load_events(&cmd.path, events_location);
            let agenda = agenda::Agenda::build(&events, today);
            println!("{}", report::md::agenda_to_markdown(&agenda));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Cache(cmd) => match cmd.action {
            cli::CacheAction::Show(args) => {
                ensure_root(&args.path)?;
                let cfg = load_or_default(&args.path)?;
                let cache = cache::ResultCache::new(args.path.join(cfg.cache_path()));
                match cache.load() {
                    Some(entry) => {
                        println!(
                            "cache: {} (saved {})",
                            cache.path().display(),
                            entry.saved_at.format("%Y-%m-%d %H:%M UTC")
                        );
                        println!("{}", report::md::to_markdown(&entry.leaderboard));
                    }
                    None => println!("cache: empty"),
                }
                Ok(exit_code::SUCCESS)
            }
            cli::CacheAction::Clear(args) => {
                ensure_root(&args.path)?;
                let cfg = load_or_default(&args.path)?;
                let cache = cache::ResultCache::new(args.path.join(cfg.cache_path()));
                if cache.clear()? {
                    println!("cache: cleared {}", cache.path().display());
                } else {
                    println!("cache: empty");
                }
                Ok(exit_code::SUCCESS)
            }
        },
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
