//! Goal Tracker MCP Server - Main Entry Point
//!
//! This is the main entry point for the goal tracker server application.
//! The actual implementation is in the `goal_tracker` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use goal_tracker::logging::{default_log_level, init_logging};
use goal_tracker::{Config, GoalTrackerHandler};
use mcp_attr::server::serve_stdio;
use std::path::{Path, PathBuf};

/// Goal Tracker MCP Server - goals, class timetable and food budget via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the tracker state
    data_dir: PathBuf,

    /// Path to a TOML config file (defaults to <DATA_DIR>/goal-tracker.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level, args.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let config = Config::discover(args.config.as_deref(), Path::new(&args.data_dir))?;
    let handler = GoalTrackerHandler::new(&args.data_dir, config)?;
    serve_stdio(handler).await?;
    Ok(())
}
