use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::filters::ChatQuery;
use crate::library::ChatLibrary;
use crate::models::Source;
use crate::utils::{SourceDirs, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "chat-history-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse Claude Code and Cursor conversation history", long_about = None)]
pub struct Cli {
    /// Claude home directory (default: $CLAUDE_HOME or ~/.claude)
    #[arg(long, global = true)]
    pub claude_dir: Option<PathBuf>,

    /// Cursor base directory (default: $CURSOR_HOME or the platform config dir)
    #[arg(long, global = true)]
    pub cursor_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List chats as JSON previews, newest first
    List {
        /// Only chats from this source (claude or cursor)
        #[arg(long)]
        source: Option<Source>,
        /// Case-insensitive text to find in messages or project names
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one chat with all messages as JSON
    Show {
        session_id: String,
    },
    /// Print the Monday-to-Friday summary of a week as JSON
    Weekly {
        /// How many weeks back from the current one (negative values count as 0)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        weeks_ago: i64,
    },
    /// Show statistics about the history
    Stats,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let library = ChatLibrary::new(resolve_dirs(&cli)?);

    match command {
        Commands::List { source, search } => {
            let query = ChatQuery { source: *source, search: search.clone() };
            print_json(&library.list(&query))?;
        }
        Commands::Show { session_id } => match library.get_by_id(session_id) {
            Some(chat) => print_json(&chat)?,
            None => {
                eprintln!("Chat not found: {}", session_id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Weekly { weeks_ago } => {
            print_json(&library.weekly_summary(clamp_weeks_ago(*weeks_ago)))?;
        }
        Commands::Stats => show_stats(&library),
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_dirs(cli: &Cli) -> Result<SourceDirs> {
    if let (Some(claude_dir), Some(cursor_dir)) = (&cli.claude_dir, &cli.cursor_dir) {
        return Ok(SourceDirs::new(claude_dir, cursor_dir));
    }

    let mut dirs = SourceDirs::detect()?;
    if let Some(claude_dir) = &cli.claude_dir {
        dirs.claude_dir = claude_dir.clone();
    }
    if let Some(cursor_dir) = &cli.cursor_dir {
        dirs.cursor_dir = cursor_dir.clone();
    }
    Ok(dirs)
}

/// Negative offsets would point into the future; treat them as the current week
pub fn clamp_weeks_ago(weeks_ago: i64) -> u32 {
    u32::try_from(weeks_ago.max(0)).unwrap_or(u32::MAX)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn show_stats(library: &ChatLibrary) {
    let chats = library.chats();

    println!("Chat History Statistics");
    println!("=======================");
    println!("Total chats: {}", chats.len());
    for source in [Source::Claude, Source::Cursor] {
        let (count, messages) = chats
            .iter()
            .filter(|c| c.source == source)
            .fold((0, 0), |(n, m), c| (n + 1, m + c.message_count));
        println!("  {}: {} chats, {} messages", source, count, messages);
    }
    println!();
    println!("Claude directory: {}", format_path_with_tilde(&library.dirs().claude_dir));
    println!("Cursor directory: {}", format_path_with_tilde(&library.dirs().cursor_dir));

    // Sorted newest first, undated last
    let dated: Vec<i64> = chats.iter().filter_map(|c| c.date).collect();
    let format = |millis: i64| {
        chrono::DateTime::from_timestamp_millis(millis)
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    };
    if let Some(oldest) = dated.last() {
        println!("Oldest chat: {}", format(*oldest));
    }
    if let Some(newest) = dated.first() {
        println!("Newest chat: {}", format(*newest));
    }
}
