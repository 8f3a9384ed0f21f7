use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the Claude home directory (default `~/.claude`)
pub const CLAUDE_HOME_ENV: &str = "CLAUDE_HOME";

/// Overrides the Cursor base directory (default `<config dir>/Cursor`)
pub const CURSOR_HOME_ENV: &str = "CURSOR_HOME";

/// Base directory of each history source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirs {
    pub claude_dir: PathBuf,
    pub cursor_dir: PathBuf,
}

impl SourceDirs {
    pub fn new(claude_dir: impl Into<PathBuf>, cursor_dir: impl Into<PathBuf>) -> Self {
        Self { claude_dir: claude_dir.into(), cursor_dir: cursor_dir.into() }
    }

    /// Resolve both directories from the environment, falling back to platform defaults
    pub fn detect() -> Result<Self> {
        let claude_dir = match env_path(CLAUDE_HOME_ENV) {
            Some(dir) => dir,
            None => get_claude_dir()?,
        };
        let cursor_dir = match env_path(CURSOR_HOME_ENV) {
            Some(dir) => dir,
            None => get_cursor_dir()?,
        };

        Ok(Self { claude_dir, cursor_dir })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Get the Claude directory path (~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}

/// Get the Cursor base directory
///
/// - macOS: `~/Library/Application Support/Cursor`
/// - Windows: `%APPDATA%\Cursor`
/// - Linux: `~/.config/Cursor`
pub fn get_cursor_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("Cursor"))
}
