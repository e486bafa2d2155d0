//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::timer::{MAX_MINUTES, MAX_SECONDS};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "chronokeys")]
#[command(about = "Keyboard-driven full-screen countdown timer")]
#[command(version)]
pub struct Args {
    /// Startup duration as MM:SS or plain seconds (overrides the config file)
    #[arg(short, long, value_parser = parse_duration)]
    pub duration: Option<u32>,

    /// Title shown above the clock (overrides the config file)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Path to the JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a default config file and exit (never replaces an existing one)
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Log level based on the verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Why a duration argument was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,
    #[error("expected MM:SS or a number of seconds, got `{0}`")]
    Malformed(String),
    #[error("seconds must be at most 59, got {0}")]
    SecondsOutOfRange(u32),
    #[error("minutes must be at most 99, got {0}")]
    MinutesOutOfRange(u32),
}

/// Parse `MM:SS` or a bare number of seconds into seconds.
///
/// Bare seconds are limited to 99:59 in total; `MM:SS` limits each part.
pub fn parse_duration(input: &str) -> Result<u32, DurationParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }
    let number = |part: &str| {
        part.parse::<u32>()
            .map_err(|_| DurationParseError::Malformed(input.to_string()))
    };

    let (minutes, seconds) = match input.split_once(':') {
        Some((m, s)) => {
            let seconds = number(s)?;
            if seconds > MAX_SECONDS {
                return Err(DurationParseError::SecondsOutOfRange(seconds));
            }
            (number(m)?, seconds)
        }
        None => {
            let total = number(input)?;
            (total / 60, total % 60)
        }
    };
    if minutes > MAX_MINUTES {
        return Err(DurationParseError::MinutesOutOfRange(minutes));
    }
    Ok(minutes * 60 + seconds)
}
