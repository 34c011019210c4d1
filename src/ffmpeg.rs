//! FFmpeg log level configuration.
//!
//! FFmpeg prints its own diagnostics to stderr, independently of the Rust
//! [`log`](https://crates.io/crates/log) facade. Probing a file that is not
//! media at all makes it fairly chatty, so callers usually lower it before
//! opening anything.
//!
//! # Example
//!
//! ```no_run
//! use allparams::{FfmpegLogLevel, MediaInfo};
//!
//! allparams::set_ffmpeg_log_level(FfmpegLogLevel::Error);
//! let media = MediaInfo::open("input.mkv").unwrap();
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use ffmpeg_next::util::log::Level;

use crate::error::AllParamsError;

/// FFmpeg internal log verbosity, from most quiet to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FfmpegLogLevel {
    /// No output at all.
    Quiet,
    /// Conditions after which the process aborts.
    Panic,
    /// Unrecoverable errors.
    Fatal,
    /// Recoverable errors.
    #[default]
    Error,
    /// Warnings. FFmpeg's own default.
    Warning,
    /// Informational messages.
    Info,
    /// Verbose informational messages.
    Verbose,
    /// Debugging messages.
    Debug,
    /// Extremely verbose tracing.
    Trace,
}

impl FfmpegLogLevel {
    /// Names accepted by [`FromStr`], in the same order as the variants.
    pub const NAMES: [&'static str; 9] = [
        "quiet", "panic", "fatal", "error", "warning", "info", "verbose", "debug", "trace",
    ];

    fn to_ffmpeg_level(self) -> Level {
        match self {
            FfmpegLogLevel::Quiet => Level::Quiet,
            FfmpegLogLevel::Panic => Level::Panic,
            FfmpegLogLevel::Fatal => Level::Fatal,
            FfmpegLogLevel::Error => Level::Error,
            FfmpegLogLevel::Warning => Level::Warning,
            FfmpegLogLevel::Info => Level::Info,
            FfmpegLogLevel::Verbose => Level::Verbose,
            FfmpegLogLevel::Debug => Level::Debug,
            FfmpegLogLevel::Trace => Level::Trace,
        }
    }

    fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl Display for FfmpegLogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for FfmpegLogLevel {
    type Err = AllParamsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(FfmpegLogLevel::Quiet),
            "panic" => Ok(FfmpegLogLevel::Panic),
            "fatal" => Ok(FfmpegLogLevel::Fatal),
            "error" => Ok(FfmpegLogLevel::Error),
            "warning" | "warn" => Ok(FfmpegLogLevel::Warning),
            "info" => Ok(FfmpegLogLevel::Info),
            "verbose" => Ok(FfmpegLogLevel::Verbose),
            "debug" => Ok(FfmpegLogLevel::Debug),
            "trace" => Ok(FfmpegLogLevel::Trace),
            _ => Err(AllParamsError::InvalidLogLevel(value.to_string())),
        }
    }
}

/// Set FFmpeg's internal log verbosity.
///
/// This does not affect Rust-side `log` output.
pub fn set_ffmpeg_log_level(level: FfmpegLogLevel) {
    log::debug!("Setting FFmpeg log level to {level}");
    ffmpeg_next::util::log::set_level(level.to_ffmpeg_level());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back_to_variants() {
        for name in FfmpegLogLevel::NAMES {
            let level: FfmpegLogLevel = name.parse().unwrap();
            assert_eq!(level.to_string(), name);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_with_alias() {
        assert_eq!("WARN".parse::<FfmpegLogLevel>().unwrap(), FfmpegLogLevel::Warning);
        assert_eq!(" Debug ".parse::<FfmpegLogLevel>().unwrap(), FfmpegLogLevel::Debug);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let error = "loud".parse::<FfmpegLogLevel>().unwrap_err();
        assert!(error.to_string().contains("loud"));
    }

    #[test]
    fn default_is_error() {
        assert_eq!(FfmpegLogLevel::default(), FfmpegLogLevel::Error);
    }
}
