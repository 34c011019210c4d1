//! Error types for the `allparams` crate.
//!
//! This module defines [`AllParamsError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry the path, line, or
//! upstream message needed to diagnose the problem.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use serde_json::Error as JsonError;
use thiserror::Error;

/// The unified error type for all `allparams` operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AllParamsError {
    /// The media file could not be opened.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::MediaInfo::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// An `Inform` value contained a line without a `key: value` separator.
    #[error("Unexpected format in the 'Inform' parameter: {line:?}")]
    MalformedInform {
        /// The offending line, untrimmed.
        line: String,
    },

    /// A log level name was not recognised.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while writing the report.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// The report could not be serialised to JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] JsonError),
}

impl From<FfmpegError> for AllParamsError {
    fn from(error: FfmpegError) -> Self {
        AllParamsError::FfmpegError(error.to_string())
    }
}
