//! FFmpeg-backed [`MediaInspector`].
//!
//! [`MediaInfo`] owns one demuxer handle for the lifetime of a run. All
//! parameters are read once at open time; later queries are map lookups.
//!
//! # Example
//!
//! ```no_run
//! use allparams::{MediaInfo, MediaInspector, StreamCategory};
//!
//! let media = MediaInfo::open("input.mp4")?;
//! for index in 0..media.stream_count(StreamCategory::Audio) {
//!     println!("{}", media.get(StreamCategory::Audio, index, "SamplingRate"));
//! }
//! media.close();
//! # Ok::<(), allparams::AllParamsError>(())
//! ```

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};

use ffmpeg_next::format::context::Input;

use crate::{
    category::StreamCategory,
    error::AllParamsError,
    extract::{self, Snapshot},
    inspector::MediaInspector,
    parameters,
};

/// An opened media file.
///
/// The handle is released by [`close`](MediaInfo::close) or when the value
/// is dropped.
pub struct MediaInfo {
    /// The opened FFmpeg input (demuxer) context.
    input_context: Input,
    /// Parameters of every stream instance, read at open time.
    snapshot: Snapshot,
    /// Path to the opened media file.
    file_path: PathBuf,
}

impl Debug for MediaInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaInfo")
            .field("file_path", &self.file_path)
            .field("format", &self.input_context.format().name())
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl MediaInfo {
    /// Open a media file.
    ///
    /// Initialises FFmpeg (idempotent), opens the file, and reads the
    /// parameters of every stream.
    ///
    /// # Errors
    ///
    /// Returns [`AllParamsError::FileOpen`] if the file is missing, unreadable,
    /// or not recognised as media.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AllParamsError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();

        log::debug!("Opening media file: {}", file_path.display());

        ffmpeg_next::init().map_err(|error| AllParamsError::FileOpen {
            path: file_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| AllParamsError::FileOpen {
                path: file_path.clone(),
                reason: error.to_string(),
            })?;

        let snapshot = extract::snapshot(path, &input_context);

        log::info!(
            "Opened media file: {} (format={}, video={}, audio={}, text={}, other={}, image={}, menu={})",
            file_path.display(),
            input_context.format().name(),
            snapshot.count(StreamCategory::Video),
            snapshot.count(StreamCategory::Audio),
            snapshot.count(StreamCategory::Text),
            snapshot.count(StreamCategory::Other),
            snapshot.count(StreamCategory::Image),
            snapshot.count(StreamCategory::Menu),
        );

        Ok(Self {
            input_context,
            snapshot,
            file_path,
        })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Release the demuxer handle.
    pub fn close(self) {
        log::debug!("Closing media file: {}", self.file_path.display());
        drop(self);
    }
}

impl MediaInspector for MediaInfo {
    fn parameter_catalog_text(&self) -> String {
        parameters::info_parameters()
    }

    fn stream_count(&self, category: StreamCategory) -> usize {
        self.snapshot.count(category)
    }

    fn get(&self, category: StreamCategory, index: usize, parameter: &str) -> String {
        self.snapshot
            .stream(category, index)
            .and_then(|fields| fields.get(parameter))
            .unwrap_or_default()
            .to_string()
    }
}
