//! # allparams
//!
//! Print every available metadata parameter of a media file, grouped by
//! stream.
//!
//! A [`MediaInspector`] describes the parameters it knows about as a
//! category-sectioned catalog and answers per-stream value queries.
//! [`ParameterCatalog`] parses that catalog, [`collect_report`] walks every
//! stream instance of every [`StreamCategory`], and the [`printer`] renders
//! the non-empty values. The bundled inspector, [`MediaInfo`], reads files
//! through FFmpeg via the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next)
//! crate.
//!
//! ## Quick Start
//!
//! ```no_run
//! use allparams::{MediaInfo, PrintOptions};
//!
//! let media = MediaInfo::open("input.mkv")?;
//! let options = PrintOptions::new();
//! let report = allparams::inspect(&media, &options)?;
//! allparams::printer::write_text(&report, &options, &mut std::io::stdout())?;
//! media.close();
//! # Ok::<(), allparams::AllParamsError>(())
//! ```
//!
//! ## Categories
//!
//! General, Video, Audio, Text, Other, Image, and Menu, always reported in
//! that order. Video streams flagged as attached pictures are reported as
//! Image; chapters form a single Menu stream.
//!
//! ## The `Inform` parameter
//!
//! Every category carries an `Inform` parameter whose value is itself a
//! `key : value` report. It is printed as an indented sub-list. A value that
//! cannot be parsed is skipped with a warning, or fails the run under
//! [`MalformedInformPolicy::Fail`].
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod catalog;
pub mod category;
pub mod config;
mod conversion;
pub mod error;
mod extract;
pub mod ffmpeg;
pub mod inform;
pub mod inspector;
pub mod media_info;
pub mod parameters;
pub mod printer;
pub mod report;

#[cfg(test)]
mod test_log;

pub use catalog::{CatalogWarning, ParameterCatalog};
pub use category::StreamCategory;
pub use config::{DEFAULT_LABEL_WIDTH, MalformedInformPolicy, PrintOptions};
pub use error::AllParamsError;
pub use ffmpeg::{FfmpegLogLevel, set_ffmpeg_log_level};
pub use inform::{InformEntry, parse_inform, render_inform};
pub use inspector::MediaInspector;
pub use media_info::MediaInfo;
pub use report::{Report, ReportEntry, StreamReport, collect_report, inspect};
