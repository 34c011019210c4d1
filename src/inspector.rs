//! The media-inspection contract.
//!
//! The report layer never touches a demuxer directly; it only asks a
//! [`MediaInspector`] three questions. [`MediaInfo`](crate::MediaInfo) is the
//! FFmpeg-backed implementation, and tests substitute fixed tables.

use crate::category::StreamCategory;

/// Read-only access to an opened media file's parameters.
pub trait MediaInspector {
    /// Catalog of known parameters, as a category-sectioned text blob.
    ///
    /// See [`ParameterCatalog::parse`](crate::ParameterCatalog::parse) for the
    /// format.
    fn parameter_catalog_text(&self) -> String;

    /// Number of stream instances of `category`.
    fn stream_count(&self, category: StreamCategory) -> usize;

    /// Value of `parameter` for the `index`-th stream of `category`.
    ///
    /// Returns an empty string when the stream does not exist or the
    /// parameter has no value.
    fn get(&self, category: StreamCategory, index: usize, parameter: &str) -> String;
}

impl<T: MediaInspector + ?Sized> MediaInspector for &T {
    fn parameter_catalog_text(&self) -> String {
        (**self).parameter_catalog_text()
    }

    fn stream_count(&self, category: StreamCategory) -> usize {
        (**self).stream_count(category)
    }

    fn get(&self, category: StreamCategory, index: usize, parameter: &str) -> String {
        (**self).get(category, index, parameter)
    }
}
