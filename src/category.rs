//! Stream categories.
//!
//! Every parameter belongs to exactly one [`StreamCategory`]. The enum's
//! declaration order is the order in which categories are reported.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A class of metadata track within a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StreamCategory {
    /// Container-level information. Every opened file has exactly one.
    General,
    /// Moving-picture streams.
    Video,
    /// Sound streams.
    Audio,
    /// Subtitle and caption streams.
    Text,
    /// Data, attachment, and unclassified streams.
    Other,
    /// Still pictures embedded in the container (cover art).
    Image,
    /// Chapter lists.
    Menu,
}

impl StreamCategory {
    /// All categories in reporting order.
    pub const ALL: [StreamCategory; 7] = [
        StreamCategory::General,
        StreamCategory::Video,
        StreamCategory::Audio,
        StreamCategory::Text,
        StreamCategory::Other,
        StreamCategory::Image,
        StreamCategory::Menu,
    ];

    /// Display label, as used in catalog headers and report headers.
    pub fn label(self) -> &'static str {
        match self {
            StreamCategory::General => "General",
            StreamCategory::Video => "Video",
            StreamCategory::Audio => "Audio",
            StreamCategory::Text => "Text",
            StreamCategory::Other => "Other",
            StreamCategory::Image => "Image",
            StreamCategory::Menu => "Menu",
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl Display for StreamCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl FromStr for StreamCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| format!("Unknown category '{value}'"))
    }
}
