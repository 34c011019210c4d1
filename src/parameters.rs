//! Parameter vocabulary of the FFmpeg backend.
//!
//! Names follow MediaInfo's conventions so that reports line up with what
//! users of that tool expect. [`info_parameters`] renders the vocabulary as
//! the catalog blob consumed by
//! [`ParameterCatalog::parse`](crate::ParameterCatalog::parse).

use std::fmt::Write as _;

use crate::category::StreamCategory;

/// Width of the key column in the rendered catalog.
const CATALOG_KEY_WIDTH: usize = 40;

type Parameter = (&'static str, &'static str);

const KIND: &[Parameter] = &[
    ("Count", "Count of objects available in this stream"),
    ("StreamCount", "Count of streams of this kind available"),
    ("StreamKind", "Stream type name"),
    ("StreamKindID", "Number of the stream of this kind (base=0)"),
    ("Inform", "Summary report of this stream"),
];

const TRACK: &[Parameter] = &[
    ("StreamOrder", "Stream order in the file, whatever the kind of stream (base=0)"),
    ("ID", "The ID for this stream in this file"),
    ("Format", "Format used"),
    ("Format/Info", "Info about the format"),
    ("CodecID", "Codec ID (found in the file)"),
    ("Duration", "Play time of the stream in ms"),
    ("Duration/String", "Play time, two most significant units"),
    ("Duration/String3", "Play time in format HH:MM:SS.MMM"),
    ("BitRate", "Bit rate in bps"),
    ("BitRate/String", "Bit rate (with measurement)"),
    ("Language", "Language code, as tagged in the container"),
    ("Title", "Name of the track"),
    ("Default", "Set if this track is played when no preference matches"),
    ("Forced", "Set if this track is played even without a request"),
];

const GENERAL: &[Parameter] = &[
    ("CompleteName", "Full path of the file (folder+name+extension)"),
    ("FolderName", "Folder name only"),
    ("FileNameExtension", "File name and extension"),
    ("FileName", "File name only"),
    ("FileExtension", "File extension only"),
    ("Format", "Format used"),
    ("Format/Info", "Info about this format"),
    ("Format/Extensions", "Known extensions of this format"),
    ("CodecID", "Codec ID (major brand) found in the file"),
    ("CodecID_Compatible", "Compatible brands found in the file"),
    ("FileSize", "File size in bytes"),
    ("FileSize/String", "File size (with measure)"),
    ("Duration", "Play time of the content in ms"),
    ("Duration/String", "Play time, two most significant units"),
    ("Duration/String3", "Play time in format HH:MM:SS.MMM"),
    ("OverallBitRate", "Bit rate of all streams in bps"),
    ("OverallBitRate/String", "Bit rate of all streams (with measure)"),
    ("VideoCount", "Number of video streams"),
    ("AudioCount", "Number of audio streams"),
    ("TextCount", "Number of text streams"),
    ("OtherCount", "Number of other streams"),
    ("ImageCount", "Number of image streams"),
    ("MenuCount", "Number of menu streams"),
    ("Title", "Title of the file"),
    ("Album", "Title of the album"),
    ("Performer", "Main performer of the content"),
    ("Genre", "Genre of the content"),
    ("Comment", "Free comment"),
    ("Recorded_Date", "Time that the content was recorded"),
    ("Copyright", "Copyright attribution"),
    ("Encoded_Application", "Software used to create the file"),
];

const VIDEO: &[Parameter] = &[
    ("Width", "Width in pixel"),
    ("Width/String", "Width with measurement (pixel)"),
    ("Height", "Height in pixel"),
    ("Height/String", "Height with measurement (pixel)"),
    ("PixelAspectRatio", "Pixel aspect ratio"),
    ("DisplayAspectRatio", "Display aspect ratio"),
    ("DisplayAspectRatio/String", "Display aspect ratio, as W:H"),
    ("FrameRate", "Frames per second"),
    ("FrameRate/String", "Frames per second (with measurement)"),
    ("FrameRate_Mode", "Frame rate mode (CFR, VFR)"),
    ("FrameCount", "Number of frames"),
    ("PixelFormat", "Pixel format reported by the decoder"),
    ("BitDepth", "Bits per sample"),
    ("colour_range", "Colour range for YUV colour space"),
    ("colour_primaries", "Chromaticity coordinates of the source primaries"),
    ("transfer_characteristics", "Opto-electronic transfer characteristic"),
    ("matrix_coefficients", "Matrix coefficients used in deriving luma and chroma"),
];

const AUDIO: &[Parameter] = &[
    ("Channels", "Number of channels"),
    ("Channels/String", "Number of channels (with measurement)"),
    ("SamplingRate", "Sampling rate in Hz"),
    ("SamplingRate/String", "Sampling rate (with measurement)"),
    ("SampleFormat", "Sample format reported by the decoder"),
    ("BitDepth", "Bits per sample"),
];

const OTHER: &[Parameter] = &[
    ("Type", "Kind of data carried by this stream"),
    ("FileName", "Name of the attached file"),
    ("MimeType", "MIME type of the attached file"),
];

const IMAGE: &[Parameter] = &[
    ("Width", "Width in pixel"),
    ("Width/String", "Width with measurement (pixel)"),
    ("Height", "Height in pixel"),
    ("Height/String", "Height with measurement (pixel)"),
    ("PixelFormat", "Pixel format reported by the decoder"),
    ("BitDepth", "Bits per sample"),
];

const MENU: &[Parameter] = &[
    ("ChapterCount", "Number of chapters"),
    ("Chapters_Pos_Begin", "Index of the first chapter entry"),
    ("Chapters_Pos_End", "Index after the last chapter entry"),
    ("Duration", "Time from the first chapter start to the last chapter end in ms"),
    ("Duration/String", "Chapter span, two most significant units"),
    ("Duration/String3", "Chapter span in format HH:MM:SS.MMM"),
    ("List", "Chapter titles, separated by ' / '"),
];

/// Parameters known for `category`, in catalog order.
pub fn parameter_table(category: StreamCategory) -> Vec<Parameter> {
    let specific: &[&[Parameter]] = match category {
        StreamCategory::General => &[GENERAL],
        StreamCategory::Video => &[TRACK, VIDEO],
        StreamCategory::Audio => &[TRACK, AUDIO],
        StreamCategory::Text => &[TRACK],
        StreamCategory::Other => &[TRACK, OTHER],
        StreamCategory::Image => &[TRACK, IMAGE],
        StreamCategory::Menu => &[MENU],
    };

    let mut table: Vec<Parameter> = KIND.to_vec();
    for group in specific {
        for parameter in *group {
            if !table.iter().any(|(key, _)| *key == parameter.0) {
                table.push(*parameter);
            }
        }
    }
    table
}

/// Render the full catalog blob, one section per category.
pub fn info_parameters() -> String {
    let mut text = String::new();
    for category in StreamCategory::ALL {
        // Writing to a String cannot fail.
        let _ = writeln!(text, "{category}");
        for (key, description) in parameter_table(category) {
            let _ = writeln!(
                text,
                "{key:<width$}: {description}",
                width = CATALOG_KEY_WIDTH
            );
        }
        text.push('\n');
    }
    text
}
