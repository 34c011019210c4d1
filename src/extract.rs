//! Field extraction from an FFmpeg demuxer.
//!
//! [`snapshot`] walks the input context once and records every parameter of
//! every stream instance as text, keyed by the names in
//! [`parameters`](crate::parameters). Values that FFmpeg does not know are
//! simply absent.

use std::collections::BTreeMap;
use std::path::Path;

use ffmpeg_next::{
    codec::{self, context::Context as CodecContext},
    format::{context::Input, stream::Disposition, stream::Stream},
    media::Type,
    util::format::{Pixel, Sample},
};
use ffmpeg_sys_next::AVCodecParameters;

use crate::category::StreamCategory;
use crate::conversion;
use crate::inform::{INFORM_KEY, render_inform};

/// Text values of one stream instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamFields {
    values: BTreeMap<&'static str, String>,
}

impl StreamFields {
    /// Record a value; empty values are ignored.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(key, value);
        }
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    fn set_duration(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.set("Duration", conversion::milliseconds(seconds));
            self.set("Duration/String", conversion::duration_string(seconds));
            self.set("Duration/String3", conversion::duration_string3(seconds));
        }
    }

    fn set_bit_rate(&mut self, key: &'static str, string_key: &'static str, bit_rate: i64) {
        if bit_rate > 0 {
            self.set(key, bit_rate.to_string());
            self.set(string_key, conversion::bit_rate_string(bit_rate as u64));
        }
    }

    fn set_dimensions(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.set("Width", width.to_string());
            self.set("Width/String", conversion::pixels_string(width));
            self.set("Height", height.to_string());
            self.set("Height/String", conversion::pixels_string(height));
        }
    }

    /// Build the Inform report from `(label, key)` pairs.
    fn set_inform(&mut self, layout: &[(&str, &str)]) {
        let report = {
            let rows: Vec<(&str, &str)> = layout
                .iter()
                .filter_map(|(label, key)| self.get(key).map(|value| (*label, value)))
                .collect();
            render_inform(&rows)
        };
        self.set(INFORM_KEY, report);
    }
}

/// Every stream instance of an opened file, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) streams: BTreeMap<StreamCategory, Vec<StreamFields>>,
}

impl Snapshot {
    pub(crate) fn count(&self, category: StreamCategory) -> usize {
        self.streams.get(&category).map_or(0, Vec::len)
    }

    pub(crate) fn stream(&self, category: StreamCategory, index: usize) -> Option<&StreamFields> {
        self.streams.get(&category).and_then(|streams| streams.get(index))
    }
}

const GENERAL_INFORM: &[(&str, &str)] = &[
    ("Complete name", "CompleteName"),
    ("Format", "Format"),
    ("Format/Info", "Format/Info"),
    ("Codec ID", "CodecID"),
    ("File size", "FileSize/String"),
    ("Duration", "Duration/String"),
    ("Overall bit rate", "OverallBitRate/String"),
    ("Title", "Title"),
    ("Performer", "Performer"),
    ("Recorded date", "Recorded_Date"),
    ("Writing application", "Encoded_Application"),
];

const VIDEO_INFORM: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Format", "Format"),
    ("Format/Info", "Format/Info"),
    ("Codec ID", "CodecID"),
    ("Duration", "Duration/String"),
    ("Bit rate", "BitRate/String"),
    ("Width", "Width/String"),
    ("Height", "Height/String"),
    ("Display aspect ratio", "DisplayAspectRatio/String"),
    ("Frame rate mode", "FrameRate_Mode"),
    ("Frame rate", "FrameRate/String"),
    ("Pixel format", "PixelFormat"),
    ("Bit depth", "BitDepth"),
    ("Color range", "colour_range"),
    ("Color primaries", "colour_primaries"),
    ("Transfer characteristics", "transfer_characteristics"),
    ("Matrix coefficients", "matrix_coefficients"),
    ("Title", "Title"),
    ("Language", "Language"),
    ("Default", "Default"),
    ("Forced", "Forced"),
];

const AUDIO_INFORM: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Format", "Format"),
    ("Format/Info", "Format/Info"),
    ("Codec ID", "CodecID"),
    ("Duration", "Duration/String"),
    ("Bit rate", "BitRate/String"),
    ("Channel(s)", "Channels/String"),
    ("Sampling rate", "SamplingRate/String"),
    ("Sample format", "SampleFormat"),
    ("Bit depth", "BitDepth"),
    ("Title", "Title"),
    ("Language", "Language"),
    ("Default", "Default"),
    ("Forced", "Forced"),
];

const TEXT_INFORM: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Format", "Format"),
    ("Format/Info", "Format/Info"),
    ("Codec ID", "CodecID"),
    ("Duration", "Duration/String"),
    ("Title", "Title"),
    ("Language", "Language"),
    ("Default", "Default"),
    ("Forced", "Forced"),
];

const OTHER_INFORM: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Type", "Type"),
    ("Format", "Format"),
    ("File name", "FileName"),
    ("MIME type", "MimeType"),
    ("Title", "Title"),
];

const IMAGE_INFORM: &[(&str, &str)] = &[
    ("ID", "ID"),
    ("Format", "Format"),
    ("Format/Info", "Format/Info"),
    ("Width", "Width/String"),
    ("Height", "Height/String"),
    ("Pixel format", "PixelFormat"),
    ("Bit depth", "BitDepth"),
    ("Title", "Title"),
];

/// Container tags copied into General, as `(tag, parameter)`.
const GENERAL_TAGS: &[(&str, &'static str)] = &[
    ("title", "Title"),
    ("album", "Album"),
    ("artist", "Performer"),
    ("genre", "Genre"),
    ("comment", "Comment"),
    ("date", "Recorded_Date"),
    ("copyright", "Copyright"),
    ("encoder", "Encoded_Application"),
    ("major_brand", "CodecID"),
    ("compatible_brands", "CodecID_Compatible"),
];

/// Map an FFmpeg stream onto a category.
pub fn classify(stream: &Stream) -> StreamCategory {
    category_for(stream.parameters().medium(), stream.disposition())
}

fn category_for(medium: Type, disposition: Disposition) -> StreamCategory {
    match medium {
        Type::Video if disposition.contains(Disposition::ATTACHED_PIC) => StreamCategory::Image,
        Type::Video => StreamCategory::Video,
        Type::Audio => StreamCategory::Audio,
        Type::Subtitle => StreamCategory::Text,
        Type::Data | Type::Attachment | Type::Unknown => StreamCategory::Other,
    }
}

/// Read every stream of `input` into a [`Snapshot`].
pub fn snapshot(path: &Path, input: &Input) -> Snapshot {
    let mut streams: BTreeMap<StreamCategory, Vec<StreamFields>> = StreamCategory::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();

    for stream in input.streams() {
        let category = classify(&stream);
        let mut fields = StreamFields::default();
        track_fields(&stream, &mut fields);
        match category {
            StreamCategory::Video => video_fields(&stream, &mut fields),
            StreamCategory::Image => image_fields(&stream, &mut fields),
            StreamCategory::Audio => audio_fields(&stream, &mut fields),
            StreamCategory::Other => other_fields(&stream, &mut fields),
            StreamCategory::Text | StreamCategory::General | StreamCategory::Menu => {}
        }
        streams.entry(category).or_default().push(fields);
    }

    if let Some(menu) = menu_fields(input) {
        streams.entry(StreamCategory::Menu).or_default().push(menu);
    }

    let mut general = general_fields(path, input);
    for category in StreamCategory::ALL {
        let count = streams.get(&category).map_or(0, Vec::len);
        let key = match category {
            StreamCategory::Video => "VideoCount",
            StreamCategory::Audio => "AudioCount",
            StreamCategory::Text => "TextCount",
            StreamCategory::Other => "OtherCount",
            StreamCategory::Image => "ImageCount",
            StreamCategory::Menu => "MenuCount",
            StreamCategory::General => continue,
        };
        if count > 0 {
            general.set(key, count.to_string());
        }
    }
    streams.insert(StreamCategory::General, vec![general]);

    for (category, instances) in &mut streams {
        let stream_count = instances.len();
        for (index, fields) in instances.iter_mut().enumerate() {
            finish(*category, index, stream_count, fields);
        }
    }

    Snapshot { streams }
}

/// Fill the bookkeeping parameters and the Inform report.
fn finish(category: StreamCategory, index: usize, stream_count: usize, fields: &mut StreamFields) {
    fields.set("StreamKind", category.label());
    fields.set("StreamCount", stream_count.to_string());
    fields.set("StreamKindID", index.to_string());

    let layout = match category {
        StreamCategory::General => GENERAL_INFORM,
        StreamCategory::Video => VIDEO_INFORM,
        StreamCategory::Audio => AUDIO_INFORM,
        StreamCategory::Text => TEXT_INFORM,
        StreamCategory::Other => OTHER_INFORM,
        StreamCategory::Image => IMAGE_INFORM,
        // The chapter report is built with the chapters themselves.
        StreamCategory::Menu => &[],
    };
    if !layout.is_empty() {
        fields.set_inform(layout);
    }

    // Count itself is included.
    let count = fields.len() + usize::from(fields.get("Count").is_none());
    fields.set("Count", count.to_string());
}

fn raw_parameters(stream: &Stream) -> AVCodecParameters {
    unsafe { *stream.parameters().as_ptr() }
}

fn general_fields(path: &Path, input: &Input) -> StreamFields {
    let mut fields = StreamFields::default();

    fields.set("CompleteName", path.display().to_string());
    if let Some(folder) = path.parent() {
        fields.set("FolderName", folder.display().to_string());
    }
    if let Some(name) = path.file_name() {
        fields.set("FileNameExtension", name.to_string_lossy());
    }
    if let Some(stem) = path.file_stem() {
        fields.set("FileName", stem.to_string_lossy());
    }
    if let Some(extension) = path.extension() {
        fields.set("FileExtension", extension.to_string_lossy());
    }

    let format = input.format();
    fields.set("Format", format.name());
    fields.set("Format/Info", format.description());
    fields.set("Format/Extensions", format.extensions().join(" "));

    match std::fs::metadata(path) {
        Ok(metadata) => {
            fields.set("FileSize", metadata.len().to_string());
            fields.set("FileSize/String", conversion::file_size_string(metadata.len()));
        }
        Err(error) => log::debug!("Could not stat {}: {error}", path.display()),
    }

    let duration_microseconds = input.duration();
    if duration_microseconds > 0 {
        fields.set_duration(duration_microseconds as f64 / 1_000_000.0);
    }
    fields.set_bit_rate("OverallBitRate", "OverallBitRate/String", input.bit_rate());

    let tags = input.metadata();
    for &(tag, key) in GENERAL_TAGS {
        if let Some(value) = tags.get(tag) {
            fields.set(key, value.trim());
        }
    }

    fields
}

/// Parameters shared by every non-General stream.
fn track_fields(stream: &Stream, fields: &mut StreamFields) {
    let parameters = stream.parameters();
    let raw = raw_parameters(stream);

    fields.set("StreamOrder", stream.index().to_string());
    if stream.id() > 0 {
        fields.set("ID", stream.id().to_string());
    }

    let codec_id = parameters.id();
    if codec_id != codec::Id::None {
        fields.set("Format", codec_id.name());
        if let Some(codec) = codec::decoder::find(codec_id) {
            fields.set("Format/Info", codec.description());
        }
    }
    fields.set("CodecID", conversion::codec_tag_string(raw.codec_tag));

    if stream.duration() > 0 {
        fields.set_duration(conversion::pts_to_seconds(stream.duration(), stream.time_base()));
    }
    fields.set_bit_rate("BitRate", "BitRate/String", raw.bit_rate);

    let tags = stream.metadata();
    if let Some(language) = tags.get("language") {
        fields.set("Language", language);
    }
    if let Some(title) = tags.get("title") {
        fields.set("Title", title);
    }

    let disposition = stream.disposition();
    fields.set(
        "Default",
        conversion::yes_no(disposition.contains(Disposition::DEFAULT)),
    );
    fields.set(
        "Forced",
        conversion::yes_no(disposition.contains(Disposition::FORCED)),
    );
}

fn bit_depth(raw: &AVCodecParameters) -> String {
    if raw.bits_per_raw_sample > 0 {
        raw.bits_per_raw_sample.to_string()
    } else if raw.bits_per_coded_sample > 0 {
        raw.bits_per_coded_sample.to_string()
    } else {
        String::new()
    }
}

fn pixel_format_name(format: Pixel) -> String {
    if format == Pixel::None {
        return String::new();
    }
    format
        .descriptor()
        .map(|descriptor| descriptor.name().to_string())
        .unwrap_or_else(|| format!("{format:?}"))
}

/// Debug name of a colour property, or empty when unspecified.
fn colour_name(value: impl std::fmt::Debug) -> String {
    let name = format!("{value:?}");
    if name == "Unspecified" { String::new() } else { name }
}

fn video_fields(stream: &Stream, fields: &mut StreamFields) {
    let raw = raw_parameters(stream);
    let index = stream.index();

    let decoder = CodecContext::from_parameters(stream.parameters())
        .and_then(|context| context.decoder().video());
    let decoder = match decoder {
        Ok(decoder) => decoder,
        Err(error) => {
            log::debug!("No video decoder for stream {index}: {error}");
            fields.set_dimensions(raw.width.max(0) as u32, raw.height.max(0) as u32);
            return;
        }
    };

    let (width, height) = (decoder.width(), decoder.height());
    fields.set_dimensions(width, height);

    let pixel_aspect = conversion::rational_to_f64(decoder.aspect_ratio()).unwrap_or(1.0);
    fields.set("PixelAspectRatio", conversion::ratio(pixel_aspect));
    if width > 0 && height > 0 {
        let display_aspect = width as f64 * pixel_aspect / height as f64;
        fields.set("DisplayAspectRatio", conversion::ratio(display_aspect));
        let display_width = (width as f64 * pixel_aspect).round() as u32;
        fields.set(
            "DisplayAspectRatio/String",
            conversion::aspect_ratio_string(display_width, height),
        );
    }

    let average = conversion::rational_to_f64(stream.avg_frame_rate());
    let base = conversion::rational_to_f64(stream.rate());
    if let Some(frames_per_second) = average.or(base) {
        fields.set("FrameRate", format!("{frames_per_second:.3}"));
        fields.set("FrameRate/String", conversion::frame_rate_string(frames_per_second));
    }
    if let (Some(average), Some(base)) = (average, base) {
        let mode = if (average - base).abs() < 0.01 { "CFR" } else { "VFR" };
        fields.set("FrameRate_Mode", mode);
    }

    if stream.frames() > 0 {
        fields.set("FrameCount", stream.frames().to_string());
    } else if let Some(frames_per_second) = average.filter(|_| stream.duration() > 0) {
        let seconds = conversion::pts_to_seconds(stream.duration(), stream.time_base());
        fields.set("FrameCount", ((seconds * frames_per_second).round() as u64).to_string());
    }

    fields.set("PixelFormat", pixel_format_name(decoder.format()));
    fields.set("BitDepth", bit_depth(&raw));
    fields.set("colour_range", colour_name(decoder.color_range()));
    fields.set("colour_primaries", colour_name(decoder.color_primaries()));
    fields.set(
        "transfer_characteristics",
        colour_name(decoder.color_transfer_characteristic()),
    );
    fields.set("matrix_coefficients", colour_name(decoder.color_space()));
}

fn image_fields(stream: &Stream, fields: &mut StreamFields) {
    let raw = raw_parameters(stream);
    fields.set_dimensions(raw.width.max(0) as u32, raw.height.max(0) as u32);
    fields.set("BitDepth", bit_depth(&raw));

    match CodecContext::from_parameters(stream.parameters())
        .and_then(|context| context.decoder().video())
    {
        Ok(decoder) => fields.set("PixelFormat", pixel_format_name(decoder.format())),
        Err(error) => log::debug!("No image decoder for stream {}: {error}", stream.index()),
    }
}

fn audio_fields(stream: &Stream, fields: &mut StreamFields) {
    let raw = raw_parameters(stream);
    fields.set("BitDepth", bit_depth(&raw));

    let decoder = match CodecContext::from_parameters(stream.parameters())
        .and_then(|context| context.decoder().audio())
    {
        Ok(decoder) => decoder,
        Err(error) => {
            log::debug!("No audio decoder for stream {}: {error}", stream.index());
            if raw.sample_rate > 0 {
                fields.set("SamplingRate", raw.sample_rate.to_string());
            }
            return;
        }
    };

    let channels = decoder.channels();
    if channels > 0 {
        fields.set("Channels", channels.to_string());
        fields.set("Channels/String", conversion::channels_string(channels));
    }

    let sample_rate = decoder.rate();
    if sample_rate > 0 {
        fields.set("SamplingRate", sample_rate.to_string());
        fields.set("SamplingRate/String", conversion::sampling_rate_string(sample_rate));
    }

    let sample_format = decoder.format();
    if sample_format != Sample::None {
        fields.set("SampleFormat", sample_format.name());
    }
}

fn other_kind(medium: Type) -> &'static str {
    match medium {
        Type::Data => "Data",
        Type::Attachment => "Attachment",
        _ => "Unknown",
    }
}

fn other_fields(stream: &Stream, fields: &mut StreamFields) {
    fields.set("Type", other_kind(stream.parameters().medium()));

    let tags = stream.metadata();
    if let Some(file_name) = tags.get("filename") {
        fields.set("FileName", file_name);
    }
    if let Some(mime_type) = tags.get("mimetype") {
        fields.set("MimeType", mime_type);
    }
}

fn menu_fields(input: &Input) -> Option<StreamFields> {
    if input.nb_chapters() == 0 {
        return None;
    }

    let mut fields = StreamFields::default();
    let mut titles = Vec::new();
    let mut rows = Vec::new();
    let mut span: Option<(f64, f64)> = None;

    for (index, chapter) in input.chapters().enumerate() {
        let time_base = chapter.time_base();
        let start = conversion::pts_to_seconds(chapter.start(), time_base);
        let end = conversion::pts_to_seconds(chapter.end(), time_base);
        span = Some(match span {
            Some((first, last)) => (first.min(start), last.max(end)),
            None => (start, end),
        });

        let title = chapter.metadata().get("title").map(str::to_string);
        rows.push(chapter_row(index, title.as_deref(), start, end));
        titles.push(title.unwrap_or_else(|| rows[index].0.clone()));
    }

    fields.set("ChapterCount", rows.len().to_string());
    fields.set("Chapters_Pos_Begin", "0");
    fields.set("Chapters_Pos_End", rows.len().to_string());
    if let Some((first, last)) = span {
        fields.set_duration(last - first);
    }
    fields.set("List", titles.join(" / "));
    fields.set(INFORM_KEY, render_inform(&rows));

    Some(fields)
}

/// Inform row of one chapter: `Chapter N` and `title (start - end)`.
fn chapter_row(index: usize, title: Option<&str>, start: f64, end: f64) -> (String, String) {
    let range = format!(
        "{} - {}",
        conversion::duration_string3(start),
        conversion::duration_string3(end)
    );
    let row = match title {
        Some(title) => format!("{title} ({range})"),
        None => range,
    };
    (format!("Chapter {}", index + 1), row)
}
