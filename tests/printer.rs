//! Report collection and rendering against a fixed inspector.

use std::collections::HashMap;

use allparams::{
    AllParamsError, MalformedInformPolicy, MediaInspector, PrintOptions, ReportEntry,
    StreamCategory, inspect, printer,
};

const CATALOG: &str = "\
General
Format         : Format used
Inform         : Summary report
Title          : Title of the file
Duration       : Play time in ms

Audio
SamplingRate   : Sampling rate
Channels       : Number of channels
BitRate        : Bit rate
Language       : Language

Image
Width          : Width in pixel
";

/// Inspector backed by fixed tables.
#[derive(Default)]
struct FixedInspector {
    counts: HashMap<StreamCategory, usize>,
    values: HashMap<(StreamCategory, usize, String), String>,
}

impl FixedInspector {
    fn with_streams(mut self, category: StreamCategory, count: usize) -> Self {
        self.counts.insert(category, count);
        self
    }

    fn with_value(mut self, category: StreamCategory, index: usize, key: &str, value: &str) -> Self {
        self.values
            .insert((category, index, key.to_string()), value.to_string());
        self
    }
}

impl MediaInspector for FixedInspector {
    fn parameter_catalog_text(&self) -> String {
        CATALOG.to_string()
    }

    fn stream_count(&self, category: StreamCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    fn get(&self, category: StreamCategory, index: usize, parameter: &str) -> String {
        self.values
            .get(&(category, index, parameter.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

fn sample_inspector(inform: &str) -> FixedInspector {
    FixedInspector::default()
        .with_streams(StreamCategory::General, 1)
        .with_streams(StreamCategory::Audio, 2)
        .with_value(StreamCategory::General, 0, "Format", "Matroska")
        .with_value(StreamCategory::General, 0, "Title", "")
        .with_value(StreamCategory::General, 0, "Duration", "5005")
        .with_value(StreamCategory::General, 0, "Inform", inform)
        .with_value(StreamCategory::Audio, 0, "SamplingRate", "48000")
        .with_value(StreamCategory::Audio, 0, "Channels", "2")
        .with_value(StreamCategory::Audio, 0, "Language", "en")
        .with_value(StreamCategory::Audio, 1, "SamplingRate", "44100")
        .with_value(StreamCategory::Audio, 1, "BitRate", "")
}

fn render(inspector: &FixedInspector, options: &PrintOptions) -> String {
    let report = inspect(inspector, options).expect("report");
    let mut out = Vec::new();
    printer::write_text(&report, options, &mut out).expect("write");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn one_header_per_instance() {
    let text = render(&sample_inspector("A: 1\n"), &PrintOptions::new());
    let headers: Vec<&str> = text.lines().filter(|line| line.starts_with('[')).collect();
    assert_eq!(headers, ["[General #1]", "[Audio #1]", "[Audio #2]"]);
}

#[test]
fn empty_values_are_omitted() {
    let text = render(&sample_inspector("A: 1\n"), &PrintOptions::new());
    assert!(!text.contains("Title"));
    assert!(!text.contains("Bit rate"));
}

#[test]
fn parameters_are_alphabetical_within_a_block() {
    let report = inspect(&sample_inspector("A: 1\n"), &PrintOptions::new()).unwrap();
    let first_audio = report.streams_of(StreamCategory::Audio).next().unwrap();
    let keys: Vec<&str> = first_audio
        .entries
        .iter()
        .map(|entry| match entry {
            ReportEntry::Value { key, .. } => key.as_str(),
            ReportEntry::Inform(_) => "Inform",
        })
        .collect();
    assert_eq!(keys, ["Channels", "Language", "SamplingRate"]);

    let general = report.streams_of(StreamCategory::General).next().unwrap();
    assert_eq!(general.entries.len(), 3);
    assert!(matches!(&general.entries[0], ReportEntry::Value { key, .. } if key == "Duration"));
    assert!(matches!(&general.entries[2], ReportEntry::Inform(_)));
}

#[test]
fn value_lines_use_padded_description_labels() {
    let text = render(&sample_inspector("A: 1\n"), &PrintOptions::new());
    let expected = format!("\t{:<28}: {}", "Channels : Number of channels", "2");
    assert!(text.lines().any(|line| line == expected), "{text}");
    let expected = format!("\t{:<28}: {}", "Format : Format used", "Matroska");
    assert!(text.lines().any(|line| line == expected), "{text}");
}

#[test]
fn inform_renders_as_sub_list_in_input_order() {
    let text = render(&sample_inspector("A: 1\nB: two\n"), &PrintOptions::new());
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.trim_end() == format!("\t{:<28}:", "Inform").trim_end())
        .expect("Inform header");
    assert_eq!(lines[start + 1], format!("\t\t{:<28}: 1", "A"));
    assert_eq!(lines[start + 2], format!("\t\t{:<28}: two", "B"));
}

#[test]
fn malformed_inform_is_skipped_and_reported() {
    let report = inspect(&sample_inspector("noseparator\n"), &PrintOptions::new()).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("noseparator"));

    let general = report.streams_of(StreamCategory::General).next().unwrap();
    assert!(
        general
            .entries
            .iter()
            .all(|entry| !matches!(entry, ReportEntry::Inform(_)))
    );
    // The rest of the report is still produced.
    assert_eq!(report.streams.len(), 3);
}

#[test]
fn malformed_inform_fails_under_strict_policy() {
    let options = PrintOptions::new().with_malformed_inform(MalformedInformPolicy::Fail);
    let result = inspect(&sample_inspector("noseparator\n"), &options);
    match result {
        Err(AllParamsError::MalformedInform { line }) => assert_eq!(line, "noseparator"),
        other => panic!("expected MalformedInform, got {other:?}"),
    }
}

#[test]
fn categories_without_streams_produce_nothing() {
    let inspector = sample_inspector("A: 1\n").with_value(StreamCategory::Image, 0, "Width", "640");
    let text = render(&inspector, &PrintOptions::new());
    assert!(!text.contains("[Image"));
    assert!(!text.contains("640"));
}

#[test]
fn json_output_groups_parameters_per_stream() {
    let report = inspect(&sample_inspector("A: 1\n"), &PrintOptions::new()).unwrap();
    let mut out = Vec::new();
    printer::write_json(&report, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let streams = value.as_array().unwrap();
    assert_eq!(streams.len(), 3);
    assert_eq!(streams[0]["category"], "General");
    assert_eq!(streams[0]["parameters"]["Format"], "Matroska");
    assert_eq!(streams[0]["inform"][0]["value"], "1");
    assert_eq!(streams[2]["category"], "Audio");
    assert_eq!(streams[2]["index"], 1);
    assert_eq!(streams[2]["parameters"]["SamplingRate"], "44100");
    assert!(streams[2].get("inform").is_none());
}
