//! FFmpeg-backed inspector tests against a generated WAV file.

mod common;

use allparams::{AllParamsError, MediaInfo, MediaInspector, ParameterCatalog, StreamCategory};

#[test]
fn wav_has_one_general_and_one_audio_stream() {
    let directory = tempfile::tempdir().unwrap();
    let path = common::write_wav(directory.path());

    let media = MediaInfo::open(&path).expect("Failed to open WAV");
    assert_eq!(media.stream_count(StreamCategory::General), 1);
    assert_eq!(media.stream_count(StreamCategory::Audio), 1);
    assert_eq!(media.stream_count(StreamCategory::Video), 0);
    assert_eq!(media.stream_count(StreamCategory::Image), 0);
    assert_eq!(media.stream_count(StreamCategory::Menu), 0);
    assert_eq!(media.path(), path.as_path());
    media.close();
}

#[test]
fn audio_parameters_are_readable() {
    let directory = tempfile::tempdir().unwrap();
    let path = common::write_wav(directory.path());
    let media = MediaInfo::open(&path).unwrap();

    assert_eq!(
        media.get(StreamCategory::Audio, 0, "SamplingRate"),
        common::WAV_SAMPLE_RATE.to_string()
    );
    assert_eq!(media.get(StreamCategory::Audio, 0, "Format"), "pcm_s16le");
    assert_eq!(media.get(StreamCategory::Audio, 0, "StreamKind"), "Audio");
    assert_eq!(media.get(StreamCategory::General, 0, "AudioCount"), "1");
    assert_eq!(media.get(StreamCategory::General, 0, "Format"), "wav");
}

#[test]
fn unknown_parameters_and_indices_are_empty() {
    let directory = tempfile::tempdir().unwrap();
    let media = MediaInfo::open(common::write_wav(directory.path())).unwrap();

    assert_eq!(media.get(StreamCategory::Audio, 1, "SamplingRate"), "");
    assert_eq!(media.get(StreamCategory::Video, 0, "Width"), "");
    assert_eq!(media.get(StreamCategory::Audio, 0, "NoSuchParameter"), "");
}

#[test]
fn inform_values_are_well_formed() {
    let directory = tempfile::tempdir().unwrap();
    let media = MediaInfo::open(common::write_wav(directory.path())).unwrap();

    for category in [StreamCategory::General, StreamCategory::Audio] {
        let inform = media.get(category, 0, "Inform");
        assert!(!inform.is_empty(), "{category}");
        let entries = allparams::parse_inform(&inform).expect("Inform should parse");
        assert!(entries.iter().any(|entry| entry.key == "Format"), "{category}");
    }
}

#[test]
fn catalog_covers_every_category_without_warnings() {
    let directory = tempfile::tempdir().unwrap();
    let media = MediaInfo::open(common::write_wav(directory.path())).unwrap();

    let catalog = ParameterCatalog::parse(&media.parameter_catalog_text());
    assert!(catalog.warnings().is_empty());
    for category in StreamCategory::ALL {
        assert!(catalog.description(category, "Inform").is_some(), "{category}");
    }
}

#[test]
fn chapters_form_one_menu_stream() {
    let directory = tempfile::tempdir().unwrap();
    let media = MediaInfo::open(common::write_chapters(directory.path())).unwrap();

    assert_eq!(media.stream_count(StreamCategory::Menu), 1);
    assert_eq!(media.get(StreamCategory::Menu, 0, "ChapterCount"), "2");
    assert_eq!(media.get(StreamCategory::Menu, 0, "List"), "Intro / Chapter 2");
    assert_eq!(media.get(StreamCategory::Menu, 0, "Duration"), "2500");
    assert_eq!(media.get(StreamCategory::Menu, 0, "StreamKind"), "Menu");
    assert_eq!(media.get(StreamCategory::General, 0, "MenuCount"), "1");
    assert_eq!(media.get(StreamCategory::Menu, 1, "ChapterCount"), "");

    let inform = media.get(StreamCategory::Menu, 0, "Inform");
    let entries = allparams::parse_inform(&inform).expect("Menu Inform should parse");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "Chapter 1");
    assert_eq!(entries[0].value, "Intro (00:00:00.000 - 00:00:01.000)");
    assert_eq!(entries[1].key, "Chapter 2");
    assert_eq!(entries[1].value, "00:00:01.000 - 00:00:02.500");
}

#[test]
fn chaptered_file_reports_without_warnings_under_strict_policy() {
    let directory = tempfile::tempdir().unwrap();
    let media = MediaInfo::open(common::write_chapters(directory.path())).unwrap();

    let options = allparams::PrintOptions::new()
        .with_malformed_inform(allparams::MalformedInformPolicy::Fail);
    let report = allparams::inspect(&media, &options).expect("strict report");
    assert!(report.warnings.is_empty());
    assert_eq!(report.streams_of(StreamCategory::Menu).count(), 1);
}

#[test]
fn missing_file_fails_to_open() {
    let directory = tempfile::tempdir().unwrap();
    let error = MediaInfo::open(directory.path().join("missing.mp4")).unwrap_err();
    assert!(matches!(error, AllParamsError::FileOpen { .. }));
    assert!(error.to_string().contains("Failed to open media file"));
}

#[test]
fn garbage_file_fails_to_open() {
    let directory = tempfile::tempdir().unwrap();
    let path = common::write_garbage(directory.path());
    assert!(MediaInfo::open(path).is_err());
}
