//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Sample rate of the generated WAV file.
pub const WAV_SAMPLE_RATE: u32 = 8000;

/// Write a one-second, mono, 16-bit PCM WAV file of silence into `directory`.
pub fn write_wav(directory: &Path) -> PathBuf {
    let samples = WAV_SAMPLE_RATE as usize;
    let data_length = (samples * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + data_length as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_length).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&WAV_SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(WAV_SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_length.to_le_bytes());
    bytes.resize(44 + data_length as usize, 0);

    let path = directory.join("silence.wav");
    std::fs::write(&path, bytes).expect("Failed to write WAV fixture");
    path
}

/// Write an FFmpeg metadata file with two chapters: "Intro" from 0 to 1 s and
/// an untitled one from 1 s to 2.5 s.
pub fn write_chapters(directory: &Path) -> PathBuf {
    let text = "\
;FFMETADATA1
title=Chaptered

[CHAPTER]
TIMEBASE=1/1000
START=0
END=1000
title=Intro

[CHAPTER]
TIMEBASE=1/1000
START=1000
END=2500
";
    let path = directory.join("chapters.ffmeta");
    std::fs::write(&path, text).expect("Failed to write chapter fixture");
    path
}

/// Write a file that no demuxer recognises.
pub fn write_garbage(directory: &Path) -> PathBuf {
    let path = directory.join("invalid.mp4");
    std::fs::write(&path, b"this is not a media file").expect("Failed to write invalid file");
    path
}
