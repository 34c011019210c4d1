//! In-memory `log` backend for unit tests.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

/// Route `log` records into memory. Safe to call from every test.
pub(crate) fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in unit tests");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Whether a record at `level` containing `needle` was logged. Tests run in
/// parallel, so callers match on text unique to their own run.
pub(crate) fn logged(level: Level, needle: &str) -> bool {
    RECORDS
        .lock()
        .map(|records| {
            records
                .iter()
                .any(|(logged, message)| *logged == level && message.contains(needle))
        })
        .unwrap_or(false)
}
