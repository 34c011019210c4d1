//! Text and JSON rendering of a [`Report`].
//!
//! Text layout, one block per stream instance:
//!
//! ```text
//! [Audio #1]
//! 	Channels : Number of channels: 2
//! 	Inform                      :
//! 		Format                      : aac
//! ```

use std::io::Write;

use serde_json::{Map, Value, json};

use crate::{
    config::PrintOptions,
    error::AllParamsError,
    inform::INFORM_KEY,
    report::{Report, ReportEntry},
};

/// Write the report as indented text.
///
/// # Errors
///
/// Returns [`AllParamsError::IoError`] if writing fails.
pub fn write_text<W: Write>(
    report: &Report,
    options: &PrintOptions,
    out: &mut W,
) -> Result<(), AllParamsError> {
    let width = options.label_width;

    for stream in &report.streams {
        writeln!(out, "{}", stream.header())?;
        for entry in &stream.entries {
            match entry {
                ReportEntry::Value { label, value, .. } => {
                    writeln!(out, "\t{label:<width$}: {value}")?;
                }
                ReportEntry::Inform(rows) => {
                    writeln!(out, "\t{INFORM_KEY:<width$}:")?;
                    for row in rows {
                        writeln!(out, "\t\t{:<width$}: {}", row.key, row.value)?;
                    }
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Build the JSON form of a report.
///
/// The result is an array with one object per stream instance:
/// `{"category", "index", "parameters": {key: value}, "inform": [{key, value}]}`.
/// `inform` is present only when the stream has a parsed Inform value.
pub fn to_json(report: &Report) -> Value {
    let streams = report
        .streams
        .iter()
        .map(|stream| {
            let mut parameters = Map::new();
            let mut inform = None;
            for entry in &stream.entries {
                match entry {
                    ReportEntry::Value { key, value, .. } => {
                        parameters.insert(key.clone(), Value::String(value.clone()));
                    }
                    ReportEntry::Inform(rows) => {
                        inform = Some(
                            rows.iter()
                                .map(|row| json!({ "key": row.key, "value": row.value }))
                                .collect::<Vec<_>>(),
                        );
                    }
                }
            }

            let mut object = json!({
                "category": stream.category.label(),
                "index": stream.index,
                "parameters": parameters,
            });
            if let Some(rows) = inform {
                object["inform"] = Value::Array(rows);
            }
            object
        })
        .collect();

    Value::Array(streams)
}

/// Write the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`AllParamsError::JsonError`] or [`AllParamsError::IoError`].
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<(), AllParamsError> {
    serde_json::to_writer_pretty(&mut *out, &to_json(report))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
