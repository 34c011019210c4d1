//! The composite `Inform` parameter.
//!
//! Unlike every other parameter, the value of `Inform` is a small text report
//! with one `key : value` pair per line. [`parse_inform`] splits it into
//! [`InformEntry`] values for display; [`render_inform`] produces it.

use std::fmt::Write as _;

use crate::error::AllParamsError;

/// Parameter key whose value is routed through [`parse_inform`].
pub const INFORM_KEY: &str = "Inform";

/// Label column width used when rendering an Inform report.
const RENDER_LABEL_WIDTH: usize = 41;

/// One line of an Inform report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformEntry {
    /// Field label, trimmed.
    pub key: String,
    /// Field value, trimmed.
    pub value: String,
}

/// Parse an Inform value into ordered entries.
///
/// Each line is split at its first colon, so values such as timestamps may
/// themselves contain colons. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`AllParamsError::MalformedInform`] for the first line that has no
/// colon at all.
///
/// # Example
///
/// ```
/// use allparams::parse_inform;
///
/// let entries = parse_inform("A: 1\nB: two\n")?;
/// assert_eq!(entries[0].key, "A");
/// assert_eq!(entries[1].value, "two");
/// # Ok::<(), allparams::AllParamsError>(())
/// ```
pub fn parse_inform(value: &str) -> Result<Vec<InformEntry>, AllParamsError> {
    value
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| -> Result<InformEntry, AllParamsError> {
            let (key, value) =
                line.split_once(':')
                    .ok_or_else(|| AllParamsError::MalformedInform {
                        line: line.to_string(),
                    })?;
            Ok(InformEntry {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// Render `(label, value)` pairs as an Inform report.
///
/// Pairs with an empty value are left out. Line breaks inside a value are
/// folded into ` / ` so every rendered line keeps its separator. Labels must
/// not contain a colon.
pub fn render_inform<L, V>(fields: &[(L, V)]) -> String
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    let mut report = String::new();
    for (label, value) in fields {
        let value = single_line(value.as_ref());
        if value.is_empty() {
            continue;
        }
        // Writing to a String cannot fail.
        let _ = writeln!(
            report,
            "{:<width$}: {}",
            label.as_ref(),
            value,
            width = RENDER_LABEL_WIDTH
        );
    }
    report
}

fn single_line(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
