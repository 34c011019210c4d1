//! Stream reports.
//!
//! [`collect_report`] asks a [`MediaInspector`] for every cataloged parameter
//! of every stream instance and keeps the non-empty ones. The result is
//! rendered by [`printer`](crate::printer).
//!
//! Ordering is deterministic: categories in [`StreamCategory::ALL`] order,
//! instances by ascending index, parameters by ascending key.

use crate::{
    catalog::ParameterCatalog,
    category::StreamCategory,
    config::{MalformedInformPolicy, PrintOptions},
    error::AllParamsError,
    inform::{INFORM_KEY, InformEntry, parse_inform},
    inspector::MediaInspector,
};

/// One reported parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// A plain parameter.
    Value {
        /// Parameter key.
        key: String,
        /// Description line from the catalog, used as the display label.
        label: String,
        /// Non-empty value.
        value: String,
    },
    /// The composite `Inform` parameter, already split into entries.
    Inform(Vec<InformEntry>),
}

/// All reported parameters of one stream instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReport {
    /// Stream category.
    pub category: StreamCategory,
    /// Zero-based instance index within the category.
    pub index: usize,
    /// Entries in ascending key order.
    pub entries: Vec<ReportEntry>,
}

impl StreamReport {
    /// Header line, e.g. `[Audio #2]` for the second audio stream.
    pub fn header(&self) -> String {
        format!("[{} #{}]", self.category, self.index + 1)
    }
}

/// Reports for every stream instance, plus non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// One report per stream instance.
    pub streams: Vec<StreamReport>,
    /// Catalog and Inform problems that did not stop the run.
    pub warnings: Vec<String>,
}

impl Report {
    /// Reports of one category.
    pub fn streams_of(&self, category: StreamCategory) -> impl Iterator<Item = &StreamReport> {
        self.streams
            .iter()
            .filter(move |stream| stream.category == category)
    }
}

/// Query every cataloged parameter of every stream instance.
///
/// # Errors
///
/// Returns [`AllParamsError::MalformedInform`] when an `Inform` value cannot
/// be parsed and the policy is [`MalformedInformPolicy::Fail`].
pub fn collect_report<I: MediaInspector + ?Sized>(
    inspector: &I,
    catalog: &ParameterCatalog,
    options: &PrintOptions,
) -> Result<Report, AllParamsError> {
    let mut report = Report {
        streams: Vec::new(),
        warnings: catalog.warnings().iter().map(ToString::to_string).collect(),
    };

    for category in StreamCategory::ALL {
        let count = inspector.stream_count(category);
        log::debug!("{category}: {count} stream(s)");

        for index in 0..count {
            let mut stream = StreamReport {
                category,
                index,
                entries: Vec::new(),
            };

            for (key, label) in catalog.parameters(category) {
                let value = inspector.get(category, index, key);
                if value.is_empty() {
                    continue;
                }

                if key != INFORM_KEY {
                    stream.entries.push(ReportEntry::Value {
                        key: key.clone(),
                        label: label.clone(),
                        value,
                    });
                    continue;
                }

                match parse_inform(&value) {
                    Ok(entries) => stream.entries.push(ReportEntry::Inform(entries)),
                    Err(error) => match options.malformed_inform {
                        MalformedInformPolicy::Fail => return Err(error),
                        MalformedInformPolicy::Skip => {
                            let warning = format!("{}: {error}", stream.header());
                            log::warn!("Skipping Inform value. {warning}");
                            report.warnings.push(warning);
                        }
                    },
                }
            }

            report.streams.push(stream);
        }
    }

    Ok(report)
}

/// Parse the inspector's catalog and collect its report.
///
/// # Errors
///
/// See [`collect_report`].
pub fn inspect<I: MediaInspector + ?Sized>(
    inspector: &I,
    options: &PrintOptions,
) -> Result<Report, AllParamsError> {
    let catalog = ParameterCatalog::parse(&inspector.parameter_catalog_text());
    collect_report(inspector, &catalog, options)
}
