//! Parameter catalog.
//!
//! The inspection backend describes the parameters it knows about as one
//! text blob, split into blank-line separated sections:
//!
//! ```text
//! General
//! Count      : Count of objects available in this stream
//! Format     : Format used
//!
//! Video
//! Width      : Width (aperture size if present) in pixel
//! ```
//!
//! The first line of a section names the [`StreamCategory`]. Every following
//! line starts with the parameter key; the whole line is its description.
//! [`ParameterCatalog::parse`] turns the blob into one immutable map per
//! category.
//!
//! # Example
//!
//! ```
//! use allparams::{ParameterCatalog, StreamCategory};
//!
//! let catalog = ParameterCatalog::parse("General\nFormat : Format used\n");
//! let description = catalog.description(StreamCategory::General, "Format");
//! assert_eq!(description, Some("Format : Format used"));
//! ```

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::category::StreamCategory;

/// A non-fatal problem found while parsing a catalog blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// The header token that did not name a known category.
    pub label: String,
    /// 1-based line number of the header.
    pub line_number: usize,
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Unknown category '{}' (line {}); its parameters are ignored",
            self.label, self.line_number
        )
    }
}

/// Per-category mapping from parameter key to its description line.
///
/// All seven categories are always present, possibly empty. Keys iterate in
/// ascending byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCatalog {
    parameters: BTreeMap<StreamCategory, BTreeMap<String, String>>,
    warnings: Vec<CatalogWarning>,
}

impl Default for ParameterCatalog {
    fn default() -> Self {
        Self {
            parameters: StreamCategory::ALL
                .into_iter()
                .map(|category| (category, BTreeMap::new()))
                .collect(),
            warnings: Vec::new(),
        }
    }
}

impl ParameterCatalog {
    /// Parse a category-sectioned catalog blob.
    ///
    /// Sections whose header is not a known category label are dropped and
    /// recorded in [`warnings`](ParameterCatalog::warnings). Descriptions are
    /// whitespace-normalised: tokens are re-joined with a single space.
    pub fn parse(text: &str) -> Self {
        let mut catalog = Self::default();
        let mut section_start = true;
        // `None` while inside an unrecognised section.
        let mut current: Option<StreamCategory> = None;

        for (line_index, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some(&first) = fields.first() else {
                section_start = true;
                continue;
            };

            if section_start {
                current = StreamCategory::from_label(first);
                if current.is_none() {
                    let warning = CatalogWarning {
                        label: first.to_string(),
                        line_number: line_index + 1,
                    };
                    log::warn!("{warning}");
                    catalog.warnings.push(warning);
                }
                section_start = false;
                continue;
            }

            if let Some(category) = current {
                catalog
                    .parameters
                    .entry(category)
                    .or_default()
                    .insert(first.to_string(), fields.join(" "));
            }
        }

        log::debug!(
            "Parsed parameter catalog: {} parameters, {} warnings",
            catalog.len(),
            catalog.warnings.len()
        );

        catalog
    }

    /// Parameters of one category, keyed by parameter name.
    pub fn parameters(&self, category: StreamCategory) -> &BTreeMap<String, String> {
        // Every category is inserted by `Default`.
        &self.parameters[&category]
    }

    /// Parameter keys of one category in ascending order.
    pub fn keys(&self, category: StreamCategory) -> impl Iterator<Item = &str> {
        self.parameters(category).keys().map(String::as_str)
    }

    /// Full description line of a parameter.
    pub fn description(&self, category: StreamCategory, key: &str) -> Option<&str> {
        self.parameters(category).get(key).map(String::as_str)
    }

    /// Iterate `(category, parameters)` in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (StreamCategory, &BTreeMap<String, String>)> {
        self.parameters.iter().map(|(category, map)| (*category, map))
    }

    /// Warnings produced while parsing.
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Total number of parameters across all categories.
    pub fn len(&self) -> usize {
        self.parameters.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if no category has any parameter.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
