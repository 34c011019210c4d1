//! Report configuration.
//!
//! [`PrintOptions`] is a small builder threaded through
//! [`collect_report`](crate::collect_report) and the printers.
//!
//! # Example
//!
//! ```
//! use allparams::{MalformedInformPolicy, PrintOptions};
//!
//! let options = PrintOptions::new()
//!     .with_label_width(32)
//!     .with_malformed_inform(MalformedInformPolicy::Fail);
//! assert_eq!(options.label_width(), 32);
//! ```

/// Default width of the label column in text output.
pub const DEFAULT_LABEL_WIDTH: usize = 28;

/// What to do with an `Inform` value that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedInformPolicy {
    /// Leave the Inform entry out, record a warning, and keep going.
    #[default]
    Skip,
    /// Stop and return [`AllParamsError::MalformedInform`](crate::AllParamsError::MalformedInform).
    Fail,
}

/// Options controlling how a report is collected and printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub(crate) label_width: usize,
    pub(crate) malformed_inform: MalformedInformPolicy,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintOptions {
    /// Defaults: 28-column labels, malformed Inform values skipped.
    pub fn new() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            malformed_inform: MalformedInformPolicy::Skip,
        }
    }

    /// Set the label column width. Labels longer than this are not cut.
    #[must_use]
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Set the malformed-Inform policy.
    #[must_use]
    pub fn with_malformed_inform(mut self, policy: MalformedInformPolicy) -> Self {
        self.malformed_inform = policy;
        self
    }

    /// Label column width.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Malformed-Inform policy.
    pub fn malformed_inform(&self) -> MalformedInformPolicy {
        self.malformed_inform
    }
}
