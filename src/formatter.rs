//! Time formatter bound to a single strftime pattern
//!
//! A [`TimeFormatter`] compiles its pattern once at construction and renders
//! timestamps to display text. Construction never fails: formatting is
//! best-effort and degrades to the raw pattern for input chrono rejects, so
//! display layers never have to branch on formatting errors.

use std::fmt;
use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

/// Errors surfaced by [`TimeFormatter::try_format`].
///
/// The plain [`TimeFormatter::format`] path never reports these; it falls
/// back to the raw pattern instead.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("pattern '{0}' contains tokens that cannot be compiled")]
    InvalidPattern(String),

    #[error("pattern '{0}' cannot be rendered for this timestamp")]
    Unrenderable(String),
}

/// An immutable formatter bound to one trimmed strftime pattern.
///
/// Two formatters built from equal trimmed patterns render identically;
/// instance identity only matters through the registry's cache.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    pattern: String,
    label: Option<String>,
    /// Compiled once at construction; `None` when chrono rejects the pattern.
    items: Option<Vec<Item<'static>>>,
}

impl TimeFormatter {
    /// Build a formatter for `pattern`, trimming surrounding whitespace.
    ///
    /// Accepts any string. An uncompilable pattern still produces a working
    /// formatter whose output is the pattern itself.
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.trim().to_string();
        let items = StrftimeItems::new(&pattern).parse_to_owned().ok();
        Self {
            pattern,
            label: None,
            items,
        }
    }

    /// Attach a human-readable label, shown by format pickers.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The trimmed pattern this formatter is bound to.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Label for pickers, falling back to the pattern itself.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.pattern)
    }

    /// Whether the pattern compiled. A formatter for which this returns
    /// `false` renders every timestamp as the raw pattern.
    pub fn is_valid(&self) -> bool {
        self.items.is_some()
    }

    /// Render `timestamp` as display text.
    ///
    /// Total over all patterns: when the pattern did not compile, or chrono
    /// cannot render it for this value (e.g. timezone tokens on a naive
    /// timestamp), the raw pattern is returned verbatim instead of an error.
    pub fn format(&self, timestamp: NaiveDateTime) -> String {
        self.try_format(timestamp)
            .unwrap_or_else(|_| self.pattern.clone())
    }

    /// Render `timestamp`, surfacing the failure modes [`format`](Self::format)
    /// papers over.
    pub fn try_format(&self, timestamp: NaiveDateTime) -> Result<String, FormatError> {
        let items = self
            .items
            .as_ref()
            .ok_or_else(|| FormatError::InvalidPattern(self.pattern.clone()))?;

        let mut out = String::with_capacity(self.pattern.len());
        write!(out, "{}", timestamp.format_with_items(items.iter()))
            .map_err(|_| FormatError::Unrenderable(self.pattern.clone()))?;
        Ok(out)
    }
}

impl fmt::Display for TimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
