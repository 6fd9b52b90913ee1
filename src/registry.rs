//! Registry caching one formatter per pattern
//!
//! This module provides a centralized cache mapping trimmed pattern strings
//! to shared [`TimeFormatter`] instances, so that repeated lookups for the
//! same pattern reuse one compiled formatter instead of rebuilding it for
//! every cell of a chart or table.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use log::debug;

use crate::config::TimeFormatConfig;
use crate::formats::{self, DEFAULT_TIME_FORMAT};
use crate::formatter::TimeFormatter;

/// Cache of compiled formatters keyed by trimmed pattern, with a mutable
/// default pattern used when a lookup passes no pattern at all.
///
/// The cache is append-only: entries are created on first lookup and never
/// evicted, so for a given registry the same trimmed pattern always yields
/// the same `Arc` (pointer-equal across calls). Both the cache and the
/// default key sit behind mutexes, which keeps the check-then-insert step
/// atomic when a registry is shared across threads.
pub struct TimeFormatterRegistry {
    /// Map of trimmed pattern -> shared formatter instance
    formatters: Mutex<HashMap<String, Arc<TimeFormatter>>>,
    /// Pattern substituted when `get` is called without one
    default_key: Mutex<String>,
}

impl TimeFormatterRegistry {
    /// Create an empty registry whose default is [`DEFAULT_TIME_FORMAT`].
    pub fn new() -> Self {
        Self {
            formatters: Mutex::new(HashMap::new()),
            default_key: Mutex::new(DEFAULT_TIME_FORMAT.to_string()),
        }
    }

    /// Create a registry seeded from a display configuration.
    ///
    /// The configured default may be a catalog name (resolved through
    /// [`formats::by_name`]) or a literal pattern. Configured labels are
    /// attached to the formatters the registry hands out for those patterns.
    pub fn from_config(config: &TimeFormatConfig) -> Self {
        let registry = Self::new();
        let default = formats::by_name(&config.default_format).unwrap_or(&config.default_format);
        registry.set_default_key(default);

        let mut formatters = registry.formatters.lock().unwrap_or_else(|e| e.into_inner());
        for (pattern, label) in &config.labels {
            let key = formats::by_name(pattern).unwrap_or(pattern).trim();
            let formatter = TimeFormatter::new(key).with_label(label.clone());
            formatters.insert(key.to_string(), Arc::new(formatter));
        }
        drop(formatters);

        registry
    }

    /// Look up (or build and cache) the formatter for `pattern`.
    ///
    /// `None` and the empty string both resolve to the current default key,
    /// read at call time. The resolved pattern is trimmed before the cache
    /// lookup, so `" %Y "` and `"%Y"` share one entry. Accepts any string
    /// and never fails; pattern validity only affects what the formatter
    /// renders.
    pub fn get(&self, pattern: Option<&str>) -> Arc<TimeFormatter> {
        let resolved = match pattern {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => self.default_key(),
        };
        let key = resolved.trim();

        let mut formatters = self.formatters.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(formatter) = formatters.get(key) {
            return Arc::clone(formatter);
        }

        debug!("compiling time formatter for pattern '{key}'");
        let formatter = Arc::new(TimeFormatter::new(key));
        formatters.insert(key.to_string(), Arc::clone(&formatter));
        formatter
    }

    /// Replace the default pattern used by argument-less [`get`](Self::get)
    /// calls. Formatters already handed out are unaffected.
    pub fn set_default_key(&self, pattern: &str) {
        let mut default_key = self.default_key.lock().unwrap_or_else(|e| e.into_inner());
        *default_key = pattern.to_string();
    }

    /// The pattern currently substituted for argument-less lookups.
    pub fn default_key(&self) -> String {
        self.default_key
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Render `timestamp` with the formatter for `pattern`.
    ///
    /// Convenience for `get(pattern).format(timestamp)` with identical
    /// caching behavior.
    pub fn format(&self, pattern: Option<&str>, timestamp: NaiveDateTime) -> String {
        self.get(pattern).format(timestamp)
    }

    /// Check whether a formatter for `pattern` (trimmed) is already cached.
    pub fn has(&self, pattern: &str) -> bool {
        self.formatters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(pattern.trim())
    }

    /// Number of cached formatters.
    pub fn len(&self) -> usize {
        self.formatters.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TimeFormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
