//! Timefmt - cached strftime formatters for display layers
//!
//! This library turns timestamps into display text through a small registry
//! that compiles each strftime pattern once and hands out the same formatter
//! for every subsequent lookup of that pattern. It ships a catalog of the
//! common presets chart and table layers ask for by name, and a configurable
//! default pattern for lookups that pass no pattern at all.
//!
//! # Modules
//!
//! The library is organized into a few small modules:
//!
//! * [`config`] - Time-format configuration parsing
//! * [`formats`] - Catalog of named strftime presets
//! * [`formatter`] - A formatter bound to one compiled pattern
//! * [`registry`] - The per-pattern formatter cache
//!
//! # Example
//!
//! ```
//! use timefmt::{formats, TimeFormatterRegistry};
//!
//! let registry = TimeFormatterRegistry::new();
//! let rendered = registry.format(Some(formats::US_DATE), formats::preview_time());
//! assert_eq!(rendered, "02/14/2017");
//! ```

/// Configuration module for the time-format settings of a consuming app
pub mod config;

/// Catalog of named strftime presets and the preview timestamp
pub mod formats;

/// Formatter bound to a single compiled strftime pattern
pub mod formatter;

/// Registry caching one formatter per trimmed pattern
pub mod registry;

// Re-export the main types for convenient access
pub use config::TimeFormatConfig;
pub use formatter::{FormatError, TimeFormatter};
pub use registry::TimeFormatterRegistry;
