//! Catalog of named strftime presets
//!
//! These are the common patterns chart and table layers ask for by name.
//! The registry accepts any pattern string; this module only provides the
//! well-known ones and the symbolic-name lookup.

use chrono::NaiveDateTime;

/// `2017-02-14 11:22:33`
pub const DATABASE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// `14-02-2017 11:22:33`
pub const DATABASE_DATETIME_REVERSE: &str = "%d-%m-%Y %H:%M:%S";

/// `02/14/2017`
pub const US_DATE: &str = "%m/%d/%Y";

/// `14/02/2017`
pub const INTERNATIONAL_DATE: &str = "%d/%m/%Y";

/// `2017-02-14`
pub const DATABASE_DATE: &str = "%Y-%m-%d";

/// `11:22:33`
pub const TIME: &str = "%H:%M:%S";

/// Format used by the registry when no default has been configured
pub const DEFAULT_TIME_FORMAT: &str = DATABASE_DATETIME;

/// Resolve a symbolic catalog name to its pattern.
///
/// Returns `None` for anything that is not a catalog name, in which case
/// callers should treat the input as a literal pattern.
pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "DATABASE_DATETIME" => Some(DATABASE_DATETIME),
        "DATABASE_DATETIME_REVERSE" => Some(DATABASE_DATETIME_REVERSE),
        "US_DATE" => Some(US_DATE),
        "INTERNATIONAL_DATE" => Some(INTERNATIONAL_DATE),
        "DATABASE_DATE" => Some(DATABASE_DATE),
        "TIME" => Some(TIME),
        _ => None,
    }
}

/// Fixed sample timestamp (2017-02-14 11:22:33) used to preview a format
/// in pickers and in tests.
pub fn preview_time() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2017, 2, 14)
        .and_then(|d| d.and_hms_opt(11, 22, 33))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn by_name_resolves_catalog_entries() {
        assert_eq!(by_name("US_DATE"), Some("%m/%d/%Y"));
        assert_eq!(by_name("TIME"), Some("%H:%M:%S"));
        assert_eq!(by_name("%Y-%m-%d"), None);
        assert_eq!(by_name(""), None);
    }

    #[test]
    fn preview_time_is_fixed() {
        let t = preview_time();
        assert_eq!(t.format(DATABASE_DATETIME).to_string(), "2017-02-14 11:22:33");
        assert_eq!(t.hour(), 11);
    }
}
