use crate::scorer::SajuProfile;
use serde_json;

/// JSON formatter for stored profiles
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format profile as pretty-printed JSON
    pub fn format(profile: &SajuProfile) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(profile)
    }

    /// Format profile as compact JSON (no whitespace)
    pub fn format_compact(profile: &SajuProfile) -> Result<String, serde_json::Error> {
        serde_json::to_string(profile)
    }

    /// Read a stored profile back
    pub fn parse(json: &str) -> Result<SajuProfile, serde_json::Error> {
        serde_json::from_str(json)
    }
}
