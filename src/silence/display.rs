use serde_json::{Map, Value};

/// Display names longer than this are truncated.
const MAX_DISPLAY_LEN: usize = 33;
/// Characters kept when truncating, before the ellipsis.
const TRUNCATED_LEN: usize = 30;
/// Shown when a silence matches everything (no display params).
const EMPTY_PLACEHOLDER: &str = "(*)";
/// Param keys with this prefix are backend metadata, never displayed.
const RESERVED_PREFIX: &str = "__";

/// The label for a silence: the untruncated text for tooltips plus the
/// possibly-truncated text shown inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilenceLabel {
    pub full: String,
    pub display: String,
}

impl SilenceLabel {
    /// Reduces a param set to a label. Reserved keys are skipped; each
    /// key's values are comma-joined and the per-key fragments joined
    /// with spaces, in the param set's insertion order.
    pub fn from_param_set(param_set: &Map<String, Value>) -> Self {
        let mut fragments: Vec<String> = Vec::new();
        for (key, value) in param_set {
            if key.starts_with(RESERVED_PREFIX) {
                continue;
            }
            let values: Vec<&str> = value
                .as_array()
                .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
                .unwrap_or_default();
            fragments.push(values.join(", "));
        }
        let full = fragments.join(" ");

        let mut display = full.clone();
        if display.chars().count() > MAX_DISPLAY_LEN {
            display = display.chars().take(TRUNCATED_LEN).collect();
            display.push_str("...");
        }
        if display.is_empty() {
            display = EMPTY_PLACEHOLDER.to_string();
        }
        Self { full, display }
    }
}

/// Formats a params "abbr" value for appending to an alert name.
pub fn abbr(params_abbr: &str) -> String {
    if params_abbr.is_empty() {
        return String::new();
    }
    format!(" - {}", params_abbr)
}
