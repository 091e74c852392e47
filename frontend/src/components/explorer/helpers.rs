//! Small formatting helpers for the explorer view.

use serde_json::Value;

use crate::session::LoadStatus;

/// Pretty prints a row or document; falls back to compact output.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Placeholder text for a list that has nothing to show.
pub fn empty_list_text(status: LoadStatus, what: &str) -> String {
    match status {
        LoadStatus::Loading => format!("Loading {}…", what),
        LoadStatus::Failed => format!("Could not load {}.", what),
        LoadStatus::Absent | LoadStatus::Present => format!("No {} available", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholder_reflects_status() {
        assert_eq!(
            empty_list_text(LoadStatus::Loading, "sample queries"),
            "Loading sample queries…"
        );
        assert_eq!(
            empty_list_text(LoadStatus::Present, "construct-based queries"),
            "No construct-based queries available"
        );
    }

    #[test]
    fn json_is_indented() {
        assert_eq!(pretty_json(&json!({"id": 1})), "{\n  \"id\": 1\n}");
    }
}
