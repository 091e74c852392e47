use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend-generated query for a free-text question.
///
/// Held for display only; `results` are whatever rows the Query Service
/// returned after running the generated query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub input_text: String,
    pub generated_query: String,
    #[serde(default)]
    pub results: Vec<Value>,
}
