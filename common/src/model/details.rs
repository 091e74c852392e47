use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One column of a relational table, as reported by the relational store's
/// `DESCRIBE` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "Field")]
    pub name: String,
    #[serde(rename = "Type")]
    pub data_type: String,
    #[serde(rename = "Null", default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<String>,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Descriptive details of the selected entity.
///
/// Tables carry a structured schema plus a handful of rows; collections only
/// have a representative sample of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityDetails {
    Table {
        columns: Vec<Column>,
        sample_rows: Vec<Value>,
    },
    Collection {
        sample_documents: Vec<Value>,
    },
}

impl EntityDetails {
    pub fn columns(&self) -> &[Column] {
        match self {
            EntityDetails::Table { columns, .. } => columns,
            EntityDetails::Collection { .. } => &[],
        }
    }

    /// Rows for a table, documents for a collection.
    pub fn samples(&self) -> &[Value] {
        match self {
            EntityDetails::Table { sample_rows, .. } => sample_rows,
            EntityDetails::Collection { sample_documents } => sample_documents,
        }
    }
}
