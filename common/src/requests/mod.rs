//! Request and response envelopes of the Query Service HTTP contract.
//!
//! The shapes mirror what the service puts on the wire; conversion into the
//! domain types of [`crate::model`] happens through the `into_*` helpers so the
//! frontend never branches on raw JSON shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::details::{Column, EntityDetails};
use crate::model::entity::EntityKind;
use crate::model::query::{QueryItem, QueryRepresentation, SampleQuery};
use crate::model::translation::TranslationResult;

/// `GET /mysql/tables`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableList {
    pub tables: Vec<String>,
}

/// `GET /mongo/collections`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<String>,
}

/// `GET /mysql/table/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadataResponse {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub sample_data: Vec<Value>,
}

impl TableMetadataResponse {
    pub fn into_details(self) -> EntityDetails {
        EntityDetails::Table {
            columns: self.columns,
            sample_rows: self.sample_data,
        }
    }
}

/// `GET /mongo/collection/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMetadataResponse {
    #[serde(default)]
    pub sample_data: Vec<Value>,
}

impl CollectionMetadataResponse {
    pub fn into_details(self) -> EntityDetails {
        EntityDetails::Collection {
            sample_documents: self.sample_data,
        }
    }
}

/// Sample and construct query endpoints share this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueriesResponse {
    #[serde(default)]
    pub queries: Vec<QueryItem>,
}

impl QueriesResponse {
    /// Sample queries are always text; structured items are rendered to text.
    pub fn into_sample_queries(self) -> Vec<SampleQuery> {
        self.queries
            .into_iter()
            .map(|item| SampleQuery {
                query_text: match item.query {
                    QueryRepresentation::Text(text) => text,
                    structured => structured.render(),
                },
                description: item.description,
            })
            .collect()
    }
}

/// `POST /nlp-query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpQueryRequest {
    pub query: String,
    pub database: EntityKind,
    pub table_or_collection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpQueryResponse {
    pub query: String,
    #[serde(default)]
    pub results: Vec<Value>,
}

impl NlpQueryResponse {
    pub fn into_translation(self, input_text: String) -> TranslationResult {
        TranslationResult {
            input_text,
            generated_query: self.query,
            results: self.results,
        }
    }
}

/// `POST /upload-dataset`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// Error body returned by the Query Service alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: Value,
}

impl ErrorDetail {
    /// `detail` is usually a string, but validation failures send a list.
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_metadata_becomes_table_details() {
        let response: TableMetadataResponse = serde_json::from_value(json!({
            "columns": [
                {"Field": "id", "Type": "int", "Null": "NO", "Key": "PRI", "Default": null, "Extra": ""},
                {"Field": "total", "Type": "float", "Null": "YES", "Key": "", "Default": null, "Extra": ""}
            ],
            "sample_data": [{"id": 1, "total": 9.5}]
        }))
        .unwrap();

        let details = response.into_details();
        let names: Vec<&str> = details.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "total"]);
        assert_eq!(details.columns()[0].key.as_deref(), Some("PRI"));
        assert_eq!(details.samples().len(), 1);
    }

    #[test]
    fn collection_metadata_tolerates_missing_samples() {
        let response: CollectionMetadataResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            response.into_details(),
            EntityDetails::Collection {
                sample_documents: vec![]
            }
        );
    }

    #[test]
    fn structured_sample_queries_are_rendered_to_text() {
        let response: QueriesResponse = serde_json::from_value(json!({
            "queries": [
                {"description": "a", "query": "SELECT 1;"},
                {"description": "b", "query": {"$match": {}}}
            ]
        }))
        .unwrap();

        let samples = response.into_sample_queries();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].query_text, "SELECT 1;");
        assert!(samples[1].query_text.contains("$match"));
    }

    #[test]
    fn nlp_request_uses_backend_selector() {
        let request = NlpQueryRequest {
            query: "total price by city".into(),
            database: EntityKind::Collection,
            table_or_collection: "reviews".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "total price by city",
                "database": "mongodb",
                "table_or_collection": "reviews"
            })
        );
    }

    #[test]
    fn error_detail_handles_string_and_list() {
        let plain: ErrorDetail =
            serde_json::from_value(json!({"detail": "Unsupported construct: join"})).unwrap();
        assert_eq!(plain.message(), "Unsupported construct: join");

        let list: ErrorDetail =
            serde_json::from_value(json!({"detail": [{"msg": "field required"}]})).unwrap();
        assert!(list.message().contains("field required"));
    }
}
