use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A precomputed example query for the selected entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleQuery {
    pub description: String,
    #[serde(rename = "query")]
    pub query_text: String,
}

/// The query shapes a user can ask representative queries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construct {
    GroupBy,
    OrderBy,
    Having,
    Join,
}

impl Construct {
    pub const ALL: [Construct; 4] = [
        Construct::GroupBy,
        Construct::OrderBy,
        Construct::Having,
        Construct::Join,
    ];

    /// Path segment understood by the construct endpoints.
    pub fn tag(self) -> &'static str {
        match self {
            Construct::GroupBy => "group_by",
            Construct::OrderBy => "order_by",
            Construct::Having => "having",
            Construct::Join => "join",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Construct::GroupBy => "Group By",
            Construct::OrderBy => "Order By",
            Construct::Having => "Having",
            Construct::Join => "Join",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A query is either plain text (SQL, shell-style find) or a structured
/// document such as an aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryRepresentation {
    Text(String),
    Structured(Value),
}

impl QueryRepresentation {
    /// Text rendering: text as-is, structured queries pretty printed.
    pub fn render(&self) -> String {
        match self {
            QueryRepresentation::Text(text) => text.clone(),
            QueryRepresentation::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// One item of a construct response before it is tagged with its construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryItem {
    pub description: String,
    pub query: QueryRepresentation,
}

/// A query demonstrating one construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructQuery {
    pub construct: Construct,
    pub description: String,
    pub query: QueryRepresentation,
}

impl ConstructQuery {
    pub fn from_item(construct: Construct, item: QueryItem) -> Self {
        Self {
            construct,
            description: item.description,
            query: item.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn construct_tags_match_wire_names() {
        let tags: Vec<&str> = Construct::ALL.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, ["group_by", "order_by", "having", "join"]);
        let parsed: Construct = serde_json::from_value(json!("order_by")).unwrap();
        assert_eq!(parsed, Construct::OrderBy);
    }

    #[test]
    fn query_representation_accepts_text_and_documents() {
        let text: QueryItem = serde_json::from_value(json!({
            "description": "Count of id by city",
            "query": "SELECT city, COUNT(id) FROM orders GROUP BY city;"
        }))
        .unwrap();
        assert!(matches!(text.query, QueryRepresentation::Text(_)));

        let structured: QueryItem = serde_json::from_value(json!({
            "description": "Group by stars",
            "query": [{"$group": {"_id": "$stars", "count": {"$sum": 1}}}]
        }))
        .unwrap();
        match &structured.query {
            QueryRepresentation::Structured(value) => assert!(value.is_array()),
            other => panic!("expected structured query, got {other:?}"),
        }
        assert!(structured.query.render().contains("\"$group\""));
    }
}
