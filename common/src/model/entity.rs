use serde::{Deserialize, Serialize};
use std::fmt;

/// The two mutually exclusive kinds of entity a session can select.
///
/// Tables live in the relational store, collections in the document store.
/// On the wire the kind doubles as the backend selector (`"mysql"` /
/// `"mongodb"`) used by the translation and upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "mysql")]
    Table,
    #[serde(rename = "mongodb")]
    Collection,
}

impl EntityKind {
    /// Backend selector sent in request bodies and form fields.
    pub fn database_tag(self) -> &'static str {
        match self {
            EntityKind::Table => "mysql",
            EntityKind::Collection => "mongodb",
        }
    }

    /// First path segment of the explore endpoints for this kind.
    pub fn path_prefix(self) -> &'static str {
        match self {
            EntityKind::Table => "mysql",
            EntityKind::Collection => "mongo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Table => "table",
            EntityKind::Collection => "collection",
        }
    }
}

/// A selected table or collection, identified by kind and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    pub kind: EntityKind,
    pub name: String,
}

impl EntityReference {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Table,
            name: name.into(),
        }
    }

    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Collection,
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind.label(), self.name)
    }
}
