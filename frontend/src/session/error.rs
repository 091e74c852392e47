use common::model::entity::{EntityKind, EntityReference};
use common::model::query::Construct;
use thiserror::Error;

/// Everything that can go wrong in a session.
///
/// The first four variants are validation failures returned synchronously
/// before any request is issued. The rest are recorded in
/// [`Session::last_error`](super::Session) when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("entity name must not be empty")]
    InvalidName,

    #[error("select a table or collection first")]
    NoEntitySelected,

    #[error("type a question first")]
    EmptyQuery,

    #[error("select a file first")]
    NoFileSelected,

    #[error("could not load details for {entity}: {cause}")]
    MetadataFetchFailed {
        entity: EntityReference,
        cause: String,
    },

    #[error("could not load sample queries for {entity}: {cause}")]
    SampleFetchFailed {
        entity: EntityReference,
        cause: String,
    },

    #[error("could not load {construct} queries for {entity}: {cause}")]
    ConstructFetchFailed {
        entity: EntityReference,
        construct: Construct,
        cause: String,
    },

    #[error("could not translate \"{input}\" for {entity}: {cause}")]
    TranslationFailed {
        entity: EntityReference,
        input: String,
        cause: String,
    },

    #[error("could not list {}s: {cause}", kind.label())]
    CatalogFetchFailed { kind: EntityKind, cause: String },

    #[error("upload of `{file_name}` failed: {cause}")]
    UploadFailed {
        file_name: String,
        kind: EntityKind,
        cause: String,
    },
}
