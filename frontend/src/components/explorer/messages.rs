use common::model::config::ExplorerConfig;
use common::model::details::EntityDetails;
use common::model::entity::EntityKind;
use common::model::query::{Construct, QueryItem, SampleQuery};
use common::requests::NlpQueryResponse;

use crate::service::ServiceError;
use crate::session::{CatalogTicket, ConstructTicket, FetchTicket, TranslationTicket, UploadTicket};

#[derive(Clone)]
pub enum Msg {
    ConfigLoaded(ExplorerConfig),
    RefreshCatalog(EntityKind),
    CatalogLoaded(CatalogTicket, Result<Vec<String>, ServiceError>),
    SelectTable(String),
    SelectCollection(String),
    ClearSelection,
    MetadataLoaded(FetchTicket, Result<EntityDetails, ServiceError>),
    FetchSampleQueries,
    SampleQueriesLoaded(FetchTicket, Result<Vec<SampleQuery>, ServiceError>),
    FetchConstructQueries(Construct),
    ConstructQueriesLoaded(ConstructTicket, Result<Vec<QueryItem>, ServiceError>),
    UpdateQuestion(String),
    SubmitQuestion,
    TranslationLoaded(TranslationTicket, Result<NlpQueryResponse, ServiceError>),
    Upload(Option<web_sys::File>, EntityKind),
    UploadFinished(UploadTicket, Result<String, ServiceError>),
    DismissError,
    /// Carries the notice the timer was started for.
    DismissNotice(u64),
}
