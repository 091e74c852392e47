use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use common::model::config::{ExplorerConfig, DEFAULT_QUERY_SERVICE_URL};
use common::model::details::EntityDetails;
use common::model::entity::{EntityKind, EntityReference};
use common::model::query::{Construct, QueryItem, SampleQuery};
use common::requests::{
    CollectionList, CollectionMetadataResponse, NlpQueryRequest, NlpQueryResponse,
    QueriesResponse, TableList, TableMetadataResponse, UploadResponse,
};

use super::endpoints::Endpoints;
use super::error::ServiceError;

impl From<gloo_net::Error> for ServiceError {
    fn from(e: gloo_net::Error) -> Self {
        ServiceError::Network(e.to_string())
    }
}

fn js_error(value: JsValue) -> ServiceError {
    ServiceError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Talks to the Query Service over `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpQueryService {
    endpoints: Endpoints,
}

impl HttpQueryService {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            endpoints: Endpoints::new(&config.query_service_url)?,
        })
    }

    /// Lists table or collection names.
    pub async fn list(&self, kind: EntityKind) -> Result<Vec<String>, ServiceError> {
        let response = Request::get(&self.endpoints.catalog(kind)).send().await?;
        match kind {
            EntityKind::Table => Ok(read_json::<TableList>(response).await?.tables),
            EntityKind::Collection => {
                Ok(read_json::<CollectionList>(response).await?.collections)
            }
        }
    }

    /// Schema and rows for a table, document sample for a collection.
    pub async fn fetch_details(
        &self,
        entity: &EntityReference,
    ) -> Result<EntityDetails, ServiceError> {
        let response = Request::get(&self.endpoints.details(entity)).send().await?;
        match entity.kind {
            EntityKind::Table => Ok(read_json::<TableMetadataResponse>(response)
                .await?
                .into_details()),
            EntityKind::Collection => Ok(read_json::<CollectionMetadataResponse>(response)
                .await?
                .into_details()),
        }
    }

    pub async fn fetch_sample_queries(
        &self,
        entity: &EntityReference,
    ) -> Result<Vec<SampleQuery>, ServiceError> {
        let response = Request::get(&self.endpoints.sample_queries(entity))
            .send()
            .await?;
        Ok(read_json::<QueriesResponse>(response)
            .await?
            .into_sample_queries())
    }

    pub async fn fetch_construct_queries(
        &self,
        entity: &EntityReference,
        construct: Construct,
    ) -> Result<Vec<QueryItem>, ServiceError> {
        let response = Request::get(&self.endpoints.construct_queries(entity, construct))
            .send()
            .await?;
        Ok(read_json::<QueriesResponse>(response).await?.queries)
    }

    pub async fn translate(
        &self,
        request: &NlpQueryRequest,
    ) -> Result<NlpQueryResponse, ServiceError> {
        let response = Request::post(&self.endpoints.translate())
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }

    /// Posts the file as multipart form data and returns the confirmation
    /// message.
    pub async fn upload_dataset(&self, file: &File, kind: EntityKind) -> Result<String, ServiceError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        form.append_with_str("database", kind.database_tag())
            .map_err(js_error)?;

        let response = Request::post(&self.endpoints.upload())
            .body(form)?
            .send()
            .await?;
        Ok(read_json::<UploadResponse>(response).await?.message)
    }
}

impl Default for HttpQueryService {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::new(DEFAULT_QUERY_SERVICE_URL)
                .expect("default query service url is valid"),
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_status(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}
