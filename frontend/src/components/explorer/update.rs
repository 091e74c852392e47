//! Update function for the explorer component.
//!
//! Elm-style: every `Msg` is either a user command, which goes through the
//! controller and may spawn a Query Service request, or a completion, which
//! is handed back to the controller together with the ticket it was issued
//! with. The controller decides whether a completion still applies.

use common::model::entity::EntityKind;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::service::{HttpQueryService, ServiceError};
use crate::session::{CatalogTicket, FetchTicket, Outcome, SessionError};

use super::messages::Msg;
use super::state::ExplorerComponent;

const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Central update function for the component.
///
/// Returns `true` whenever the session or the local input state changed.
pub fn update(component: &mut ExplorerComponent, ctx: &Context<ExplorerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ConfigLoaded(config) => {
            match HttpQueryService::new(&config) {
                Ok(service) => component.service = service,
                Err(e) => error!(format!("Ignoring explorer config: {}", e)),
            }
            ctx.link().send_message_batch(vec![
                Msg::RefreshCatalog(EntityKind::Table),
                Msg::RefreshCatalog(EntityKind::Collection),
            ]);
            false
        }
        Msg::RefreshCatalog(kind) => {
            let ticket = component.controller.refresh_catalog(kind);
            spawn_catalog_refresh(component, ctx, ticket);
            false
        }
        Msg::CatalogLoaded(ticket, result) => {
            let failure = failure_of(&result);
            let outcome = component.controller.complete_catalog(&ticket, result);
            report("catalog", outcome, failure)
        }
        Msg::SelectTable(name) => {
            let result = component.controller.select_table(&name);
            on_selection(component, ctx, result)
        }
        Msg::SelectCollection(name) => {
            let result = component.controller.select_collection(&name);
            on_selection(component, ctx, result)
        }
        Msg::ClearSelection => {
            component.controller.clear_selection();
            component.validation = None;
            true
        }
        Msg::MetadataLoaded(ticket, result) => {
            let failure = failure_of(&result);
            let outcome = component.controller.complete_metadata(&ticket, result);
            report("metadata", outcome, failure)
        }
        Msg::FetchSampleQueries => match component.controller.request_sample_queries() {
            Ok(ticket) => {
                component.validation = None;
                let service = component.service.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = service.fetch_sample_queries(&ticket.entity).await;
                    link.send_message(Msg::SampleQueriesLoaded(ticket, result));
                });
                true
            }
            Err(e) => reject(component, e),
        },
        Msg::SampleQueriesLoaded(ticket, result) => {
            let failure = failure_of(&result);
            let outcome = component.controller.complete_sample_queries(&ticket, result);
            report("sample queries", outcome, failure)
        }
        Msg::FetchConstructQueries(construct) => {
            match component.controller.request_construct_queries(construct) {
                Ok(ticket) => {
                    component.validation = None;
                    let service = component.service.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = service
                            .fetch_construct_queries(&ticket.fetch.entity, ticket.construct)
                            .await;
                        link.send_message(Msg::ConstructQueriesLoaded(ticket, result));
                    });
                    true
                }
                Err(e) => reject(component, e),
            }
        }
        Msg::ConstructQueriesLoaded(ticket, result) => {
            let failure = failure_of(&result);
            let outcome = component.controller.complete_construct_queries(&ticket, result);
            report("construct queries", outcome, failure)
        }
        Msg::UpdateQuestion(question) => {
            component.question = question;
            if matches!(component.validation, Some(SessionError::EmptyQuery)) {
                component.validation = None;
            }
            true
        }
        Msg::SubmitQuestion => match component.controller.request_translation(&component.question) {
            Ok(ticket) => {
                component.validation = None;
                let service = component.service.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = service.translate(&ticket.request).await;
                    link.send_message(Msg::TranslationLoaded(ticket, result));
                });
                true
            }
            Err(e) => reject(component, e),
        },
        Msg::TranslationLoaded(ticket, result) => {
            let failure = failure_of(&result);
            let outcome = component.controller.complete_translation(&ticket, result);
            report("translation", outcome, failure)
        }
        Msg::Upload(file, kind) => {
            let Some(file) = file else {
                return reject(component, SessionError::NoFileSelected);
            };
            let ticket = match component.controller.begin_upload(&file.name(), kind) {
                Ok(ticket) => ticket,
                Err(e) => return reject(component, e),
            };
            component.validation = None;

            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = service.upload_dataset(&file, ticket.kind).await;
                link.send_message(Msg::UploadFinished(ticket, result));
            });
            true
        }
        Msg::UploadFinished(ticket, result) => {
            if let Some(cause) = failure_of(&result) {
                error!(format!("Uploading {} failed: {}", ticket.file_name, cause));
            }
            if let Some(follow_up) = component.controller.complete_upload(&ticket, result) {
                spawn_catalog_refresh(component, ctx, follow_up.refresh);
                let notice = follow_up.notice;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                    link.send_message(Msg::DismissNotice(notice));
                });
            }
            true
        }
        Msg::DismissError => {
            component.controller.dismiss_error();
            true
        }
        Msg::DismissNotice(notice) => component.controller.dismiss_notice(notice),
    }
}

/// Starts the metadata fetch that every successful selection triggers.
fn on_selection(
    component: &mut ExplorerComponent,
    ctx: &Context<ExplorerComponent>,
    result: Result<FetchTicket, SessionError>,
) -> bool {
    match result {
        Ok(ticket) => {
            component.validation = None;
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = service.fetch_details(&ticket.entity).await;
                link.send_message(Msg::MetadataLoaded(ticket, result));
            });
            true
        }
        Err(e) => reject(component, e),
    }
}

fn spawn_catalog_refresh(
    component: &ExplorerComponent,
    ctx: &Context<ExplorerComponent>,
    ticket: CatalogTicket,
) {
    let service = component.service.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = service.list(ticket.kind).await;
        link.send_message(Msg::CatalogLoaded(ticket, result));
    });
}

fn reject(component: &mut ExplorerComponent, e: SessionError) -> bool {
    log!(format!("Rejected command: {}", e));
    component.validation = Some(e);
    true
}

fn failure_of<T>(result: &Result<T, ServiceError>) -> Option<String> {
    result.as_ref().err().map(ToString::to_string)
}

/// Logs how a completion ended. Stale completions leave the session
/// untouched, so there is nothing to re-render.
fn report(what: &str, outcome: Outcome, failure: Option<String>) -> bool {
    match outcome {
        Outcome::Applied => {
            if let Some(cause) = failure {
                error!(format!("Fetching {} failed: {}", what, cause));
            }
            true
        }
        Outcome::StaleSelection => {
            log!(format!("Dropped {} for a previous selection", what));
            false
        }
        Outcome::Superseded => {
            log!(format!("Dropped {} superseded by a newer request", what));
            false
        }
    }
}
