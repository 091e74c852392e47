use common::model::details::EntityDetails;
use common::model::entity::{EntityKind, EntityReference};
use common::model::query::{Construct, ConstructQuery, QueryItem, SampleQuery};
use common::requests::{NlpQueryRequest, NlpQueryResponse};

use crate::service::ServiceError;

use super::error::SessionError;
use super::state::{Epoch, Load, Session};
use super::view_model::{project, SessionView};

/// A request issued on behalf of the selection that was current at `epoch`.
///
/// A selection command returns the metadata ticket for the new entity, which
/// doubles as the selection-changed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub entity: EntityReference,
    pub epoch: Epoch,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructTicket {
    pub fetch: FetchTicket,
    pub construct: Construct,
}

#[derive(Debug, Clone)]
pub struct TranslationTicket {
    pub fetch: FetchTicket,
    /// Body to post; kind and entity name come from the selection.
    pub request: NlpQueryRequest,
}

/// Catalog refreshes do not depend on the selection, only on their kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTicket {
    pub kind: EntityKind,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub file_name: String,
    pub kind: EntityKind,
}

/// What happened to a completion handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The selection changed after the request was issued.
    StaleSelection,
    /// A newer request for the same slot was issued meanwhile.
    Superseded,
}

/// Sequence numbers of the newest in-flight request per slot.
#[derive(Debug, Default)]
struct InFlight {
    details: Option<u64>,
    samples: Option<u64>,
    constructs: Option<u64>,
    translation: Option<u64>,
    tables: Option<u64>,
    collections: Option<u64>,
}

impl InFlight {
    fn clear_selection_slots(&mut self) {
        self.details = None;
        self.samples = None;
        self.constructs = None;
        self.translation = None;
    }
}

/// Follow-ups of a successful upload: refresh the catalog of the uploaded
/// kind, and later dismiss the notice identified by `notice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFollowUp {
    pub refresh: CatalogTicket,
    pub notice: u64,
}

#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    in_flight: InFlight,
    next_seq: u64,
    /// Sequence number of the notice currently shown.
    notice: Option<u64>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> SessionView<'_> {
        project(&self.session)
    }

    pub fn select_table(&mut self, name: &str) -> Result<FetchTicket, SessionError> {
        self.select(EntityKind::Table, name)
    }

    pub fn select_collection(&mut self, name: &str) -> Result<FetchTicket, SessionError> {
        self.select(EntityKind::Collection, name)
    }

    /// Replaces the selection, whatever its kind, and returns the metadata
    /// ticket for the new entity. Selecting the current entity again is not
    /// short-circuited. The name is kept exactly as given, since surrounding
    /// whitespace can be part of a collection name.
    fn select(&mut self, kind: EntityKind, name: &str) -> Result<FetchTicket, SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::InvalidName);
        }

        let entity = EntityReference {
            kind,
            name: name.to_string(),
        };
        self.bump_epoch(Some(entity.clone()));

        let seq = self.issue();
        self.in_flight.details = Some(seq);
        self.session.details = Load::Loading;

        Ok(FetchTicket {
            entity,
            epoch: self.session.epoch,
            seq,
        })
    }

    pub fn clear_selection(&mut self) {
        self.bump_epoch(None);
    }

    fn bump_epoch(&mut self, selected: Option<EntityReference>) {
        self.session.epoch += 1;
        self.session.selected = selected;
        self.session.clear_dependents();
        self.in_flight.clear_selection_slots();
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn ticket_for_selection(&mut self) -> Result<FetchTicket, SessionError> {
        let entity = self
            .session
            .selected
            .clone()
            .ok_or(SessionError::NoEntitySelected)?;
        Ok(FetchTicket {
            entity,
            epoch: self.session.epoch,
            seq: self.issue(),
        })
    }

    fn check(&self, ticket: &FetchTicket, newest: Option<u64>) -> Outcome {
        if ticket.epoch != self.session.epoch {
            Outcome::StaleSelection
        } else if newest != Some(ticket.seq) {
            Outcome::Superseded
        } else {
            Outcome::Applied
        }
    }

    pub fn complete_metadata(
        &mut self,
        ticket: &FetchTicket,
        result: Result<EntityDetails, ServiceError>,
    ) -> Outcome {
        let outcome = self.check(ticket, self.in_flight.details);
        if outcome != Outcome::Applied {
            return outcome;
        }
        self.in_flight.details = None;

        match result {
            Ok(details) => self.session.details = Load::Present(details),
            Err(e) => {
                self.session.details = Load::Failed;
                self.session.last_error = Some(SessionError::MetadataFetchFailed {
                    entity: ticket.entity.clone(),
                    cause: e.to_string(),
                });
            }
        }
        outcome
    }

    /// Clears the current list and issues a fresh request; no caching.
    pub fn request_sample_queries(&mut self) -> Result<FetchTicket, SessionError> {
        let ticket = self.ticket_for_selection()?;
        self.in_flight.samples = Some(ticket.seq);
        self.session.sample_queries = Load::Loading;
        Ok(ticket)
    }

    pub fn complete_sample_queries(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<SampleQuery>, ServiceError>,
    ) -> Outcome {
        let outcome = self.check(ticket, self.in_flight.samples);
        if outcome != Outcome::Applied {
            return outcome;
        }
        self.in_flight.samples = None;

        match result {
            Ok(queries) => self.session.sample_queries = Load::Present(queries),
            Err(e) => {
                self.session.sample_queries = Load::Failed;
                self.session.last_error = Some(SessionError::SampleFetchFailed {
                    entity: ticket.entity.clone(),
                    cause: e.to_string(),
                });
            }
        }
        outcome
    }

    /// Switching construct replaces the previous results rather than
    /// appending to them.
    pub fn request_construct_queries(
        &mut self,
        construct: Construct,
    ) -> Result<ConstructTicket, SessionError> {
        let fetch = self.ticket_for_selection()?;
        self.in_flight.constructs = Some(fetch.seq);
        self.session.construct = Some(construct);
        self.session.construct_queries = Load::Loading;
        Ok(ConstructTicket { fetch, construct })
    }

    pub fn complete_construct_queries(
        &mut self,
        ticket: &ConstructTicket,
        result: Result<Vec<QueryItem>, ServiceError>,
    ) -> Outcome {
        let outcome = self.check(&ticket.fetch, self.in_flight.constructs);
        if outcome != Outcome::Applied {
            return outcome;
        }
        self.in_flight.constructs = None;

        match result {
            Ok(items) => {
                let queries = items
                    .into_iter()
                    .map(|item| ConstructQuery::from_item(ticket.construct, item))
                    .collect();
                self.session.construct_queries = Load::Present(queries);
            }
            Err(e) => {
                self.session.construct_queries = Load::Failed;
                self.session.last_error = Some(SessionError::ConstructFetchFailed {
                    entity: ticket.fetch.entity.clone(),
                    construct: ticket.construct,
                    cause: e.to_string(),
                });
            }
        }
        outcome
    }

    /// Blank text is rejected before the selection is even looked at.
    pub fn request_translation(&mut self, input: &str) -> Result<TranslationTicket, SessionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyQuery);
        }
        let fetch = self.ticket_for_selection()?;
        self.in_flight.translation = Some(fetch.seq);
        self.session.translation = Load::Loading;

        let request = NlpQueryRequest {
            query: input.to_string(),
            database: fetch.entity.kind,
            table_or_collection: fetch.entity.name.clone(),
        };
        Ok(TranslationTicket { fetch, request })
    }

    pub fn complete_translation(
        &mut self,
        ticket: &TranslationTicket,
        result: Result<NlpQueryResponse, ServiceError>,
    ) -> Outcome {
        let outcome = self.check(&ticket.fetch, self.in_flight.translation);
        if outcome != Outcome::Applied {
            return outcome;
        }
        self.in_flight.translation = None;

        match result {
            Ok(response) => {
                self.session.translation =
                    Load::Present(response.into_translation(ticket.request.query.clone()));
            }
            Err(e) => {
                self.session.translation = Load::Failed;
                self.session.last_error = Some(SessionError::TranslationFailed {
                    entity: ticket.fetch.entity.clone(),
                    input: ticket.request.query.clone(),
                    cause: e.to_string(),
                });
            }
        }
        outcome
    }

    pub fn refresh_catalog(&mut self, kind: EntityKind) -> CatalogTicket {
        let seq = self.issue();
        match kind {
            EntityKind::Table => self.in_flight.tables = Some(seq),
            EntityKind::Collection => self.in_flight.collections = Some(seq),
        }
        CatalogTicket { kind, seq }
    }

    /// A failed refresh keeps the previously listed names.
    pub fn complete_catalog(
        &mut self,
        ticket: &CatalogTicket,
        result: Result<Vec<String>, ServiceError>,
    ) -> Outcome {
        let newest = match ticket.kind {
            EntityKind::Table => &mut self.in_flight.tables,
            EntityKind::Collection => &mut self.in_flight.collections,
        };
        if *newest != Some(ticket.seq) {
            return Outcome::Superseded;
        }
        *newest = None;

        match result {
            Ok(names) => match ticket.kind {
                EntityKind::Table => self.session.tables = names,
                EntityKind::Collection => self.session.collections = names,
            },
            Err(e) => {
                self.session.last_error = Some(SessionError::CatalogFetchFailed {
                    kind: ticket.kind,
                    cause: e.to_string(),
                });
            }
        }
        Outcome::Applied
    }

    pub fn begin_upload(
        &mut self,
        file_name: &str,
        kind: EntityKind,
    ) -> Result<UploadTicket, SessionError> {
        if file_name.trim().is_empty() {
            return Err(SessionError::NoFileSelected);
        }
        self.session.uploads_in_flight += 1;
        self.session.notice = None;
        self.notice = None;
        Ok(UploadTicket {
            file_name: file_name.to_string(),
            kind,
        })
    }

    pub fn complete_upload(
        &mut self,
        ticket: &UploadTicket,
        result: Result<String, ServiceError>,
    ) -> Option<UploadFollowUp> {
        self.session.uploads_in_flight = self.session.uploads_in_flight.saturating_sub(1);
        match result {
            Ok(message) => {
                let notice = self.issue();
                self.notice = Some(notice);
                self.session.notice = Some(message);
                Some(UploadFollowUp {
                    refresh: self.refresh_catalog(ticket.kind),
                    notice,
                })
            }
            Err(e) => {
                self.session.last_error = Some(SessionError::UploadFailed {
                    file_name: ticket.file_name.clone(),
                    kind: ticket.kind,
                    cause: e.to_string(),
                });
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.session.last_error = None;
    }

    /// Clears the notice only if it is still the one identified by `notice`.
    pub fn dismiss_notice(&mut self, notice: u64) -> bool {
        if self.notice != Some(notice) {
            return false;
        }
        self.notice = None;
        self.session.notice = None;
        true
    }
}
