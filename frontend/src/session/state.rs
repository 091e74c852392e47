use common::model::details::EntityDetails;
use common::model::entity::EntityReference;
use common::model::query::{Construct, ConstructQuery, SampleQuery};
use common::model::translation::TranslationResult;

use super::error::SessionError;

/// Monotonic selection counter. Bumped on every selection change.
pub type Epoch = u64;

/// Lifecycle of one fetched part of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Absent,
    Loading,
    Present(T),
    Failed,
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Absent
    }
}

impl<T> Load<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            Load::Present(value) => Some(value),
            _ => None,
        }
    }
}

/// The complete state of one exploration session.
///
/// Only [`Controller`](super::Controller) mutates it; everyone else gets a
/// [`SessionView`](super::SessionView).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// At most one table or collection.
    pub selected: Option<EntityReference>,
    pub epoch: Epoch,
    pub details: Load<EntityDetails>,
    pub sample_queries: Load<Vec<SampleQuery>>,
    /// Construct of the most recent construct request, if any.
    pub construct: Option<Construct>,
    pub construct_queries: Load<Vec<ConstructQuery>>,
    pub translation: Load<TranslationResult>,
    pub last_error: Option<SessionError>,
    pub tables: Vec<String>,
    pub collections: Vec<String>,
    /// Confirmation message of the last successful upload.
    pub notice: Option<String>,
    pub uploads_in_flight: usize,
}

impl Session {
    /// Drops everything derived from the current selection.
    pub(super) fn clear_dependents(&mut self) {
        self.details = Load::Absent;
        self.sample_queries = Load::Absent;
        self.construct = None;
        self.construct_queries = Load::Absent;
        self.translation = Load::Absent;
        self.last_error = None;
    }
}
