//! Render-ready projection of a [`Session`].
//!
//! [`project`] is a pure function: the presentation layer only ever sees a
//! [`SessionView`], never the slots and sequence bookkeeping behind it.

use common::model::details::EntityDetails;
use common::model::entity::{EntityKind, EntityReference};
use common::model::query::{Construct, ConstructQuery, SampleQuery};
use common::model::translation::TranslationResult;

use super::error::SessionError;
use super::state::{Load, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Absent,
    Loading,
    Present,
    Failed,
}

impl<T> From<&Load<T>> for LoadStatus {
    fn from(load: &Load<T>) -> Self {
        match load {
            Load::Absent => LoadStatus::Absent,
            Load::Loading => LoadStatus::Loading,
            Load::Present(_) => LoadStatus::Present,
            Load::Failed => LoadStatus::Failed,
        }
    }
}

/// Session-level state: nothing selected, selected while details are not
/// available (loading or failed), selected with details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Pending,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub selected: Option<&'a EntityReference>,
    pub details: Option<&'a EntityDetails>,
    pub details_status: LoadStatus,
    pub sample_queries: &'a [SampleQuery],
    pub samples_status: LoadStatus,
    pub construct: Option<Construct>,
    pub construct_queries: &'a [ConstructQuery],
    pub constructs_status: LoadStatus,
    pub translation: Option<&'a TranslationResult>,
    pub translation_status: LoadStatus,
    pub last_error: Option<&'a SessionError>,
    pub tables: &'a [String],
    pub collections: &'a [String],
    pub notice: Option<&'a str>,
    pub uploading: bool,
}

pub fn project(session: &Session) -> SessionView<'_> {
    // Dependents are meaningless without a selection, whatever the slots say.
    let selected = session.selected.as_ref();
    let has_selection = selected.is_some();

    SessionView {
        selected,
        details: session.details.present().filter(|_| has_selection),
        details_status: (&session.details).into(),
        sample_queries: session
            .sample_queries
            .present()
            .filter(|_| has_selection)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        samples_status: (&session.sample_queries).into(),
        construct: session.construct.filter(|_| has_selection),
        construct_queries: session
            .construct_queries
            .present()
            .filter(|_| has_selection)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        constructs_status: (&session.construct_queries).into(),
        translation: session.translation.present().filter(|_| has_selection),
        translation_status: (&session.translation).into(),
        last_error: session.last_error.as_ref(),
        tables: &session.tables,
        collections: &session.collections,
        notice: session.notice.as_deref(),
        uploading: session.uploads_in_flight > 0,
    }
}

impl SessionView<'_> {
    pub fn phase(&self) -> SessionPhase {
        match (self.selected, self.details) {
            (None, _) => SessionPhase::Empty,
            (Some(_), None) => SessionPhase::Pending,
            (Some(_), Some(_)) => SessionPhase::Ready,
        }
    }

    pub fn is_table_selected(&self, name: &str) -> bool {
        self.is_selected(EntityKind::Table, name)
    }

    pub fn is_collection_selected(&self, name: &str) -> bool {
        self.is_selected(EntityKind::Collection, name)
    }

    fn is_selected(&self, kind: EntityKind, name: &str) -> bool {
        self.selected
            .is_some_and(|entity| entity.kind == kind && entity.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_session_projects_to_empty_view() {
        let session = Session::default();
        let view = project(&session);
        assert_eq!(view.phase(), SessionPhase::Empty);
        assert!(view.details.is_none());
        assert!(view.sample_queries.is_empty());
        assert!(view.construct_queries.is_empty());
        assert!(!view.uploading);
    }

    #[test]
    fn dependents_are_hidden_without_a_selection() {
        let session = Session {
            details: Load::Present(EntityDetails::Collection {
                sample_documents: vec![json!({"a": 1})],
            }),
            sample_queries: Load::Present(vec![SampleQuery {
                description: "d".into(),
                query_text: "q".into(),
            }]),
            ..Session::default()
        };

        let view = project(&session);
        assert!(view.details.is_none());
        assert!(view.sample_queries.is_empty());
    }

    #[test]
    fn phase_follows_details() {
        let mut session = Session {
            selected: Some(EntityReference::table("orders")),
            details: Load::Loading,
            ..Session::default()
        };
        assert_eq!(project(&session).phase(), SessionPhase::Pending);

        session.details = Load::Present(EntityDetails::Table {
            columns: vec![],
            sample_rows: vec![],
        });
        let view = project(&session);
        assert_eq!(view.phase(), SessionPhase::Ready);
        assert!(view.is_table_selected("orders"));
        assert!(!view.is_collection_selected("orders"));
    }

    #[test]
    fn projection_does_not_touch_the_session() {
        let session = Session {
            selected: Some(EntityReference::collection("reviews")),
            notice: Some("Dataset uploaded successfully!".into()),
            ..Session::default()
        };
        let before = session.clone();
        let _ = project(&session);
        assert_eq!(session, before);
    }
}
