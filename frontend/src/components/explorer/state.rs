//! Component state for the explorer.
//!
//! The session itself lives in the [`Controller`]; the component only adds
//! what is purely about input handling.

use crate::service::HttpQueryService;
use crate::session::{Controller, SessionError};

pub struct ExplorerComponent {
    /// Sole owner and writer of the session.
    pub controller: Controller,

    /// Replaced once `/api/config` answers.
    pub service: HttpQueryService,

    /// Current content of the question box.
    pub question: String,

    /// Last rejected command, shown next to the control that caused it.
    pub validation: Option<SessionError>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ExplorerComponent {
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
            service: HttpQueryService::default(),
            question: String::new(),
            validation: None,
            loaded: false,
        }
    }
}
