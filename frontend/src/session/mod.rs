//! Exploration session controller.
//!
//! The controller owns one [`Session`] and is its only writer. Every command
//! that needs the Query Service returns a ticket describing the request; the
//! caller performs the request and hands the outcome back through the matching
//! `complete_*` method, which compares the ticket against the live selection
//! epoch (and the slot's newest request) before touching state.
//!
//! Nothing in here performs I/O, so the whole state machine is testable
//! without a browser.

mod controller;
mod error;
mod state;
mod view_model;

pub use controller::{
    CatalogTicket, ConstructTicket, Controller, FetchTicket, Outcome, TranslationTicket,
    UploadTicket,
};
pub use error::SessionError;
pub use view_model::{LoadStatus, SessionPhase, SessionView};
