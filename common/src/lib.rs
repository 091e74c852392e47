//! Types shared by the explorer frontend and its host.
//!
//! `model` holds the domain vocabulary (entities, details, queries), `requests`
//! holds the request/response envelopes of the Query Service wire contract.

pub mod model;
pub mod requests;
