pub mod config;
pub mod details;
pub mod entity;
pub mod query;
pub mod translation;
