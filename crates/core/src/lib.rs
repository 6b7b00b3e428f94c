#![warn(clippy::all, missing_docs)]

//! Core domain logic for the marina fleet manager.
//!
//! This crate hosts the boat records, the in-memory fleet store,
//! billing rules, configuration handling, and the flat-file
//! persistence layer used by the command-line frontend.

pub mod billing;
pub mod config;
pub mod error;
pub mod fleet;
pub mod models;
pub mod record;
pub mod report;
pub mod store;

pub use config::AppConfig;
pub use error::FleetError;
pub use fleet::{Fleet, DEFAULT_CAPACITY};
pub use models::{Boat, Location, Money};
pub use store::FleetFile;
