//! Shared library for the event admin scripts and the health handler.
//!
//! This crate provides configuration, the database connection handle, the
//! Event model and the helpers each script builds its report from.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod http;
pub mod image;
pub mod logging;
pub mod media;
pub mod models;
pub mod report;
pub mod repository;
pub mod spreadsheet;

pub use catalog::{apply_categories, PhotographyPricing, PHOTOGRAPHY_EVENT};
pub use config::{load_env_file, Config, LEGACY_URI_VAR, PRIMARY_URI_VAR};
pub use db::Connection;
pub use error::{Error, Result};
pub use image::ImageSource;
pub use models::{Event, EventSummary, RegistrationCategory};
pub use repository::{EventFilter, EventRepository, InMemoryEventRepository, MongoEventRepository};
