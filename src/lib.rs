//! Syncs the first page of a Letterboxd diary into a JSON file, adding
//! TMDb poster URLs on the way.
//!
//! fetch diary → extract tiles → look up posters one by one → write JSON.

pub mod config;
pub mod error;
pub mod fetch;
pub mod letterboxd;
pub mod sync;
pub mod tmdb;

pub use config::{Config, FailurePolicy};
pub use error::{Result, SyncError};
pub use sync::{run, SyncReport};
