//! Shared configuration library for docsort.
//!
//! Loads the default and per-collection sort orders from a settings file or
//! the environment, and bootstraps logging for the `docsort` binary.

#![allow(missing_docs)]

pub mod error;
pub mod logging;
pub mod models;

pub use error::ConfigLoadError;
pub use models::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, SortSettings, SortSettingsSource,
};
