//! Client for the hosted record store that holds the lead table.
//!
//! [`client::RecordStoreClient`] issues authenticated calls against one
//! table; [`leads::LeadRepo`] builds the list/detail/update operations on top
//! of it using the field mapper from `leadflow_core`.

pub mod client;
pub mod config;
pub mod error;
pub mod leads;

pub use client::{CallOptions, RecordStoreClient};
pub use config::{ConfigError, RecordStoreConfig};
pub use error::RecordStoreError;
pub use leads::LeadRepo;
