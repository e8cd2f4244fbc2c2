//! Domain types for the lead dashboard.
//!
//! Holds the internal [`lead::Lead`] representation, the external record
//! shape returned by the record store, and the field mapper that translates
//! between the two. Nothing in this crate performs I/O.

pub mod dashboard;
pub mod error;
pub mod lead;
pub mod mapping;
