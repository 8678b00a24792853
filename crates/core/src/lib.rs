//! Domain types, request schemas and form logic for the family shift calendar.
//!
//! Nothing in this crate touches the database or the network. The `db` crate
//! persists these types and the `api` crate serves them.

pub mod calendar;
pub mod errors;
pub mod forms;
pub mod models;
