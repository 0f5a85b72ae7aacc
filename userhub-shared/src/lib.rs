//! # UserHub Shared Library
//!
//! This crate contains the user domain used by the UserHub API server: the
//! record types, the in-memory store and the service that enforces the
//! create/update/delete rules.
//!
//! ## Module Organization
//!
//! - `models`: User records and their inputs
//! - `store`: In-memory record store with ID assignment
//! - `service`: Lock-protected user operations

pub mod models;
pub mod service;
pub mod store;

/// Current version of the UserHub shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
