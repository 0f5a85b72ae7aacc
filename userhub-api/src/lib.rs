//! # UserHub API Server Library
//!
//! This library provides the HTTP layer for UserHub: health endpoints,
//! user CRUD over the in-memory store, a landing page and API docs.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: CORS and security headers
//! - `routes`: API route handlers
//! - `views`: HTML pages rendered with `maud`

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod views;
