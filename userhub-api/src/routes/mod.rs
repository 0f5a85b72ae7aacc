/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health, ping and info endpoints
/// - `users`: User CRUD endpoints
/// - `pages`: HTML landing page, favicon and fallback
/// - `docs`: OpenAPI document, Swagger UI and ReDoc pages

pub mod docs;
pub mod health;
pub mod pages;
pub mod users;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard success response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Always true
    pub success: bool,

    /// Success message
    pub message: String,

    /// Optional response data
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,

    /// Time of the response
    pub timestamp: DateTime<Utc>,
}

impl SuccessResponse {
    /// Creates a success response without data
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }

    /// Creates a success response carrying `data`
    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::new(message)
        }
    }
}
