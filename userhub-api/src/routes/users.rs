/// User endpoints
///
/// This module provides CRUD endpoints over the in-memory user service.
/// Request bodies and query strings are validated here; the service only
/// ever sees well-formed input.
///
/// # Endpoints
///
/// - `GET /api/users/?skip=0&limit=100` - List users
/// - `POST /api/users/` - Create user
/// - `GET /api/users/:user_id` - Get user by ID
/// - `PUT /api/users/:user_id` - Partially update user
/// - `DELETE /api/users/:user_id` - Delete user
/// - `GET /api/users/username/:username` - Get user by username

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ErrorResponse},
    routes::SuccessResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use userhub_shared::{
    models::user::{NewUser, UserId, UserPatch, UserRecord},
    service::DEFAULT_LIST_LIMIT,
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Pagination query for listing users
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Number of users to skip
    #[serde(default)]
    pub skip: usize,

    /// Maximum number of users to return (1-1000)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "Limit must be between 1 and 1000"))]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

/// Create user request
#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Username (3-50 characters)
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional full name
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<String>,

    /// Active flag (defaults to true)
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Password (at least 8 characters, never stored or returned)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

fn default_active() -> bool {
    true
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            full_name: req.full_name,
            is_active: req.is_active,
            password: req.password,
        }
    }
}

/// Update user request
///
/// Omitted fields are left unchanged. `full_name: null` clears the name;
/// `null` for any other field is treated as omitted.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New username (3-50 characters)
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: Option<String>,

    /// New email address
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// New full name, or null to clear it
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<Option<String>>,

    /// New active flag
    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            full_name: req.full_name,
            is_active: req.is_active,
        }
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`)
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// User representation returned by every endpoint
///
/// Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// User ID
    pub id: UserId,

    /// Username
    pub username: String,

    /// Email address
    pub email: String,

    /// Full name
    pub full_name: Option<String>,

    /// Active flag
    pub is_active: bool,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            full_name: record.full_name,
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

fn user_not_found(user_id: UserId) -> ApiError {
    ApiError::NotFound(format!("User with ID {} not found", user_id))
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users", body = Vec<UserResponse>),
        (status = 422, description = "Malformed query or limit out of range", body = ErrorResponse),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let Query(params) = query?;
    params.validate()?;

    let users = state.users.list_users(params.skip, params.limit).await;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(("user_id" = u64, Path, description = "The ID of the user to retrieve")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(user_id) = path?;

    state
        .users
        .get_by_id(user_id)
        .await
        .map(|user| Json(user.into()))
        .ok_or_else(|| user_not_found(user_id))
}

/// Create a new user
///
/// # Errors
///
/// - `400 Bad Request`: Username already exists
/// - `422 Unprocessable Entity`: Malformed JSON or validation failed
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Username already exists", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = payload?;
    req.validate()?;

    let user = state.users.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Update an existing user
///
/// Username uniqueness is not re-checked on update.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(("user_id" = u64, Path, description = "The ID of the user to update")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(user_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    state
        .users
        .update(user_id, req.into())
        .await
        .map(|user| Json(user.into()))
        .ok_or_else(|| user_not_found(user_id))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(("user_id" = u64, Path, description = "The ID of the user to delete")),
    responses(
        (status = 200, description = "User deleted", body = SuccessResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Path(user_id) = path?;

    if !state.users.delete(user_id).await {
        return Err(user_not_found(user_id));
    }

    Ok(Json(SuccessResponse::new(format!(
        "User with ID {} successfully deleted",
        user_id
    ))))
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/api/users/username/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "The username to search for")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(username) = path?;

    state
        .users
        .get_by_username(&username)
        .await
        .map(|user| Json(user.into()))
        .ok_or_else(|| ApiError::NotFound(format!("User with username '{}' not found", username)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use userhub_shared::service::MAX_LIST_LIMIT;

    fn create_request(value: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_request_defaults_active() {
        let req = create_request(json!({
            "username": "alice",
            "email": "a@example.com",
            "password": "abcdefgh"
        }));

        assert!(req.is_active);
        assert!(req.full_name.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_short_fields() {
        let req = create_request(json!({
            "username": "al",
            "email": "not-an-email",
            "password": "short"
        }));

        let err = req.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_create_request_username_length_counts_chars() {
        let req = create_request(json!({
            "username": "é".repeat(50),
            "email": "a@example.com",
            "password": "abcdefgh"
        }));
        assert!(req.validate().is_ok());

        let req = create_request(json!({
            "username": "x".repeat(51),
            "email": "a@example.com",
            "password": "abcdefgh"
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateUserRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.full_name, None);

        let null: UpdateUserRequest = serde_json::from_value(json!({ "full_name": null })).unwrap();
        assert_eq!(null.full_name, Some(None));

        let set: UpdateUserRequest =
            serde_json::from_value(json!({ "full_name": "New Name" })).unwrap();
        assert_eq!(set.full_name, Some(Some("New Name".to_string())));
    }

    #[test]
    fn test_update_request_null_username_is_unset() {
        let req: UpdateUserRequest = serde_json::from_value(json!({ "username": null })).unwrap();
        assert!(req.username.is_none());
        assert!(UserPatch::from(req).is_empty());
    }

    #[test]
    fn test_update_request_full_name_too_long() {
        let req = UpdateUserRequest {
            full_name: Some(Some("x".repeat(101))),
            ..Default::default()
        };

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("full_name"));

        let cleared = UpdateUserRequest {
            full_name: Some(None),
            ..Default::default()
        };
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn test_list_query_limit_range() {
        let ok = ListUsersQuery {
            skip: 0,
            limit: MAX_LIST_LIMIT,
        };
        assert!(ok.validate().is_ok());

        let zero = ListUsersQuery { skip: 0, limit: 0 };
        assert!(zero.validate().is_err());

        let big = ListUsersQuery {
            skip: 0,
            limit: MAX_LIST_LIMIT + 1,
        };
        assert!(big.validate().is_err());
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let now = Utc::now();
        let response = UserResponse::from(UserRecord {
            id: 7,
            username: "alice".to_string(),
            email: "a@example.com".to_string(),
            full_name: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["id"], 7);
        assert!(value["full_name"].is_null());
    }
}
