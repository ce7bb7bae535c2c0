//! Users API handlers.
//!
//! ```text
//! POST /users/ {"name":"Alice","email":"a@b.com"}
//! GET /users/
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::{User, UserViolations};
use crate::inbound::http::schemas::{UserSchema, ValidationErrorSchema};
use crate::inbound::http::state::HttpState;

/// Confirmation message returned with a created user.
pub const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Response body for `201 Created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserCreatedResponse {
    /// Confirmation message.
    #[schema(example = "User created successfully")]
    pub message: String,
    /// The user as stored.
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// Create user
///
/// Validates the body against the user schema and, on success, appends the
/// user to the store. Identical submissions create separate entries.
#[utoipa::path(
    post,
    path = "/users/",
    request_body(content = UserSchema, description = "User to create"),
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Payload failed validation", body = ValidationErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, UserViolations> {
    let user = User::validate(&payload).inspect_err(|violations| {
        debug!(count = violations.violations().len(), "user payload rejected");
    })?;
    state.users.append(user.clone()).await;
    info!("user created");
    Ok(HttpResponse::Created().json(UserCreatedResponse {
        message: USER_CREATED_MESSAGE.to_owned(),
        user,
    }))
}

/// List users
///
/// Returns every user created since the process started, in creation order.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users in creation order", body = [UserSchema])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<User>> {
    web::Json(state.users.list().await)
}
