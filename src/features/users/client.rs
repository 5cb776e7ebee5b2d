//! Client helpers for the user endpoints. Authorization is left to the API; the
//! session token is not sent.

use crate::{
    api::{ApiClient, AppError},
    features::users::types::{UserPage, UserUpdate},
};

pub const DEFAULT_PAGE: u32 = 1;

/// `GET /users?page=N`.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or undecodable body.
pub async fn list_users(api: &ApiClient, page: u32) -> Result<UserPage, AppError> {
    api.get_json(&format!("/users?page={page}")).await
}

/// `PUT /users/{id}`.
///
/// # Errors
/// Returns an error on transport failure or non-2xx status.
pub async fn update_user(api: &ApiClient, id: u64, update: &UserUpdate) -> Result<(), AppError> {
    api.put_json(&format!("/users/{id}"), update).await
}

/// `DELETE /users/{id}`.
///
/// # Errors
/// Returns an error on transport failure or non-2xx status.
pub async fn delete_user(api: &ApiClient, id: u64) -> Result<(), AppError> {
    api.delete(&format!("/users/{id}")).await
}
