//! Client wrappers for the sign-in and sign-up endpoints. Both send the raw
//! password in the JSON body; callers must not log the request.

use crate::{
    api::{ApiClient, AppError},
    features::auth::types::{CredentialsRequest, LoginResponse, RegisterResponse},
};
use secrecy::{ExposeSecret, SecretString};

/// `POST /login`. A 2xx response without a usable token is not an error here.
///
/// # Errors
/// Returns an error on transport failure or non-2xx status.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<LoginResponse, AppError> {
    let request = CredentialsRequest {
        email,
        password: password.expose_secret(),
    };
    let body = api.post_json_value("/login", &request).await?;
    Ok(LoginResponse::from_body(&body))
}

/// `POST /register`. A 2xx response without a usable id is not an error here.
///
/// # Errors
/// Returns an error on transport failure or non-2xx status.
pub async fn register(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<RegisterResponse, AppError> {
    let request = CredentialsRequest {
        email,
        password: password.expose_secret(),
    };
    let body = api.post_json_value("/register", &request).await?;
    Ok(RegisterResponse::from_body(&body))
}
