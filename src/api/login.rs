// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login endpoint.

use axum::{body::Bytes, extract::State, Json};

use crate::{
    error::ApiError,
    models::{LoginRequest, LoginResponse},
    state::AppState,
};

/// Authenticate a user and return a signed JWT.
///
/// The body is parsed as JSON whatever its `Content-Type`. An unknown
/// username and a wrong password both yield the same 401.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Malformed or incomplete request body"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Token could not be generated"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let request: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed login body");
        ApiError::InvalidRequest
    })?;

    if !request.is_complete() {
        return Err(ApiError::InvalidRequest);
    }

    let user = state
        .store
        .find_user(&request.username, &request.password)
        .ok_or_else(|| {
            tracing::debug!(username = %request.username, "Login rejected");
            ApiError::InvalidCredentials
        })?;

    let issued = state.issuer.issue(user).map_err(|e| {
        tracing::error!(error = %e, username = %user.username, "Token signing failed");
        ApiError::from(e)
    })?;

    tracing::info!(
        username = %user.username,
        expires_at = issued.expires_at,
        "Issued login token"
    );

    Ok(Json(LoginResponse {
        token: issued.token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::TokenIssuer, store::CredentialStore};
    use chrono::TimeDelta;

    fn request(username: &str, password: &str) -> Bytes {
        let body = serde_json::to_vec(&LoginRequest {
            username: username.into(),
            password: password.into(),
        })
        .unwrap();
        Bytes::from(body)
    }

    #[tokio::test]
    async fn login_success_returns_profile() {
        let Json(response) = login(State(AppState::default()), request("betauser", "betauser"))
            .await
            .expect("login succeeds");

        assert!(!response.token.is_empty());
        assert_eq!(response.user.username, "betauser");
        assert_eq!(response.user.company, "acme global");
        assert!(response.user.beta_access);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let err = login(State(AppState::default()), request("betauser", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let err = login(State(AppState::default()), request("ghost", "betauser"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn empty_field_is_invalid_request() {
        let err = login(State(AppState::default()), request("betauser", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest));
    }

    #[tokio::test]
    async fn missing_field_is_invalid_request() {
        let body = Bytes::from_static(br#"{"username":"betauser"}"#);
        let err = login(State(AppState::default()), body).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest));
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_request() {
        let body = Bytes::from_static(b"username=betauser&password=betauser");
        let err = login(State(AppState::default()), body).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest));
    }

    #[tokio::test]
    async fn signing_failure_is_issuance_error() {
        let issuer = TokenIssuer::new(b"secret").with_ttl(TimeDelta::MAX);
        let state = AppState::new(CredentialStore::demo(), issuer);

        let err = login(State(state), request("betauser", "betauser"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::TokenIssuance(_)));
    }
}
