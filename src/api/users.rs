// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User listing endpoint.

use axum::{extract::State, Json};

use crate::{models::UserCredentials, state::AppState};

/// List every demo user together with its password.
///
/// Unauthenticated. Exists so demo clients can discover working logins.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users with their credentials", body = [UserCredentials]),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserCredentials>> {
    Json(state.store.list_credentials())
}
