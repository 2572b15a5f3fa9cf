// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the user record held by the credential store and the
//! request and response bodies of the REST API. Wire types derive `ToSchema`
//! for OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Users**: The stored [`UserRecord`] and its public projections
//! - **Login**: Request and response bodies for `POST /login`

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// User Models
// =============================================================================

/// A user known to the service.
///
/// The password is stored in plaintext. Records are created once at startup
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique, case-sensitive login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Company the user belongs to.
    pub company: String,
    /// Whether the user is entitled to beta features.
    pub beta_access: bool,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        company: impl Into<String>,
        beta_access: bool,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            company: company.into(),
            beta_access,
        }
    }
}

/// Public view of a user, returned after a successful login.
///
/// Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserProfile {
    #[schema(example = "betauser")]
    pub username: String,
    #[schema(example = "acme global")]
    pub company: String,
    #[schema(example = true)]
    pub beta_access: bool,
}

impl From<&UserRecord> for UserProfile {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            company: user.company.clone(),
            beta_access: user.beta_access,
        }
    }
}

/// Username and password pair listed by `GET /users`.
///
/// This endpoint exists so demo clients can discover working logins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserCredentials {
    #[schema(example = "betauser")]
    pub username: String,
    #[schema(example = "betauser")]
    pub password: String,
}

impl From<&UserRecord> for UserCredentials {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
        }
    }
}

// =============================================================================
// Login Models
// =============================================================================

/// Request body for `POST /login`.
///
/// Both fields are required and must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "betauser")]
    pub username: String,
    #[schema(example = "betauser")]
    pub password: String,
}

impl LoginRequest {
    /// Whether both credentials were supplied.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Response body for a successful `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// HS256-signed JWT.
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// The authenticated user, without password.
    pub user: UserProfile,
}
