// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims carried by issued tokens.

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;

/// Claims embedded in every token issued by `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Login name of the authenticated user
    pub username: String,

    /// Company the user belongs to
    pub company: String,

    /// Beta entitlement flag
    pub beta_access: bool,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `user` expiring at `expires_at`.
    pub fn for_user(user: &UserRecord, expires_at: i64) -> Self {
        Self {
            username: user.username.clone(),
            company: user.company.clone(),
            beta_access: user.beta_access,
            exp: expires_at,
        }
    }
}
