// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::DEMO_JWT_SECRET;
use crate::store::CredentialStore;

/// Shared handler state. Everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CredentialStore>,
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(store: CredentialStore, issuer: TokenIssuer) -> Self {
        Self {
            store: Arc::new(store),
            issuer: Arc::new(issuer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            CredentialStore::demo(),
            TokenIssuer::new(DEMO_JWT_SECRET.as_bytes()),
        )
    }
}
