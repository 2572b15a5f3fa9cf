// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HS256 token issuer.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::{Claims, IssueError};
use crate::models::UserRecord;

/// Lifetime of an issued token (24 hours).
pub const DEFAULT_TOKEN_TTL: TimeDelta = TimeDelta::hours(24);

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS serialization
    pub token: String,
    /// Expiration timestamp (Unix seconds)
    pub expires_at: i64,
}

/// Signs claims for authenticated users with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: TimeDelta,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("key", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer signing with `secret` and the default 24h lifetime.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Mint a token for `user`, expiring `ttl` from now.
    pub fn issue(&self, user: &UserRecord) -> Result<IssuedToken, IssueError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or(IssueError::ExpiryOutOfRange)?
            .timestamp();

        let claims = Claims::for_user(user, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;

        Ok(IssuedToken { token, expires_at })
    }
}
