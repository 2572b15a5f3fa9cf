// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance errors.

/// Failure while minting a token.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// The claims could not be encoded or signed.
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// The expiry timestamp fell outside the representable range.
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
}
