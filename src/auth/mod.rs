// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Token Issuance Module
//!
//! This module mints the JWTs handed out by `POST /login`.
//!
//! ## Token Format
//!
//! - Algorithm: HS256 (symmetric secret from `JWT_SECRET`)
//! - Claims: `username`, `company`, `beta_access`, `exp`
//! - Lifetime: 24 hours from issuance
//!
//! Tokens are stateless. Nothing is stored server-side and this service never
//! verifies them; consumers check the signature and `exp` with the shared
//! secret.

pub mod claims;
pub mod error;
pub mod issuer;

pub use claims::Claims;
pub use error::IssueError;
pub use issuer::{IssuedToken, TokenIssuer, DEFAULT_TOKEN_TTL};
