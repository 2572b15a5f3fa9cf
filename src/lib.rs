// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hackers Auth - Demo Authentication Service
//!
//! This crate validates username/password pairs against a fixed in-memory
//! user list and issues HS256-signed JWTs carrying identity and entitlement
//! claims.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token claims and issuance
//! - `store` - In-memory credential store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;
