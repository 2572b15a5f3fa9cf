// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory credential store.
//!
//! The user list is fixed at process start and never written afterwards, so
//! the store is shared behind an `Arc` without a lock.

use crate::models::{UserCredentials, UserRecord};

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: Vec<UserRecord>,
}

impl CredentialStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The built-in demo users.
    pub fn demo() -> Self {
        Self::new(vec![
            UserRecord::new("betauser", "betauser", "acme global", true),
            UserRecord::new("normaluser", "normaluser", "generic co", false),
        ])
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Find the first user whose username and password both match exactly.
    ///
    /// An unknown username and a wrong password are indistinguishable.
    pub fn find_user(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
    }

    /// Username/password pairs for every user, in store order.
    pub fn list_credentials(&self) -> Vec<UserCredentials> {
        self.users.iter().map(UserCredentials::from).collect()
    }
}
