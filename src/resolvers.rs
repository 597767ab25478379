//! Behaviour behind every declared query and mutation.
//!
//! [`Resolvers`] holds a shared handle to the [`UserStore`] and is the only
//! thing the GraphQL roots call into. Queries return plain values; mutations
//! return a [`MutationEnvelope`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::model::{MutationEnvelope, NewUser, User};
use crate::storage::UserStore;

const TEST_REPLY: &str = "cool beans!";
const MSG_ADDED: &str = "user added";
const MSG_REMOVED: &str = "user removed";
const MSG_UPDATED: &str = "user updates";

#[derive(Debug, Clone)]
pub struct Resolvers {
    store: Arc<UserStore>,
}

impl Resolvers {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// All users in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.store.list_all()
    }

    pub fn test(&self) -> &'static str {
        TEST_REPLY
    }

    /// Reverse `word` by Unicode scalar value.
    pub fn repeat(&self, word: &str) -> String {
        word.chars().rev().collect()
    }

    /// Fails only when the id counter has run out.
    pub fn add_user(&self, input: NewUser) -> Result<MutationEnvelope> {
        debug!(?input, "addUser");
        let user = self.store.insert(
            input.name.unwrap_or_default(),
            input.email.unwrap_or_default(),
        )?;
        info!(id = %user.id, "user added");
        Ok(MutationEnvelope::ok_with_user(MSG_ADDED, user))
    }

    pub fn delete_user(&self, id: &str) -> MutationEnvelope {
        match self.store.remove_by_id(id) {
            Ok(user) => {
                info!(id = %user.id, "user removed");
                MutationEnvelope::ok(MSG_REMOVED)
            }
            Err(e) => {
                debug!(id, error = %e, "deleteUser: no such user");
                MutationEnvelope::not_found()
            }
        }
    }

    /// Return a copy of the user with its email replaced.
    ///
    /// The stored record is left as it is.
    pub fn update_user_email(&self, id: &str, email: String) -> MutationEnvelope {
        self.updated_copy(id, |user| user.with_email(email))
    }

    /// Return a copy of the user with its name replaced.
    ///
    /// The stored record is left as it is.
    pub fn update_user_name(&self, id: &str, name: String) -> MutationEnvelope {
        self.updated_copy(id, |user| user.with_name(name))
    }

    fn updated_copy(&self, id: &str, edit: impl FnOnce(User) -> User) -> MutationEnvelope {
        match self.store.find_by_id(id) {
            Some(user) => {
                let user = edit(user);
                debug!(?user, "user updates");
                MutationEnvelope::ok_with_user(MSG_UPDATED, user)
            }
            None => {
                debug!(id, "update: no such user");
                MutationEnvelope::not_found()
            }
        }
    }
}

impl Default for Resolvers {
    fn default() -> Self {
        Self::new(Arc::new(UserStore::default()))
    }
}
