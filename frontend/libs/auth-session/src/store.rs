//! Session context shared between the UI layer and `AuthService`
//!
//! Clones share the same slot. Writes are last-write-wins.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::models::CurrentUser;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<CurrentUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.user.read().clone()
    }

    pub fn set(&self, user: CurrentUser) {
        *self.user.write() = Some(user);
    }

    pub fn clear(&self) {
        *self.user.write() = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .read()
            .as_ref()
            .map(CurrentUser::is_admin)
            .unwrap_or(false)
    }
}
