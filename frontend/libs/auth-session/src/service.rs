//! Session bootstrap and logout against the backend

use serde::de::IgnoredAny;
use server_communicator::{ReqwestTransport, ServerCommunicator, Transport};
use tracing::{debug, info, instrument};

use crate::models::CurrentUser;
use crate::store::SessionStore;

/// "Who am I" endpoint
pub const ME_PATH: &str = "/api/me";
pub const LOGOUT_PATH: &str = "/auth/logout";

pub struct AuthService<T: Transport = ReqwestTransport> {
    communicator: ServerCommunicator<T>,
    session: SessionStore,
}

impl<T: Transport> AuthService<T> {
    pub fn new(communicator: ServerCommunicator<T>, session: SessionStore) -> Self {
        Self {
            communicator,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Fetch the authenticated user, if any
    ///
    /// Not being logged in and failing to reach the backend both come back as
    /// `None`.
    #[instrument(skip(self))]
    pub async fn me_get(&self) -> Option<CurrentUser> {
        self.communicator
            .get_request_guaranteed::<Option<CurrentUser>>(ME_PATH, None)
            .await
    }

    /// Refresh the session store from the backend
    ///
    /// A missing user leaves the store as it was; a transient failure must not
    /// log anyone out.
    #[instrument(skip(self))]
    pub async fn load_user(&self) {
        match self.me_get().await {
            Some(user) => {
                info!(net_id = %user.net_id, role = ?user.role, "Loaded authenticated user");
                self.session.set(user);
            }
            None => debug!("No authenticated user returned, session left unchanged"),
        }
    }

    /// Tell the backend to end the session
    ///
    /// Failures are ignored. The local session store is not cleared here.
    #[instrument(skip(self))]
    pub async fn logout_post(&self) {
        // Non-raising POST never returns Err; the communicator logs failures
        let _ = self
            .communicator
            .post_request::<(), IgnoredAny>(LOGOUT_PATH, None, false)
            .await;
    }
}
