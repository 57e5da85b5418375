//! Autograder Frontend Client
//!
//! Client-side pieces of the grading UI: session bootstrap against the
//! backend and display formatting for submission timestamps.

pub mod logging;

pub use auth_session::{AuthService, CurrentUser, Role, SessionStore, LOGOUT_PATH, ME_PATH};
pub use logging::init_logging;
pub use server_communicator::{
    CommunicatorConfig, CommunicatorError, HttpResponse, ReqwestTransport, ServerCommunicator,
    Transport,
};
pub use timestamp_format::{readable_timestamp, readable_timestamp_in, TimestampError};

/// Build an `AuthService` for the configured backend, sharing `session`
pub fn connect(
    config: &CommunicatorConfig,
    session: SessionStore,
) -> Result<AuthService, CommunicatorError> {
    let communicator = ServerCommunicator::from_config(config)?;
    tracing::info!(base_url = %config.base_url, "Connected session client");
    Ok(AuthService::new(communicator, session))
}
