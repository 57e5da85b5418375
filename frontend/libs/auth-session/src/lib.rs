//! Auth Session Library
//!
//! Bootstraps the client-side session from the backend's "who am I" endpoint
//! and ends it again on logout. The session itself lives in a `SessionStore`
//! that the UI layer owns and passes in.
//!
//! # Example
//!
//! ```rust,no_run
//! use auth_session::{AuthService, SessionStore};
//! use server_communicator::{CommunicatorConfig, ServerCommunicator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SessionStore::new();
//!     let communicator = ServerCommunicator::from_config(&CommunicatorConfig::from_env())?;
//!     let auth = AuthService::new(communicator, session.clone());
//!
//!     auth.load_user().await;
//!     if let Some(user) = session.current() {
//!         println!("Signed in as {}", user.full_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod service;
pub mod store;

pub use models::{CurrentUser, Role};
pub use service::{AuthService, LOGOUT_PATH, ME_PATH};
pub use store::SessionStore;
