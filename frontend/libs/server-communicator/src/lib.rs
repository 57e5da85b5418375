//! Server Communicator
//!
//! HTTP plumbing between the autograder frontend and its backend. Requests go
//! through a `Transport` so the policy layer (`ServerCommunicator`) can be
//! exercised without a network.

pub mod config;
pub mod error;
pub mod http_client;
pub mod transport;

pub use config::CommunicatorConfig;
pub use error::{CommunicatorError, Result};
pub use http_client::ServerCommunicator;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
