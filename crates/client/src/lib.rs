//! User directory client.
//!
//! Fetches the user list over HTTP and keeps the state a view renders:
//! either the loaded users or a fixed load-error message.

pub mod api;
pub mod config;
pub mod error;
pub mod view;

pub use api::{HttpUserApi, UserApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use view::{LoadState, UserList};

#[cfg(any(test, feature = "test-utils"))]
pub use api::MockUserApi;
