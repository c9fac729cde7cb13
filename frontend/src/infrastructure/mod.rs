//! Infrastructure Layer
//!
//! Network access to the Hexlabs API.
//!
//! # Components
//!
//! - `api_url`: builds service URLs from the configured base template
//! - `fetch_error`: error type for user list fetches
//! - `http_client`: blocking HTTP client implementing [`UserSource`]
//! - `tls_client`: TLS connector setup

pub mod api_url;
pub mod fetch_error;
pub mod http_client;
pub mod tls_client;

pub use api_url::{Service, USERS_LIST_PATH, api_url};
pub use fetch_error::FetchError;
pub use http_client::HexlabsClient;

use crate::models::UserRecord;

/// Anything that can produce the raw (unfiltered) user list.
///
/// Implementations are called from worker threads.
pub trait UserSource: Send + Sync {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}
