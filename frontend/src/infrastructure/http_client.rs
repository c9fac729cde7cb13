//! HTTP client for the Hexlabs Users service.

use super::tls_client::build_connector;
use super::{FetchError, Service, USERS_LIST_PATH, UserSource, api_url};
use crate::config::AppConfig;
use crate::models::UserRecord;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

const USER_AGENT: &str = concat!("hexlabs-users/", env!("CARGO_PKG_VERSION"));

/// Blocking client bound to the users list endpoint.
///
/// No timeout is set and requests are never retried.
pub struct HexlabsClient {
    http: Client,
    users_url: String,
}

impl HexlabsClient {
    /// Creates a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let tls = build_connector(config.accept_invalid_certs)?;

        let http = Client::builder()
            .use_preconfigured_tls(tls)
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            users_url: api_url(&config.api_base_url, Service::Users, USERS_LIST_PATH),
        })
    }

    /// URL requested by [`UserSource::fetch_users`]
    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

impl UserSource for HexlabsClient {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .http
            .get(&self.users_url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: Some(status.as_u16()),
                message: status.canonical_reason().unwrap_or("Unexpected status").to_string(),
            });
        }

        let body = response.text()?;
        parse_users(&body)
    }
}

/// Decodes a users list body. Anything but a JSON array of records fails.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_targets_users_endpoint() {
        let config = AppConfig {
            api_base_url: "http://localhost:8003".to_string(),
            ..AppConfig::default()
        };
        let client = HexlabsClient::new(&config).unwrap();
        assert_eq!(client.users_url(), "http://localhost:8003/users/hexlabs");
    }

    #[test]
    fn test_parse_users_array() {
        let body = r#"[
            {"id":"1","name":{"first":"Bob"},"phoneNumber":"4705550000"},
            {"id":"2","name":{"first":"Alice"}}
        ]"#;

        let users = parse_users(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name.first, "Alice");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_users("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_users(r#"{"users":[]}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_users("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_unreachable_host_is_http_error() {
        let config = AppConfig {
            // Port 9 (discard) on localhost is expected to refuse connections.
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        let client = HexlabsClient::new(&config).unwrap();

        match client.fetch_users() {
            Err(FetchError::Http { status: None, .. }) => {}
            other => panic!("Expected transport error, got {:?}", other),
        }
    }
}
