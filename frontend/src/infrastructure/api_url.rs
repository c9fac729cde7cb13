//! Hexlabs API URL construction

/// Path of the list endpoint on the Users service
pub const USERS_LIST_PATH: &str = "/users/hexlabs";

/// Placeholder replaced by the service slug in the base URL template
pub const SERVICE_PLACEHOLDER: &str = "{service}";

/// Hexlabs gateway services this client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Users,
}

impl Service {
    /// Subdomain / path segment for this service
    pub fn slug(&self) -> &'static str {
        match self {
            Service::Users => "users",
        }
    }
}

/// Builds the absolute URL of `path` on `service`.
///
/// `base_template` may contain `{service}` (e.g.
/// `https://{service}.api.hexlabs.org`). Exactly one `/` separates the base
/// from the path, whatever slashes either side carries.
pub fn api_url(base_template: &str, service: Service, path: &str) -> String {
    let base = base_template.replace(SERVICE_PLACEHOLDER, service.slug());
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
