use super::FetchError;
use native_tls::TlsConnector;

/// Builds the TLS connector handed to the HTTP client.
///
/// `accept_invalid_certs` disables certificate and hostname validation; only
/// meant for local gateways running with self-signed certificates.
pub fn build_connector(accept_invalid_certs: bool) -> Result<TlsConnector, FetchError> {
    let connector = TlsConnector::builder()
        .danger_accept_invalid_certs(accept_invalid_certs)
        .danger_accept_invalid_hostnames(accept_invalid_certs)
        .build()?;
    Ok(connector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_connector() {
        assert!(build_connector(false).is_ok());
        assert!(build_connector(true).is_ok());
    }
}
