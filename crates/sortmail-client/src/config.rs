//! Client configuration and base-URL resolution.

use url::{Host, Url};

use crate::error::ClientError;

/// Fallback base URL for development builds only.
const DEV_DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    /// Read the runtime environment from `SORTMAIL_ENV`. Anything other
    /// than `production` is treated as development.
    pub fn from_env() -> Self {
        match std::env::var("SORTMAIL_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }
}

/// Transport of the context the client is embedded in. A host UI served
/// over HTTPS must not issue plaintext requests to non-loopback hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransport {
    Secure,
    Insecure,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    /// Resolve the backend base URL.
    ///
    /// An unset URL is a fatal configuration error in production; in
    /// development it falls back to the local backend. A plaintext URL in a
    /// secure context is upgraded to `https`, except for loopback hosts.
    pub fn resolve(
        raw: Option<&str>,
        env: RuntimeEnv,
        transport: PageTransport,
    ) -> Result<Self, ClientError> {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
            _ => match env {
                RuntimeEnv::Production => {
                    return Err(ClientError::Config(
                        "SORTMAIL_API_URL must be set in production".to_string(),
                    ));
                }
                RuntimeEnv::Development => DEV_DEFAULT_BASE_URL.to_string(),
            },
        };

        let mut base_url = Url::parse(&raw)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", raw, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported base URL scheme {:?}",
                base_url.scheme()
            )));
        }

        if transport == PageTransport::Secure
            && base_url.scheme() == "http"
            && !is_loopback(&base_url)
        {
            tracing::warn!(url = %base_url, "upgrading insecure base URL to https");
            base_url
                .set_scheme("https")
                .map_err(|_| ClientError::Config("could not upgrade base URL scheme".to_string()))?;
        }

        Ok(ClientConfig { base_url })
    }

    /// Resolve from `SORTMAIL_API_URL` and `SORTMAIL_ENV`. A native process
    /// has no secure page context, so no scheme upgrade applies.
    pub fn from_env() -> Result<Self, ClientError> {
        let raw = std::env::var("SORTMAIL_API_URL").ok();
        Self::resolve(raw.as_deref(), RuntimeEnv::from_env(), PageTransport::Insecure)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(addr)) => addr.is_loopback(),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_without_base_url_fails_fast() {
        let err = ClientConfig::resolve(None, RuntimeEnv::Production, PageTransport::Insecure)
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::resolve(Some("  "), RuntimeEnv::Production, PageTransport::Secure)
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_development_falls_back_to_local_backend() {
        let config =
            ClientConfig::resolve(None, RuntimeEnv::Development, PageTransport::Insecure)
                .expect("should resolve");
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_secure_context_upgrades_plaintext_url() {
        let config = ClientConfig::resolve(
            Some("http://api.sortmail.example"),
            RuntimeEnv::Production,
            PageTransport::Secure,
        )
        .expect("should resolve");
        assert_eq!(config.base_url.scheme(), "https");
    }

    #[test]
    fn test_secure_context_leaves_loopback_untouched() {
        for raw in ["http://localhost:8000", "http://127.0.0.1:8000", "http://[::1]:8000"] {
            let config =
                ClientConfig::resolve(Some(raw), RuntimeEnv::Development, PageTransport::Secure)
                    .expect("should resolve");
            assert_eq!(config.base_url.scheme(), "http", "{} was upgraded", raw);
        }
    }

    #[test]
    fn test_insecure_context_does_not_upgrade() {
        let config = ClientConfig::resolve(
            Some("http://api.sortmail.example"),
            RuntimeEnv::Production,
            PageTransport::Insecure,
        )
        .expect("should resolve");
        assert_eq!(config.base_url.scheme(), "http");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = ClientConfig::resolve(
            Some("ftp://api.sortmail.example"),
            RuntimeEnv::Development,
            PageTransport::Insecure,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
