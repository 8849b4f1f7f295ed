//! Connection configuration.

use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::address::FtpAddress;

/// Default connect/read/write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User name sent when no credentials are configured.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Password sent with the anonymous user.
pub const ANONYMOUS_PASSWORD: &str = "anonymous@";

/// Settings shared by every connection an [`FtpLister`](crate::FtpLister) opens.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ConnectionConfig {
    /// Login user name.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub username: Option<String>,

    /// Login password.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub password: Option<String>,

    /// Timeout for connecting and for each read or write.
    #[builder(default = "DEFAULT_TIMEOUT")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl ConnectionConfig {
    /// Create a new connection config builder.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }

    /// Pick the login for `address`.
    ///
    /// Configured credentials win when both are non-empty, then credentials
    /// embedded in the address, then anonymous login.
    pub fn credentials_for(&self, address: &FtpAddress) -> (String, String) {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                return (user.clone(), pass.clone());
            }
            _ => {}
        }

        match &address.username {
            Some(user) if !user.is_empty() => (
                user.clone(),
                address.password.clone().unwrap_or_default(),
            ),
            _ => (ANONYMOUS_USER.to_string(), ANONYMOUS_PASSWORD.to_string()),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(text: &str) -> FtpAddress {
        FtpAddress::parse(text).unwrap()
    }

    #[test]
    fn test_builder() {
        let config = ConnectionConfig::builder()
            .username("alice")
            .password("secret")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_configured_credentials_win() {
        let config = ConnectionConfig::builder()
            .username("alice")
            .password("secret")
            .build()
            .unwrap();
        let creds = config.credentials_for(&address("ftp://bob:pw@host/"));
        assert_eq!(creds, ("alice".to_string(), "secret".to_string()));
    }

    #[test]
    fn test_partial_configured_credentials_are_ignored() {
        let config = ConnectionConfig::builder().username("alice").build().unwrap();
        let creds = config.credentials_for(&address("ftp://bob:pw@host/"));
        assert_eq!(creds, ("bob".to_string(), "pw".to_string()));
    }

    #[test]
    fn test_anonymous_fallback() {
        let creds = ConnectionConfig::default().credentials_for(&address("ftp://host/"));
        assert_eq!(
            creds,
            (ANONYMOUS_USER.to_string(), ANONYMOUS_PASSWORD.to_string())
        );
    }
}
