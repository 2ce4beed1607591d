//! Transports carrying request documents to the authority.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::AuthorityError;
use crate::config::AuthorityConfig;

/// How a transport reaches the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// Real HTTP calls.
    Live,
    /// Answered in-process.
    Simulated,
}

impl TransportMode {
    /// Returns the label used in logs and health responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Simulated => "simulated",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exchanges one request document for the raw response body.
#[tonic::async_trait]
pub trait AuthorityTransport: Send + Sync {
    /// Sends `request` and returns the response body.
    async fn exchange(&self, request: &str) -> Result<Vec<u8>, AuthorityError>;

    /// Returns how this transport reaches the authority.
    fn mode(&self) -> TransportMode;
}

/// HTTP transport: POST with basic auth and an XML body.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    user: String,
    password: String,
}

impl HttpTransport {
    /// Creates a transport from `config`. The timeout covers the whole exchange.
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[tonic::async_trait]
impl AuthorityTransport for HttpTransport {
    async fn exchange(&self, request: &str) -> Result<Vec<u8>, AuthorityError> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.user, Some(&self.password))
            .header(CONTENT_TYPE, "application/xml")
            .body(request.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthorityError::UnexpectedStatus { status });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Live
    }
}
