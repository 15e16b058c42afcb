use std::fmt;
use std::time::Duration;
use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use reqwest::Client;
use url::Url;

/// Relays control requests to a peer node.
#[derive(Clone)]
pub(crate) struct Forwarder {
    client: Client,
    control_port: u16,
}

/// A peer answer, passed back to the caller untouched.
#[derive(Debug)]
pub(crate) struct Relayed {
    pub(crate) status: StatusCode,
    pub(crate) content_type: Option<HeaderValue>,
    pub(crate) body: Bytes,
}

#[derive(Debug)]
pub(crate) enum ForwardError {
    InvalidTarget(String),
    Timeout(String),
    Network(String),
}

impl fmt::Display for ForwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardError::InvalidTarget(msg) => write!(f, "Invalid forwarding target: {}", msg),
            ForwardError::Timeout(msg) => write!(f, "Forwarding timed out: {}", msg),
            ForwardError::Network(msg) => write!(f, "Forwarding failed: {}", msg),
        }
    }
}

impl std::error::Error for ForwardError {}

impl From<reqwest::Error> for ForwardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ForwardError::Timeout(err.to_string())
        } else {
            ForwardError::Network(err.to_string())
        }
    }
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

impl Forwarder {
    pub(crate) fn new(timeout: Duration, control_port: u16) -> Result<Self, ForwardError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForwardError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Forwarder { client, control_port })
    }

    /// Peer URL for `path`. A bare address gets the control port.
    pub(crate) fn target_url(&self, instance: &str, path: &str, params: &[(&str, String)]) -> Result<Url, ForwardError> {
        let mut url = Url::parse(&format!("http://{}/", instance))
            .map_err(|e| ForwardError::InvalidTarget(format!("{}: {}", instance, e)))?;

        if url.host_str().map_or(true, str::is_empty) {
            return Err(ForwardError::InvalidTarget(instance.to_string()));
        }

        if url.port().is_none() && !instance.ends_with(":80") {
            url.set_port(Some(self.control_port))
                .map_err(|_| ForwardError::InvalidTarget(instance.to_string()))?;
        }

        url.set_path(path);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    pub(crate) async fn get(&self, instance: &str, path: &str, params: &[(&str, String)]) -> Result<Relayed, ForwardError> {
        let url = self.target_url(instance, path, params)?;
        debug!("Forwarding to {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        Ok(Relayed { status, content_type, body })
    }
}
