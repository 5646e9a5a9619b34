use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::app_config::Credential;
use crate::engine::errors::InferenceError;

#[derive(Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// One HTTP round trip. No retries, no status interpretation.
pub trait Transport {
    fn post(
        &self,
        url: &str,
        credential: &Credential,
        request: &InferenceRequest<'_>,
    ) -> Result<RawResponse, InferenceError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::ConfigError {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        url: &str,
        credential: &Credential,
        request: &InferenceRequest<'_>,
    ) -> Result<RawResponse, InferenceError> {
        let connection_failed = |e: reqwest::Error| InferenceError::ConnectionFailed {
            endpoint: url.to_string(),
            reason: e.to_string(),
        };

        let resp = self
            .client
            .post(url)
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .map_err(connection_failed)?;

        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(connection_failed)?.to_vec();

        Ok(RawResponse { status, body })
    }
}
