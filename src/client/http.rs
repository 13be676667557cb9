//! reqwest implementation of [`PortApi`]

use async_trait::async_trait;
use log::debug;
#[cfg(feature = "lookup")]
use log::error;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use super::api::PortApi;
use super::{DEFAULT_BASE_URL, endpoints};
use crate::errors::{ClientError, Result};
#[cfg(feature = "lookup")]
use crate::models::LookupResponse;
use crate::models::{PortsResponse, SendTextRequest, ServerErrorBody, decode_body};

/// HTTP client bound to a bridge service base URL.
///
/// No request timeout is configured; a hung call resolves only when the
/// connection does.
#[derive(Debug, Clone)]
pub struct HttpPortApi {
    client: Client,
    base_url: Url,
}

impl HttpPortApi {
    /// Client for the default local bridge service
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a bridge service at another address
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        // Url::join drops the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url: base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// Turn a response into its JSON body, or a server error for non-2xx
    async fn read_body(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let details = ServerErrorBody::parse(&body);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: details.message,
                error: details.error,
            });
        }

        Ok(decode_body(&body))
    }
}

#[async_trait]
impl PortApi for HttpPortApi {
    async fn list_ports(&self) -> Result<Vec<String>> {
        let url = self.endpoint(endpoints::AVAILABLE_PORTS)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let body = Self::read_body(response).await?;
        debug!("Fetched data: {}", body);

        Ok(PortsResponse::from_value(body)?.into_ports())
    }

    async fn send_text(&self, request: &SendTextRequest) -> Result<Value> {
        let url = self.endpoint(endpoints::SEND_TEXT)?;
        debug!("POST {} (port: {})", url, request.port);

        let response = self.client.post(url).json(request).send().await?;
        Self::read_body(response).await
    }

    async fn release_port(&self) -> Result<Value> {
        let url = self.endpoint(endpoints::RELEASE_PORT)?;
        debug!("POST {}", url);

        let response = self.client.post(url).send().await?;
        Self::read_body(response).await
    }

    #[cfg(feature = "lookup")]
    async fn lookup_value(&self, input: &str) -> Result<LookupResponse> {
        let url = self.endpoint(endpoints::LOOKUP_VALUE)?;
        debug!("GET {} (input: {})", url, input);

        let response = self
            .client
            .get(url)
            .query(&[("input", input)])
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        serde_json::from_value(body).map_err(|e| {
            error!("Unexpected lookup response: {}", e);
            ClientError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let api = HttpPortApi::new().unwrap();
        assert_eq!(
            api.endpoint(endpoints::AVAILABLE_PORTS).unwrap().as_str(),
            "http://127.0.0.1:8000/edtwExampleAPI/get-available-ports/"
        );
        assert_eq!(
            api.endpoint(endpoints::SEND_TEXT).unwrap().as_str(),
            "http://127.0.0.1:8000/edtwExampleAPI/send_text/"
        );
        assert_eq!(
            api.endpoint(endpoints::RELEASE_PORT).unwrap().as_str(),
            "http://127.0.0.1:8000/edtwExampleAPI/release_port/"
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let api = HttpPortApi::with_base_url("http://localhost:9000/edtwExampleAPI").unwrap();
        assert_eq!(api.base_url().as_str(), "http://localhost:9000/edtwExampleAPI/");
        assert_eq!(
            api.endpoint(endpoints::SEND_TEXT).unwrap().as_str(),
            "http://localhost:9000/edtwExampleAPI/send_text/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpPortApi::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
