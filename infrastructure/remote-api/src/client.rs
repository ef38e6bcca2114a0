use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

pub const DEFAULT_BASE_URL: &str = "https://fianly-test-api-3c5f0ad60049.herokuapp.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for the demo users and countries API.
#[derive(Clone)]
pub struct RemoteApiClient {
    pub client: Client,
    pub base_url: String,
}

impl RemoteApiClient {
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn countries_url(&self) -> String {
        format!("{}/countries", self.base_url)
    }

    pub fn country_url(&self, id: &str) -> String {
        format!("{}/countries/{}", self.base_url, id)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Sends the request and decodes a JSON body from a 2xx answer.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| GatewayError::Unreachable)?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|_| GatewayError::InvalidPayload)
    }
}
