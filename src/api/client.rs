use super::PlentyApi;
use super::models::{
    AttributeEntry, AttributeList, AttributeValueName, LoginResponse, MarketSku, VariationEntries,
    VariationResponse,
};
use crate::error::{ApiError, AuthError};
use crate::utils::logging::log_error;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("pax-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PlentyClient {
    client: Client,
    pub base_url: String,
    pub auth_header: Option<String>,
}

impl PlentyClient {
    // Create base client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(PlentyClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_header.is_some()
    }

    /// POST the credentials to `/rest/login` and keep the returned bearer
    /// token for every following request.
    pub async fn login(&mut self, username: &str, password: &str) -> crate::Result<()> {
        let endpoint = "/rest/login";
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .request(Method::POST, url)
            .query(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        timeout_secs: DEFAULT_TIMEOUT_SECS,
                        endpoint: endpoint.to_string(),
                    }
                } else {
                    ApiError::Http {
                        status: 0,
                        endpoint: endpoint.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message,
            }
            .into());
        }

        let login: LoginResponse = response.json().await.map_err(|_| AuthError::TokenMissing)?;
        self.auth_header = Some(login.authorization_header());
        Ok(())
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(header) = &self.auth_header {
            request = request.header("Authorization", header);
        }

        request
    }

    /// One GET attempt; a transport error or an undecodable body is logged
    /// with the failing route and collapsed to `None`.
    pub async fn get_optional<T>(&self, route: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = match self.build_request(Method::GET, route).send().await {
            Ok(response) => response,
            Err(err) => {
                log_error(&format!("no response for request {}: {}", route, err));
                return None;
            }
        };

        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(_) => {
                log_error(&format!("no usable response for request {}", route));
                None
            }
        }
    }
}

#[async_trait]
impl PlentyApi for PlentyClient {
    async fn attributes(&self) -> Option<Vec<AttributeEntry>> {
        self.get_optional::<AttributeList>("/rest/items/attributes")
            .await
            .map(|list| list.entries)
    }

    async fn variation_page(&self, route: &str) -> Option<VariationResponse> {
        self.get_optional(route).await
    }

    async fn item_id_for_variation(&self, variation: u64) -> Option<u64> {
        let route = format!("/rest/items/variations?id={}", variation);
        let found: VariationEntries = self.get_optional(&route).await?;
        found.entries.first().map(|entry| entry.item_id)
    }

    async fn child_variations(&self, item: u64) -> Vec<u64> {
        let route = format!("/rest/items/{}/variations", item);
        match self.get_optional::<VariationEntries>(&route).await {
            Some(found) => found
                .entries
                .iter()
                .filter(|entry| !entry.is_main)
                .map(|entry| entry.id)
                .collect(),
            None => Vec::new(),
        }
    }

    async fn market_skus(&self, item: u64, variation: u64) -> Option<Vec<MarketSku>> {
        let route = format!("/rest/items/{}/variations/{}/variation_skus", item, variation);
        self.get_optional(&route).await
    }

    async fn attribute_value_name(&self, value_id: u64, lang: &str) -> Option<AttributeValueName> {
        let route = format!("/rest/items/attribute_values/{}/names/{}", value_id, lang);
        self.get_optional(&route).await
    }
}
