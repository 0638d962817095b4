//! API client layer for the backend search endpoints.

use crate::config::{AuthConfig, TuiConfig};
use async_trait::async_trait;
use omnisearch_core::{
    Category, EntityKind, Order, Product, SearchFilters, SearchResults, Supplier, User,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

const GLOBAL_SEARCH_PATH: &str = "/search/global";

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Undecodable response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

/// Search operations offered by the backend.
///
/// The global search is the only call the store issues; the per-entity calls
/// back the entity pages reached after navigation. Every failure is returned
/// to the caller.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn global_search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchResults, ApiClientError>;

    async fn search_products(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Product>, ApiClientError>;

    async fn search_orders(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Order>, ApiClientError>;

    async fn search_suppliers(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Supplier>, ApiClientError>;

    async fn search_categories(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Category>, ApiClientError>;

    async fn search_users(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<User>, ApiClientError>;
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderMap,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let auth_header = build_auth_headers(&config.auth)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(
        &self,
        path: &str,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let params = filters.query_params(query);
        tracing::debug!(%url, params = params.len(), "issuing search request");
        let response = self
            .client
            .get(url)
            .headers(self.auth_header.clone())
            .query(&params)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(serde_json::from_str::<T>(&text)?)
    }
}

#[async_trait]
impl SearchApi for RestClient {
    async fn global_search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchResults, ApiClientError> {
        self.get_json(GLOBAL_SEARCH_PATH, query, filters).await
    }

    async fn search_products(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Product>, ApiClientError> {
        self.get_json(EntityKind::Products.search_path(), query, filters)
            .await
    }

    async fn search_orders(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Order>, ApiClientError> {
        self.get_json(EntityKind::Orders.search_path(), query, filters)
            .await
    }

    async fn search_suppliers(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Supplier>, ApiClientError> {
        self.get_json(EntityKind::Suppliers.search_path(), query, filters)
            .await
    }

    async fn search_categories(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Category>, ApiClientError> {
        self.get_json(EntityKind::Categories.search_path(), query, filters)
            .await
    }

    async fn search_users(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<User>, ApiClientError> {
        self.get_json(EntityKind::Users.search_path(), query, filters)
            .await
    }
}

fn build_auth_headers(auth: &AuthConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &auth.api_key {
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    if let Some(jwt) = &auth.jwt {
        let value = format!("Bearer {}", jwt);
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_from_config() {
        let headers = build_auth_headers(&AuthConfig {
            api_key: Some("k-123".to_string()),
            jwt: Some("tok".to_string()),
        })
        .unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "k-123");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer tok");
    }

    #[test]
    fn test_invalid_header_value_rejected() {
        let result = build_auth_headers(&AuthConfig {
            api_key: Some("bad\nkey".to_string()),
            jwt: None,
        });
        assert!(matches!(result, Err(ApiClientError::Config(_))));
    }
}
