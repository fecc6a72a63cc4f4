//! Table API client for the hosted backend.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::BackendConfig;

use super::{BackendError, SelectQuery};

/// `Accept` value that asks the table API for a single JSON object instead
/// of a one-element array.
const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Typed client for the hosted table API.
///
/// Cheap to clone; all clones share one connection pool. Every method is a
/// single remote call treated as atomic by the service - there is no retry,
/// no batching, and no client-side transaction.
#[derive(Clone)]
pub struct DataClient {
    inner: Arc<DataClientInner>,
}

struct DataClientInner {
    client: reqwest::Client,
    rest_url: String,
}

/// Error payload shape returned by the table API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl DataClient {
    /// Create a new table API client.
    ///
    /// # Panics
    ///
    /// Panics if the configured API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );
        headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(DataClientInner {
                client,
                rest_url: format!("{}/rest/v1", config.project_url.trim_end_matches('/')),
            }),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.inner.rest_url)
    }

    /// Fetch all rows matching a query, optionally projected to a column
    /// subset.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self, query), fields(table = table))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: SelectQuery,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.table_url(table))
            .query(&query.into_pairs())
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch exactly one row matching a query.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if zero (or more than one) rows
    /// match, carrying the remote message.
    #[instrument(skip(self, query), fields(table = table))]
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: SelectQuery,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .get(self.table_url(table))
            .header(ACCEPT, ACCEPT_SINGLE_OBJECT)
            .query(&query.into_pairs())
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Insert a row and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the row.
    #[instrument(skip(self, row), fields(table = table))]
    pub async fn insert<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .header(ACCEPT, ACCEPT_SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Update the row with the given id and return the new representation.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if no row has that id.
    #[instrument(skip(self, patch), fields(table = table, id = id))]
    pub async fn update_by_id<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        table: &str,
        id: i64,
        patch: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .request(Method::PATCH, self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .header(ACCEPT, ACCEPT_SINGLE_OBJECT)
            .json(patch)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Delete the row with the given id and return the deleted row.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if no row has that id.
    #[instrument(skip(self), fields(table = table, id = id))]
    pub async fn delete_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .header(ACCEPT, ACCEPT_SINGLE_OBJECT)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Count the rows of a table without fetching them.
    ///
    /// Issues a head request with `Prefer: count=exact` and parses the total
    /// from the `Content-Range` header (`0-24/3573` or `*/0`).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] if the header is missing or malformed.
    #[instrument(skip(self), fields(table = table))]
    pub async fn count(&self, table: &str) -> Result<u64, BackendError> {
        let response = self
            .inner
            .client
            .head(self.table_url(table))
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| BackendError::Parse("missing Content-Range header".to_string()))?;

        parse_count(range)
            .ok_or_else(|| BackendError::Parse(format!("malformed Content-Range: {range}")))
    }

    /// Decode a response body, or build an error from a failure status.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Map an error response to a [`BackendError`].
    ///
    /// The remote message string is preserved verbatim wherever the body
    /// carries one.
    async fn error_from(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(text);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BackendError::Unauthorized(message)
            }
            // The single-object Accept header turns "zero rows" into 406
            StatusCode::NOT_FOUND | StatusCode::NOT_ACCEPTABLE => BackendError::NotFound(message),
            _ => BackendError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Parse the total from a `Content-Range` value (`0-24/3573`, `*/0`).
fn parse_count(range: &str) -> Option<u64> {
    range.rsplit('/').next()?.parse().ok()
}
