use std::time::Duration;

use reqwest::StatusCode;

use super::types::{Book, ErrorBody, OrderRequest, OrderResponse};
use crate::error::ApiError;

/// Client for the bookstore API.
pub struct BookstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl BookstoreClient {
    /// Create a client for the API at `base_url`. A trailing slash on the
    /// base URL is accepted and ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(BookstoreClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/books/featured
    pub async fn featured_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/api/books/featured", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response, "Featured books").await?;
        Ok(response.json().await?)
    }

    /// GET /api/books/{id}
    pub async fn book(&self, book_id: u64) -> Result<Book, ApiError> {
        let url = format!("{}/api/books/{}", self.base_url, book_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: format!("Book {}", book_id),
            });
        }

        let response = check_status(response, "Book").await?;
        Ok(response.json().await?)
    }

    /// POST /api/orders
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, ApiError> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self.client.post(&url).json(order).send().await?;
        let response = check_status(response, "Order").await?;
        Ok(response.json().await?)
    }
}

/// Map a non-success response to ApiError::Status, surfacing the API's
/// `detail` message when it sent one.
async fn check_status(
    response: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::debug!("{} request failed with status {}", what, status);

    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("{} request failed", what),
    };

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}
