use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// A book resource as returned by the bookstore API.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub is_purchased: bool,
}

/// Customer details collected at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of POST /api/orders: the customer plus the cart lines verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub user: UserInfo,
    pub items: Vec<CartLine>,
}

/// A confirmed order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub id: u64,
    #[allow(dead_code)]
    pub user_id: u64,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Error body the API sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
