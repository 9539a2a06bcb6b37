mod client;
mod types;

pub use client::BookstoreClient;
pub use types::{Book, OrderRequest, UserInfo};
