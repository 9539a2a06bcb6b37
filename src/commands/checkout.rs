use anyhow::Result;
use std::io::Write;

use crate::api::{BookstoreClient, OrderRequest, UserInfo};
use crate::cart::CartStore;
use crate::storage::CartStorage;

/// Handle the checkout command: submit the cart as an order.
/// On success the cart is cleared; on failure it is left untouched and the
/// API's error detail is shown.
pub async fn handle<S: CartStorage, W: Write>(
    client: &BookstoreClient,
    store: &mut CartStore<S>,
    user: UserInfo,
    output: &mut W,
) -> Result<()> {
    if store.is_empty() {
        writeln!(output, "Your cart is empty. Nothing to check out.")?;
        return Ok(());
    }

    let request = OrderRequest {
        user,
        items: store.state().lines().to_vec(),
    };

    match client.place_order(&request).await {
        Ok(order) => {
            store.clear()?;
            writeln!(output, "Order placed successfully!")?;
            writeln!(output, "Your order #{} has been confirmed.", order.id)?;
            writeln!(output, "Total amount: ${:.2}", order.total_amount)?;
            writeln!(
                output,
                "Status: {} ({})",
                order.status,
                order.created_at.format("%Y-%m-%d %H:%M UTC")
            )?;
            writeln!(output, "Thank you for your purchase!")?;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("order submission failed: {}", e);
            writeln!(output, "Error: {}", e)?;
            Ok(())
        }
    }
}
