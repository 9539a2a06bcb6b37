use anyhow::Result;
use std::io::Write;

use crate::api::{Book, BookstoreClient};
use crate::cart::{order_total, CartStore};
use crate::storage::CartStorage;

/// Handle `cart`: render the cart with book details and the total.
/// A line whose book fetch fails is skipped; an empty cart skips the
/// fetches entirely.
pub async fn show<S: CartStorage, W: Write>(
    client: &BookstoreClient,
    store: &CartStore<S>,
    output: &mut W,
) -> Result<()> {
    if store.is_empty() {
        writeln!(output, "Your cart is empty.")?;
        return Ok(());
    }

    let mut detailed = Vec::new();
    for line in store.state().lines() {
        match client.book(line.book_id).await {
            Ok(book) => detailed.push((book, line.quantity)),
            Err(e) => {
                tracing::warn!("skipping cart line for book {}: {}", line.book_id, e);
            }
        }
    }

    render_cart(&detailed, output)
}

/// Handle `cart add`.
pub fn add<S: CartStorage, W: Write>(
    store: &mut CartStore<S>,
    book_id: u64,
    quantity: u32,
    output: &mut W,
) -> Result<()> {
    store.add(book_id, quantity)?;
    writeln!(output, "Book added to cart.")?;
    print_summary(store.item_count(), output)
}

/// Handle `cart remove`.
pub fn remove<S: CartStorage, W: Write>(
    store: &mut CartStore<S>,
    book_id: u64,
    output: &mut W,
) -> Result<()> {
    store.remove(book_id)?;
    writeln!(output, "Book removed from cart.")?;
    print_summary(store.item_count(), output)
}

/// Handle `cart set`.
pub fn set<S: CartStorage, W: Write>(
    store: &mut CartStore<S>,
    book_id: u64,
    quantity: i64,
    output: &mut W,
) -> Result<()> {
    store.update(book_id, quantity)?;
    print_summary(store.item_count(), output)
}

/// The cart summary line (the former badge). Suppressed when the cart
/// holds nothing.
pub fn print_summary<W: Write>(item_count: u32, output: &mut W) -> Result<()> {
    if item_count > 0 {
        writeln!(output, "Cart: {} item(s)", item_count)?;
    }
    Ok(())
}

fn render_cart<W: Write>(detailed: &[(Book, u32)], output: &mut W) -> Result<()> {
    for (book, quantity) in detailed {
        writeln!(
            output,
            "{} by {}: ${:.2} x {} = ${:.2}",
            book.title,
            book.author,
            book.price,
            quantity,
            book.price * f64::from(*quantity)
        )?;
    }

    let priced: Vec<(f64, u32)> = detailed.iter().map(|(b, q)| (b.price, *q)).collect();
    writeln!(output, "Total: ${:.2}", order_total(&priced))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, price: f64) -> Book {
        Book {
            id: 1,
            title: title.to_string(),
            author: "Author".to_string(),
            description: None,
            price,
            image_url: None,
            is_purchased: false,
        }
    }

    #[test]
    fn test_render_cart_total() {
        let detailed = vec![(book("A", 10.0), 2), (book("B", 5.0), 3)];

        let mut output = Vec::new();
        render_cart(&detailed, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("$10.00 x 2 = $20.00"));
        assert!(text.contains("Total: $35.00"));
    }

    #[test]
    fn test_summary_hidden_when_empty() {
        let mut output = Vec::new();
        print_summary(0, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_summary_shows_item_count() {
        let mut output = Vec::new();
        print_summary(3, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Cart: 3 item(s)\n");
    }
}
