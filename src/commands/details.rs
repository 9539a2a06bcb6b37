use anyhow::Result;
use std::io::Write;

use crate::api::{Book, BookstoreClient};
use crate::error::ApiError;

/// Handle the details command: show one book.
/// A 404 renders "Book not found."; other API failures render a generic
/// message. Neither is fatal.
pub async fn handle<W: Write>(client: &BookstoreClient, book_id: u64, output: &mut W) -> Result<()> {
    match client.book(book_id).await {
        Ok(book) => render_book(&book, output),
        Err(ApiError::NotFound { .. }) => {
            writeln!(output, "Book not found.")?;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("failed to load book {}: {}", book_id, e);
            writeln!(output, "Error loading book details. Please try again later.")?;
            Ok(())
        }
    }
}

fn render_book<W: Write>(book: &Book, output: &mut W) -> Result<()> {
    writeln!(output, "{}", book.title)?;
    writeln!(output, "by {}", book.author)?;
    writeln!(output, "${:.2}", book.price)?;
    writeln!(
        output,
        "{}",
        book.description.as_deref().unwrap_or("No description available.")
    )?;
    if let Some(image_url) = &book.image_url {
        writeln!(output, "Cover: {}", image_url)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_book_without_description() {
        let book = Book {
            id: 5,
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            description: None,
            price: 8.0,
            image_url: None,
            is_purchased: false,
        };

        let mut output = Vec::new();
        render_book(&book, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Emma"));
        assert!(text.contains("by Jane Austen"));
        assert!(text.contains("$8.00"));
        assert!(text.contains("No description available."));
    }
}
