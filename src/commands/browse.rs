use anyhow::Result;
use std::io::Write;

use crate::api::{Book, BookstoreClient};

/// Handle the browse command: list featured books.
/// An API failure replaces the listing with an error message; it is not fatal.
pub async fn handle<W: Write>(client: &BookstoreClient, output: &mut W) -> Result<()> {
    match client.featured_books().await {
        Ok(books) => render_books(&books, output),
        Err(e) => {
            tracing::warn!("failed to load featured books: {}", e);
            writeln!(output, "Error loading books. Please try again later.")?;
            Ok(())
        }
    }
}

fn render_books<W: Write>(books: &[Book], output: &mut W) -> Result<()> {
    if books.is_empty() {
        writeln!(output, "No featured books available at the moment.")?;
        return Ok(());
    }

    for book in books {
        writeln!(output, "#{} {} by {}", book.id, book.title, book.author)?;
        writeln!(output, "    ${:.2}", book.price)?;
        if let Some(description) = &book.description {
            writeln!(output, "    {}", description.trim())?;
        }
    }

    Ok(())
}
