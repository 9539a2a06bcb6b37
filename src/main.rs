#![deny(clippy::mod_module_files)]
use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod api;
mod cart;
mod commands;
mod config;
mod error;
mod storage;

use api::{BookstoreClient, UserInfo};
use cart::CartStore;
use config::BookstallConfig;
use storage::FileCartStorage;

/// Command-line storefront client for a bookstore API.
#[derive(Parser)]
#[command(name = "bookstall", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List featured books
    Browse,
    /// Show details for one book
    Details {
        /// Book identifier
        book_id: u64,
    },
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Submit the cart as an order
    Checkout {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a book to the cart
    Add {
        book_id: u64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a book from the cart
    Remove { book_id: u64 },
    /// Set the quantity for a book (zero removes it)
    Set { book_id: u64, quantity: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BookstallConfig::load()?;

    let storage = FileCartStorage::new(&config.cart_path);
    storage.initialize()?;
    let mut store = CartStore::load(storage)?;

    let client = BookstoreClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let mut stdout = io::stdout();

    match cli.command {
        Command::Browse => commands::browse::handle(&client, &mut stdout).await?,
        Command::Details { book_id } => {
            commands::details::handle(&client, book_id, &mut stdout).await?
        }
        Command::Cart { action } => match action {
            None => commands::cart::show(&client, &store, &mut stdout).await?,
            Some(CartAction::Add { book_id, quantity }) => {
                commands::cart::add(&mut store, book_id, quantity, &mut stdout)?
            }
            Some(CartAction::Remove { book_id }) => {
                commands::cart::remove(&mut store, book_id, &mut stdout)?
            }
            Some(CartAction::Set { book_id, quantity }) => {
                commands::cart::set(&mut store, book_id, quantity, &mut stdout)?
            }
        },
        Command::Checkout {
            name,
            email,
            phone,
            address,
        } => {
            let user = UserInfo {
                name,
                email,
                phone,
                address,
            };
            commands::checkout::handle(&client, &mut store, user, &mut stdout).await?
        }
    }

    Ok(())
}
