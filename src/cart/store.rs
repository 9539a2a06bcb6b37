use anyhow::Result;

use super::state::CartState;
use crate::storage::CartStorage;

/// The cart store: an in-memory cart mirroring durable storage.
///
/// Loaded from storage at construction and persisted after every mutation.
/// Commands receive the store and go through its operations; nothing else
/// reads or writes the cart file.
pub struct CartStore<S: CartStorage> {
    storage: S,
    state: CartState,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart from durable storage. An absent or unparseable cart
    /// file yields an empty cart.
    pub fn load(storage: S) -> Result<Self> {
        let state = storage.read_cart()?;
        Ok(CartStore { storage, state })
    }

    /// Add `quantity` of a book and persist.
    pub fn add(&mut self, book_id: u64, quantity: u32) -> Result<()> {
        self.state.add(book_id, quantity);
        self.persist()
    }

    /// Remove a book from the cart and persist. No-op if absent.
    pub fn remove(&mut self, book_id: u64) -> Result<()> {
        self.state.remove(book_id);
        self.persist()
    }

    /// Set the quantity for a book and persist. A quantity of zero or less
    /// removes the line instead; values above u32::MAX are clamped.
    pub fn update(&mut self, book_id: u64, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            self.state.remove(book_id);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.state.set_quantity(book_id, quantity);
        }
        self.persist()
    }

    /// Empty the cart and persist. Called after a completed checkout.
    pub fn clear(&mut self) -> Result<()> {
        self.state.clear();
        self.persist()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Sum of all quantities, for the summary line.
    pub fn item_count(&self) -> u32 {
        self.state.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.storage.write_cart(&self.state)
    }
}
