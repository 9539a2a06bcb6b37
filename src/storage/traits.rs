use anyhow::Result;

use crate::cart::CartState;

/// Durable storage for the cart.
///
/// Implementations hold the JSON-serialized cart as the sole value at one
/// location and must replace it atomically on write.
pub trait CartStorage {
    /// Read the persisted cart.
    /// Returns an empty cart if none exists or the stored value is
    /// unparseable; a bad read never surfaces as an error.
    fn read_cart(&self) -> Result<CartState>;

    /// Atomically replace the persisted cart.
    fn write_cart(&self, cart: &CartState) -> Result<()>;
}
