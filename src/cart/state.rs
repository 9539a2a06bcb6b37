use serde::{Deserialize, Serialize};

/// One (book, quantity) pair in the cart.
///
/// Field names match the order-item wire format, so cart lines can be sent
/// to the orders endpoint as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub book_id: u64,
    pub quantity: u32,
}

/// The full cart, serialized as a bare JSON array of lines.
///
/// Invariants: at most one line per book_id, every quantity >= 1, insertion
/// order preserved. All mutation goes through the methods below; callers
/// never touch the lines directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a book. An existing line is incremented (saturating
    /// at u32::MAX); otherwise a new line is appended.
    pub fn add(&mut self, book_id: u64, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.book_id == book_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { book_id, quantity });
        }
    }

    /// Remove the line for a book. No-op if absent.
    pub fn remove(&mut self, book_id: u64) {
        self.lines.retain(|l| l.book_id != book_id);
    }

    /// Set the quantity for a book. Zero removes the line. No-op if the
    /// book is not in the cart.
    pub fn set_quantity(&mut self, book_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(book_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.book_id == book_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of all quantities, used by the cart summary line.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Total cost of cart lines annotated with a unit price.
pub fn order_total(priced: &[(f64, u32)]) -> f64 {
    priced
        .iter()
        .map(|(price, quantity)| price * f64::from(*quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = CartState::new();
        cart.add(7, 2);

        assert_eq!(
            cart.lines(),
            &[CartLine {
                book_id: 7,
                quantity: 2
            }]
        );
    }

    #[test]
    fn test_add_increments_existing_line() {
        let mut cart = CartState::new();
        cart.add(7, 1);
        cart.add(7, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_add_saturates_at_u32_max() {
        let mut cart = CartState::new();
        cart.add(7, u32::MAX - 1);
        cart.add(7, 5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_no_duplicate_lines_after_mixed_operations() {
        let mut cart = CartState::new();
        cart.add(1, 1);
        cart.add(2, 2);
        cart.add(1, 1);
        cart.set_quantity(2, 5);
        cart.remove(1);
        cart.add(2, 1);
        cart.add(1, 4);

        let mut ids: Vec<u64> = cart.lines().iter().map(|l| l.book_id).collect();
        let total_lines = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total_lines);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartState::new();
        cart.add(3, 2);
        cart.set_quantity(3, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_book_is_noop() {
        let mut cart = CartState::new();
        cart.add(1, 1);
        cart.set_quantity(99, 5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].book_id, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartState::new();
        cart.add(5, 1);
        cart.add(3, 1);
        cart.add(9, 1);
        cart.add(3, 2);

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.book_id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_item_count() {
        let mut cart = CartState::new();
        cart.add(1, 2);
        cart.add(2, 3);
        cart.remove(1);

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_order_total() {
        assert_eq!(order_total(&[(10.0, 2), (5.0, 3)]), 35.0);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = CartState::new();
        cart.add(1, 2);

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"[{"book_id":1,"quantity":2}]"#);
    }
}
