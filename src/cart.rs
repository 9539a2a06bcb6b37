mod state;
mod store;

pub use state::{order_total, CartLine, CartState};
pub use store::CartStore;
