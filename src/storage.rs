mod filesystem;
mod traits;

pub use filesystem::FileCartStorage;
pub use traits::CartStorage;
