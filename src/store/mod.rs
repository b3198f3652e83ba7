mod cart;

pub use cart::{CartStore, InMemoryCartStore};
