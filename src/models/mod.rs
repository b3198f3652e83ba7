mod cart;
mod order;
mod product;
mod user;

pub use cart::*;
pub use order::*;
pub use product::*;
pub use user::*;
