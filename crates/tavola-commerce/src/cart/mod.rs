//! Shopping cart module.
//!
//! Contains the cart, its line items, the mutation API, and the
//! derived-totals calculator. With the `storage` feature,
//! [`CartSession`] adds snapshot persistence on every mutation.

mod cart;
mod totals;

#[cfg(feature = "storage")]
mod session;

pub use cart::{Cart, LineItem};
pub use totals::CartTotals;

#[cfg(feature = "storage")]
pub use session::CartSession;
