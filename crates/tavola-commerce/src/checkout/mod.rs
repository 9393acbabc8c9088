//! Checkout module.
//!
//! Builds the order-creation payload from a cart. Payment capture and
//! order management live behind external APIs; this module only
//! shapes the request they receive.

mod order;

pub use order::{OrderDraft, OrderDraftLine, OrderNumber};
