//! Type-safe key-value persistence layer for Tavola.
//!
//! Provides a simple, ergonomic API for durably storing small state
//! snapshots (carts, sessions) with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use tavola_store::{MemoryStore, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! let store = Store::new(MemoryStore::new());
//!
//! store.set("prefs:user123", &Prefs { theme: "dark".into() }).unwrap();
//! let prefs: Option<Prefs> = store.get("prefs:user123").unwrap();
//! assert!(prefs.is_some());
//!
//! store.delete("prefs:user123").unwrap();
//! ```

mod error;
mod kv;
mod session;

pub use error::StoreError;
pub use kv::{FailingStore, MemoryStore, Store, StoreBackend};
pub use session::SessionId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FailingStore, MemoryStore, SessionId, Store, StoreBackend, StoreError};
}
