//! # Warehouse Core
//!
//! Core library for Warehouse - an in-memory inventory ledger with an
//! incoming stack and a shipping queue.
//!
//! This crate provides the containers, the ledger operations and the
//! persistence format, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **item**: The line item record
//! - **stack**: Incoming stack (LIFO, head-only merge)
//! - **queue**: Shipping queue (FIFO, rear-only merge)
//! - **ledger**: Cross-container operations (process, ship, search, remove, update)
//! - **codec**: Flat text save format
//! - **store**: Loading and atomically saving ledger files

mod chain;
pub mod codec;
pub mod error;
pub mod fs;
pub mod item;
pub mod ledger;
pub mod queue;
pub mod stack;
pub mod store;

pub use error::{Container, Result, Scope, WarehouseError};
pub use item::LineItem;
pub use ledger::{InventoryLedger, LedgerView, Receipt, SearchHit};
pub use queue::ShippingQueue;
pub use stack::IncomingStack;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
