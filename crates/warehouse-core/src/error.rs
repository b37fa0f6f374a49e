//! Error types for warehouse core operations.
//!
//! Every ledger operation reports failure as a value; nothing in the core
//! prints or exits. The CLI layer maps these to user-facing messages and
//! exit codes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for warehouse operations.
pub type Result<T> = std::result::Result<T, WarehouseError>;

/// The two containers owned by a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    /// The incoming stack (LIFO).
    Incoming,
    /// The shipping queue (FIFO).
    Shipping,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Incoming => write!(f, "inventory"),
            Container::Shipping => write!(f, "shipping queue"),
        }
    }
}

/// Which containers a lookup covered before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Only(Container),
    Everywhere,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Only(container) => write!(f, "in {}", container),
            Scope::Everywhere => write!(f, "in inventory or shipping queue"),
        }
    }
}

/// Core error type for warehouse operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WarehouseError {
    /// peek/pop/dequeue on a container with no nodes
    #[error("No items in {0}")]
    EmptyContainer(Container),

    /// Name absent from the searched container(s)
    #[error("Item not found {scope}: {name}")]
    ItemNotFound { name: String, scope: Scope },

    /// Requested quantity exceeds the matched node's quantity
    #[error(
        "Not enough \"{name}\" in {container} (requested {requested}, available {available})"
    )]
    InsufficientQuantity {
        name: String,
        container: Container,
        requested: u32,
        available: u32,
    },

    /// Zero quantity passed to a core operation
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    /// Persistence backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WarehouseError {
    pub(crate) fn not_found(name: &str, scope: Scope) -> Self {
        WarehouseError::ItemNotFound {
            name: name.to_string(),
            scope,
        }
    }
}

impl From<std::io::Error> for WarehouseError {
    fn from(err: std::io::Error) -> Self {
        WarehouseError::Storage(err.to_string())
    }
}
