//! Shipping queue (FIFO).

use crate::chain::ItemChain;
use crate::error::{Container, Result, WarehouseError};
use crate::item::LineItem;

/// Outgoing items in enqueue order, oldest first.
///
/// An enqueue merges into the rear node only when the rear has the same name,
/// mirroring the head-only merge of [`IncomingStack`](crate::IncomingStack).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingQueue {
    chain: ItemChain,
}

impl ShippingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `qty` units of `name`, merging into the rear if it matches.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::InvalidQuantity` if `qty` is zero.
    pub fn enqueue(&mut self, name: impl Into<String>, qty: u32) -> Result<()> {
        if qty == 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        self.chain.insert_last(name.into(), qty);
        Ok(())
    }

    /// Consume one unit from the front and return its name.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::EmptyContainer` if there are no nodes.
    pub fn dequeue(&mut self) -> Result<String> {
        let name = self.peek()?.to_string();
        self.chain.take_at(0, 1);
        Ok(name)
    }

    /// Name of the front node.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::EmptyContainer` if there are no nodes.
    pub fn peek(&self) -> Result<&str> {
        self.chain
            .first()
            .map(|node| node.name.as_str())
            .ok_or(WarehouseError::EmptyContainer(Container::Shipping))
    }

    pub fn front(&self) -> Option<&LineItem> {
        self.chain.first()
    }

    pub fn rear(&self) -> Option<&LineItem> {
        self.chain.last()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of nodes (not units).
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Nodes from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.chain.iter()
    }

    pub(crate) fn chain(&self) -> &ItemChain {
        &self.chain
    }

    pub(crate) fn chain_mut(&mut self) -> &mut ItemChain {
        &mut self.chain
    }
}
