//! Incoming stack (LIFO).

use crate::chain::ItemChain;
use crate::error::{Container, Result, WarehouseError};
use crate::item::LineItem;

/// Incoming items, most recent push first.
///
/// A push merges into the head node only when the head has the same name.
/// A matching node further down the chain is left alone, so the same name
/// can appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingStack {
    chain: ItemChain,
}

impl IncomingStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `qty` units of `name`, merging into the head if it matches.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::InvalidQuantity` if `qty` is zero.
    pub fn push(&mut self, name: impl Into<String>, qty: u32) -> Result<()> {
        if qty == 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        self.chain.insert_first(name.into(), qty);
        Ok(())
    }

    /// Consume one unit from the head and return its name.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::EmptyContainer` if there are no nodes.
    pub fn pop(&mut self) -> Result<String> {
        let name = self.peek()?.to_string();
        self.chain.take_at(0, 1);
        Ok(name)
    }

    /// Name of the head node.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::EmptyContainer` if there are no nodes.
    pub fn peek(&self) -> Result<&str> {
        self.chain
            .first()
            .map(|node| node.name.as_str())
            .ok_or(WarehouseError::EmptyContainer(Container::Incoming))
    }

    pub fn head(&self) -> Option<&LineItem> {
        self.chain.first()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of nodes (not units).
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Nodes from head to tail.
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
