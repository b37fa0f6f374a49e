//! Ordered node storage shared by the incoming stack and the shipping queue.
//!
//! Nodes are kept head-first in a `VecDeque`: index 0 is the stack top or the
//! queue front, the last index is the stack bottom or the queue rear. A node
//! is addressed by its position during a single operation; positions are not
//! kept across calls.

use std::collections::VecDeque;

use crate::error::{Container, Result, Scope, WarehouseError};
use crate::item::LineItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ItemChain {
    nodes: VecDeque<LineItem>,
}

impl ItemChain {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.nodes.iter()
    }

    pub(crate) fn first(&self) -> Option<&LineItem> {
        self.nodes.front()
    }

    pub(crate) fn last(&self) -> Option<&LineItem> {
        self.nodes.back()
    }

    /// Insert at index 0, merging only into the current first node.
    pub(crate) fn insert_first(&mut self, name: String, qty: u32) {
        match self.nodes.front_mut() {
            Some(head) if head.name == name => {
                head.quantity = head.quantity.saturating_add(qty);
            }
            _ => self.nodes.push_front(LineItem::new(name, qty)),
        }
    }

    /// Insert at the end, merging only into the current last node.
    pub(crate) fn insert_last(&mut self, name: String, qty: u32) {
        match self.nodes.back_mut() {
            Some(tail) if tail.name == name => {
                tail.quantity = tail.quantity.saturating_add(qty);
            }
            _ => self.nodes.push_back(LineItem::new(name, qty)),
        }
    }

    /// Position of the first node named `name`, scanning head to tail.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&LineItem> {
        self.nodes.get(index)
    }

    /// Take `qty` units from the node at `index`, unlinking it at zero.
    ///
    /// The caller has already checked `qty <= quantity`. Returns the quantity
    /// left in the node (0 when it was unlinked).
    pub(crate) fn take_at(&mut self, index: usize, qty: u32) -> u32 {
        let Some(node) = self.nodes.get_mut(index) else {
            return 0;
        };
        node.quantity -= qty;
        let remaining = node.quantity;
        if remaining == 0 {
            self.nodes.remove(index);
        }
        remaining
    }

    /// Take `qty` units from the first node named `name`.
    ///
    /// Fails without touching the chain if the name is absent or the node
    /// holds fewer than `qty` units.
    pub(crate) fn take_named(&mut self, name: &str, qty: u32, container: Container) -> Result<u32> {
        let index = self
            .position(name)
            .ok_or_else(|| WarehouseError::not_found(name, Scope::Only(container)))?;
        let available = self.nodes[index].quantity;
        if available < qty {
            return Err(WarehouseError::InsufficientQuantity {
                name: name.to_string(),
                container,
                requested: qty,
                available,
            });
        }
        Ok(self.take_at(index, qty))
    }

    /// Overwrite the node at `index` in place. No merge with neighbours.
    pub(crate) fn overwrite_at(&mut self, index: usize, name: String, qty: u32) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.name = name;
            node.quantity = qty;
        }
    }

    pub(crate) fn total(&self) -> u64 {
        self.nodes.iter().map(|node| u64::from(node.quantity)).sum()
    }
}
