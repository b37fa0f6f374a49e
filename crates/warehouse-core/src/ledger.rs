//! Inventory ledger: one incoming stack plus one shipping queue.
//!
//! All lookups are linear scans by exact name. An operation either completes
//! fully or returns an error with both containers untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Container, Result, Scope, WarehouseError};
use crate::item::LineItem;
use crate::queue::ShippingQueue;
use crate::stack::IncomingStack;

/// Where a lookup found its match, and the matched node's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub quantity: u32,
    pub location: Container,
}

/// Outcome of taking units out of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub name: String,
    /// Units taken from the node
    pub quantity: u32,
    /// Units left in the node; 0 means it was unlinked
    pub remaining: u32,
    /// Container the units were taken from
    pub location: Container,
}

/// Ordered listing of both containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    /// Head to tail
    pub incoming: Vec<LineItem>,
    /// Front to rear
    pub shipping: Vec<LineItem>,
}

impl LedgerView {
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.shipping.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    incoming: IncomingStack,
    shipping: ShippingQueue,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incoming(&self) -> &IncomingStack {
        &self.incoming
    }

    pub fn shipping(&self) -> &ShippingQueue {
        &self.shipping
    }

    pub(crate) fn incoming_mut(&mut self) -> &mut IncomingStack {
        &mut self.incoming
    }

    pub(crate) fn shipping_mut(&mut self) -> &mut ShippingQueue {
        &mut self.shipping
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.shipping.is_empty()
    }

    /// Receive `qty` units of `name` onto the incoming stack.
    pub fn add_incoming(&mut self, name: &str, qty: u32) -> Result<()> {
        self.incoming.push(name, qty)?;
        debug!(name, qty, container = %Container::Incoming, "added item");
        Ok(())
    }

    /// Move `qty` units of `name` from incoming into the shipping queue.
    ///
    /// The whole incoming chain is scanned, not just the head. The first
    /// matching node is decremented (unlinked at zero) and a batch of `qty`
    /// is enqueued for shipping.
    ///
    /// # Errors
    ///
    /// - `ItemNotFound` if no incoming node has this name
    /// - `InsufficientQuantity` if the first match holds fewer than `qty`
    /// - `InvalidQuantity` if `qty` is zero
    pub fn process_to_shipping(&mut self, name: &str, qty: u32) -> Result<Receipt> {
        ensure_positive(qty)?;
        let remaining = self
            .incoming
            .chain_mut()
            .take_named(name, qty, Container::Incoming)?;
        self.shipping.enqueue(name, qty)?;
        debug!(
            name,
            qty,
            remaining,
            container = %Container::Incoming,
            "processed item to shipping"
        );
        Ok(Receipt {
            name: name.to_string(),
            quantity: qty,
            remaining,
            location: Container::Incoming,
        })
    }

    /// Ship `qty` units of `name` out of the system.
    ///
    /// # Errors
    ///
    /// Same policy as [`process_to_shipping`](Self::process_to_shipping),
    /// applied to the shipping queue.
    pub fn ship_out(&mut self, name: &str, qty: u32) -> Result<Receipt> {
        ensure_positive(qty)?;
        let remaining = self
            .shipping
            .chain_mut()
            .take_named(name, qty, Container::Shipping)?;
        debug!(
            name,
            qty,
            remaining,
            container = %Container::Shipping,
            "shipped item"
        );
        Ok(Receipt {
            name: name.to_string(),
            quantity: qty,
            remaining,
            location: Container::Shipping,
        })
    }

    /// Name of the most recent incoming node.
    pub fn peek_incoming(&self) -> Result<&str> {
        self.incoming.peek()
    }

    /// Name of the next node to ship.
    pub fn peek_shipping(&self) -> Result<&str> {
        self.shipping.peek()
    }

    /// Find `name`, looking in incoming before shipping.
    pub fn search_item(&self, name: &str) -> Result<SearchHit> {
        self.locate(name)
            .and_then(|(location, index)| {
                let item = match location {
                    Container::Incoming => self.incoming.chain().get(index),
                    Container::Shipping => self.shipping.chain().get(index),
                }?;
                Some(SearchHit {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    location,
                })
            })
            .ok_or_else(|| WarehouseError::not_found(name, Scope::Everywhere))
    }

    /// Remove exactly one unit of `name`, incoming first.
    ///
    /// Only one unit is taken even when the node holds more; the node is
    /// unlinked when that unit was its last.
    pub fn remove_item(&mut self, name: &str) -> Result<Receipt> {
        let (location, index) = self
            .locate(name)
            .ok_or_else(|| WarehouseError::not_found(name, Scope::Everywhere))?;
        let remaining = self.chain_for(location).take_at(index, 1);
        debug!(name, container = %location, remaining, "removed one unit");
        Ok(Receipt {
            name: name.to_string(),
            quantity: 1,
            remaining,
            location,
        })
    }

    /// Rename and requantify the first node named `old_name`.
    ///
    /// Incoming is scanned before shipping and only the first container
    /// holding a match is touched. The overwrite does not merge with any node
    /// already named `new_name`.
    pub fn update_item(&mut self, old_name: &str, new_name: &str, new_qty: u32) -> Result<Container> {
        ensure_positive(new_qty)?;
        let (location, index) = self
            .locate(old_name)
            .ok_or_else(|| WarehouseError::not_found(old_name, Scope::Everywhere))?;
        self.chain_for(location)
            .overwrite_at(index, new_name.to_string(), new_qty);
        debug!(old_name, new_name, new_qty, container = %location, "updated item");
        Ok(location)
    }

    /// Total units across both containers.
    pub fn count_all(&self) -> u64 {
        self.incoming.chain().total() + self.shipping.chain().total()
    }

    pub fn view_all(&self) -> LedgerView {
        LedgerView {
            incoming: self.incoming.iter().cloned().collect(),
            shipping: self.shipping.iter().cloned().collect(),
        }
    }

    fn locate(&self, name: &str) -> Option<(Container, usize)> {
        self.incoming
            .chain()
            .position(name)
            .map(|index| (Container::Incoming, index))
            .or_else(|| {
                self.shipping
                    .chain()
                    .position(name)
                    .map(|index| (Container::Shipping, index))
            })
    }

    fn chain_for(&mut self, container: Container) -> &mut crate::chain::ItemChain {
        match container {
            Container::Incoming => self.incoming.chain_mut(),
            Container::Shipping => self.shipping.chain_mut(),
        }
    }
}

fn ensure_positive(qty: u32) -> Result<()> {
    if qty == 0 {
        return Err(WarehouseError::InvalidQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(incoming: &[(&str, u32)], shipping: &[(&str, u32)]) -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        // Push bottom-up so the first listed item ends up at the head.
        for (name, qty) in incoming.iter().rev() {
            ledger.add_incoming(name, *qty).unwrap();
        }
        for (name, qty) in shipping {
            ledger.shipping_mut().enqueue(*name, *qty).unwrap();
        }
        ledger
    }

    fn items(list: &[LineItem]) -> Vec<(&str, u32)> {
        list.iter()
            .map(|item| (item.name.as_str(), item.quantity))
            .collect()
    }

    #[test]
    fn test_process_moves_partial_batch() {
        let mut ledger = ledger_with(&[("bolts", 5)], &[]);
        let receipt = ledger.process_to_shipping("bolts", 2).unwrap();
        assert_eq!(receipt.remaining, 3);

        let view = ledger.view_all();
        assert_eq!(items(&view.incoming), vec![("bolts", 3)]);
        assert_eq!(items(&view.shipping), vec![("bolts", 2)]);
    }

    #[test]
    fn test_process_insufficient_leaves_state_unchanged() {
        let mut ledger = ledger_with(&[("bolts", 5)], &[]);
        let before = ledger.clone();

        let err = ledger.process_to_shipping("bolts", 10).unwrap_err();
        assert_eq!(
            err,
            WarehouseError::InsufficientQuantity {
                name: "bolts".into(),
                container: Container::Incoming,
                requested: 10,
                available: 5,
            }
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_process_unlinks_non_head_node() {
        let mut ledger = ledger_with(&[("nuts", 1), ("bolts", 2), ("washers", 4)], &[]);
        ledger.process_to_shipping("bolts", 2).unwrap();

        let view = ledger.view_all();
        assert_eq!(items(&view.incoming), vec![("nuts", 1), ("washers", 4)]);
        assert_eq!(items(&view.shipping), vec![("bolts", 2)]);
    }

    #[test]
    fn test_process_missing_item() {
        let mut ledger = ledger_with(&[], &[("bolts", 1)]);
        let err = ledger.process_to_shipping("bolts", 1).unwrap_err();
        assert_eq!(
            err,
            WarehouseError::ItemNotFound {
                name: "bolts".into(),
                scope: Scope::Only(Container::Incoming),
            }
        );
    }

    #[test]
    fn test_process_merges_with_shipping_rear() {
        let mut ledger = ledger_with(&[("bolts", 5)], &[]);
        ledger.process_to_shipping("bolts", 2).unwrap();
        ledger.process_to_shipping("bolts", 3).unwrap();

        let view = ledger.view_all();
        assert!(view.incoming.is_empty());
        assert_eq!(items(&view.shipping), vec![("bolts", 5)]);
    }

    #[test]
    fn test_ship_out_removes_from_system() {
        let mut ledger = ledger_with(&[], &[("bolts", 2), ("nuts", 3)]);
        let receipt = ledger.ship_out("nuts", 3).unwrap();
        assert_eq!(receipt.remaining, 0);
        assert_eq!(receipt.location, Container::Shipping);
        assert_eq!(items(&ledger.view_all().shipping), vec![("bolts", 2)]);
        assert_eq!(ledger.count_all(), 2);
    }

    #[test]
    fn test_ship_out_insufficient_and_missing() {
        let mut ledger = ledger_with(&[("nuts", 9)], &[("bolts", 2)]);
        let before = ledger.clone();

        assert!(matches!(
            ledger.ship_out("bolts", 3),
            Err(WarehouseError::InsufficientQuantity { available: 2, .. })
        ));
        assert!(matches!(
            ledger.ship_out("nuts", 1),
            Err(WarehouseError::ItemNotFound { .. })
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_zero_quantity_rejected_before_scan() {
        let mut ledger = ledger_with(&[("bolts", 1)], &[("bolts", 1)]);
        assert_eq!(
            ledger.process_to_shipping("bolts", 0),
            Err(WarehouseError::InvalidQuantity)
        );
        assert_eq!(ledger.ship_out("bolts", 0), Err(WarehouseError::InvalidQuantity));
        assert_eq!(
            ledger.update_item("bolts", "nuts", 0),
            Err(WarehouseError::InvalidQuantity)
        );
        assert_eq!(ledger.count_all(), 2);
    }

    #[test]
    fn test_search_prefers_incoming() {
        let ledger = ledger_with(&[("bolts", 4)], &[("bolts", 2), ("nuts", 1)]);

        let hit = ledger.search_item("bolts").unwrap();
        assert_eq!(hit.location, Container::Incoming);
        assert_eq!(hit.quantity, 4);

        let hit = ledger.search_item("nuts").unwrap();
        assert_eq!(hit.location, Container::Shipping);
        assert_eq!(hit.quantity, 1);

        assert_eq!(
            ledger.search_item("gears").unwrap_err(),
            WarehouseError::ItemNotFound {
                name: "gears".into(),
                scope: Scope::Everywhere,
            }
        );
    }

    #[test]
    fn test_remove_takes_one_unit() {
        let mut ledger = ledger_with(&[("bolts", 5)], &[]);
        let receipt = ledger.remove_item("bolts").unwrap();
        assert_eq!(receipt.quantity, 1);
        assert_eq!(receipt.remaining, 4);
        assert_eq!(items(&ledger.view_all().incoming), vec![("bolts", 4)]);
    }

    #[test]
    fn test_remove_last_unit_unlinks() {
        let mut ledger = ledger_with(&[("nuts", 2), ("bolts", 1)], &[]);
        ledger.remove_item("bolts").unwrap();
        assert_eq!(items(&ledger.view_all().incoming), vec![("nuts", 2)]);
    }

    #[test]
    fn test_remove_falls_back_to_shipping() {
        let mut ledger = ledger_with(&[("nuts", 2)], &[("gears", 1), ("bolts", 1)]);
        let receipt = ledger.remove_item("bolts").unwrap();
        assert_eq!(receipt.location, Container::Shipping);
        assert_eq!(items(&ledger.view_all().shipping), vec![("gears", 1)]);
        assert!(ledger.remove_item("bolts").is_err());
    }

    #[test]
    fn test_update_touches_only_first_container() {
        let mut ledger = ledger_with(&[("bolts", 5)], &[("bolts", 2)]);
        let location = ledger.update_item("bolts", "screws", 7).unwrap();
        assert_eq!(location, Container::Incoming);

        let view = ledger.view_all();
        assert_eq!(items(&view.incoming), vec![("screws", 7)]);
        assert_eq!(items(&view.shipping), vec![("bolts", 2)]);
    }

    #[test]
    fn test_update_allows_duplicate_names() {
        let mut ledger = ledger_with(&[("nuts", 1), ("bolts", 2)], &[]);
        ledger.update_item("bolts", "nuts", 3).unwrap();
        assert_eq!(
            items(&ledger.view_all().incoming),
            vec![("nuts", 1), ("nuts", 3)]
        );
    }

    #[test]
    fn test_update_missing_item() {
        let mut ledger = ledger_with(&[("nuts", 1)], &[]);
        assert!(matches!(
            ledger.update_item("bolts", "screws", 1),
            Err(WarehouseError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_count_all() {
        let ledger = ledger_with(&[("a", 2), ("b", 3)], &[("c", 1)]);
        assert_eq!(ledger.count_all(), 6);
        assert_eq!(InventoryLedger::new().count_all(), 0);
    }

    #[test]
    fn test_peeks() {
        let ledger = ledger_with(&[("a", 2), ("b", 3)], &[("c", 1), ("d", 1)]);
        assert_eq!(ledger.peek_incoming().unwrap(), "a");
        assert_eq!(ledger.peek_shipping().unwrap(), "c");

        let empty = InventoryLedger::new();
        assert_eq!(
            empty.peek_incoming().unwrap_err(),
            WarehouseError::EmptyContainer(Container::Incoming)
        );
        assert_eq!(
            empty.peek_shipping().unwrap_err(),
            WarehouseError::EmptyContainer(Container::Shipping)
        );
    }

    mod log_events {
        use std::io::{self, Write};
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::fmt::MakeWriter;

        use crate::ledger::InventoryLedger;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Captured {
            type Writer = Captured;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        fn capture(f: impl FnOnce()) -> String {
            let out = Captured::default();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .with_writer(out.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, f);
            let bytes = out.0.lock().unwrap().clone();
            String::from_utf8(bytes).unwrap()
        }

        fn event<'a>(logs: &'a str, message: &str) -> &'a str {
            logs.lines()
                .find(|line| line.contains(message))
                .unwrap_or_else(|| panic!("no {:?} event in {}", message, logs))
        }

        #[test]
        fn test_every_mutation_names_its_container() {
            let mut ledger = InventoryLedger::new();
            let logs = capture(|| {
                ledger.add_incoming("bolts", 3).unwrap();
                ledger.process_to_shipping("bolts", 2).unwrap();
                ledger.ship_out("bolts", 1).unwrap();
                ledger.remove_item("bolts").unwrap();
                ledger.update_item("bolts", "nuts", 4).unwrap();
            });

            assert!(event(&logs, "added item").contains("container=inventory"));
            assert!(event(&logs, "processed item to shipping").contains("container=inventory"));
            assert!(event(&logs, "shipped item").contains("container=shipping queue"));
            assert!(event(&logs, "removed one unit").contains("container=inventory"));
            assert!(event(&logs, "updated item").contains("container=shipping queue"));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(String, u32),
            Process(String, u32),
            Ship(String, u32),
            Remove(String),
            Update(String, String, u32),
        }

        fn name() -> impl Strategy<Value = String> {
            prop::sample::select(vec!["bolts", "nuts", "gears"]).prop_map(String::from)
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (name(), 1u32..5).prop_map(|(n, q)| Op::Add(n, q)),
                (name(), 1u32..5).prop_map(|(n, q)| Op::Process(n, q)),
                (name(), 1u32..5).prop_map(|(n, q)| Op::Ship(n, q)),
                name().prop_map(Op::Remove),
                (name(), name(), 1u32..5).prop_map(|(o, n, q)| Op::Update(o, n, q)),
            ]
        }

        fn apply(ledger: &mut InventoryLedger, op: &Op) -> bool {
            match op {
                Op::Add(n, q) => ledger.add_incoming(n, *q).is_ok(),
                Op::Process(n, q) => ledger.process_to_shipping(n, *q).is_ok(),
                Op::Ship(n, q) => ledger.ship_out(n, *q).is_ok(),
                Op::Remove(n) => ledger.remove_item(n).is_ok(),
                Op::Update(o, n, q) => ledger.update_item(o, n, *q).is_ok(),
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: no node ever holds zero units, and count_all matches the view.
            #[test]
            fn quantities_stay_positive(ops in prop::collection::vec(op(), 0..40)) {
                let mut ledger = InventoryLedger::new();
                for op in &ops {
                    apply(&mut ledger, op);
                    let view = ledger.view_all();
                    prop_assert!(view.incoming.iter().chain(&view.shipping).all(|i| i.quantity > 0));
                    let summed: u64 = view
                        .incoming
                        .iter()
                        .chain(&view.shipping)
                        .map(|i| u64::from(i.quantity))
                        .sum();
                    prop_assert_eq!(ledger.count_all(), summed);
                }
            }

            /// Property: a failed operation leaves the ledger exactly as it was.
            #[test]
            fn failures_do_not_mutate(ops in prop::collection::vec(op(), 0..40)) {
                let mut ledger = InventoryLedger::new();
                for op in &ops {
                    let before = ledger.clone();
                    if !apply(&mut ledger, op) {
                        prop_assert_eq!(&ledger, &before);
                    }
                }
            }

            /// Property: peek and search are idempotent between mutations.
            #[test]
            fn reads_are_idempotent(ops in prop::collection::vec(op(), 0..20), probe in name()) {
                let mut ledger = InventoryLedger::new();
                for op in &ops {
                    apply(&mut ledger, op);
                }
                let first = (
                    ledger.peek_incoming().map(String::from),
                    ledger.peek_shipping().map(String::from),
                    ledger.search_item(&probe),
                );
                let second = (
                    ledger.peek_incoming().map(String::from),
                    ledger.peek_shipping().map(String::from),
                    ledger.search_item(&probe),
                );
                prop_assert_eq!(first, second);
            }

            /// Property: processing conserves units (only ship/remove destroy them).
            #[test]
            fn process_conserves_units(qty in 1u32..10, take in 1u32..10) {
                let mut ledger = InventoryLedger::new();
                ledger.add_incoming("bolts", qty).unwrap();
                let _ = ledger.process_to_shipping("bolts", take);
                prop_assert_eq!(ledger.count_all(), u64::from(qty));
            }
        }
    }
}
