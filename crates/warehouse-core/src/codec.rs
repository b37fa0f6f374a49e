//! Flat text persistence format.
//!
//! ```text
//! --- Final Inventory ---
//! <item name per line, head to tail>
//! --- Final Shipping Queue ---
//! <item name per line, front to rear>
//! ```
//!
//! Quantities are not written. On decode every stored line counts as one
//! unit, so a save/load cycle keeps names and order but collapses each node
//! to quantity 1 (adjacent equal names at the merge end collapse further).

use tracing::warn;

use crate::error::Result;
use crate::ledger::InventoryLedger;

pub const INVENTORY_MARKER: &str = "--- Final Inventory ---";
pub const SHIPPING_MARKER: &str = "--- Final Shipping Queue ---";
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";
pub const EMPTY_SHIPPING: &str = "Shipping queue is empty.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Inventory,
    Shipping,
}

/// Render the ledger in the persistence format.
pub fn encode(ledger: &InventoryLedger) -> String {
    let mut out = String::new();

    out.push_str(INVENTORY_MARKER);
    out.push('\n');
    if ledger.incoming().is_empty() {
        out.push_str(EMPTY_INVENTORY);
        out.push('\n');
    }
    for item in ledger.incoming().iter() {
        out.push_str(&item.name);
        out.push('\n');
    }

    out.push_str(SHIPPING_MARKER);
    out.push('\n');
    if ledger.shipping().is_empty() {
        out.push_str(EMPTY_SHIPPING);
        out.push('\n');
    }
    for item in ledger.shipping().iter() {
        out.push_str(&item.name);
        out.push('\n');
    }

    out
}

/// Rebuild a ledger from the persistence format.
///
/// Inventory lines are pushed bottom-up so the stored head is the head again.
/// Shipping lines are enqueued in file order.
pub fn decode(contents: &str) -> Result<InventoryLedger> {
    let mut section = Section::Preamble;
    let mut inventory: Vec<&str> = Vec::new();
    let mut ledger = InventoryLedger::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.contains(INVENTORY_MARKER) {
            section = Section::Inventory;
            continue;
        }
        if line.contains(SHIPPING_MARKER) {
            section = Section::Shipping;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match section {
            Section::Preamble => {
                warn!(line = line_no + 1, "skipping line before first section marker");
            }
            Section::Inventory if line == EMPTY_INVENTORY => {}
            Section::Inventory => inventory.push(line),
            Section::Shipping if line == EMPTY_SHIPPING => {}
            Section::Shipping => ledger.shipping_mut().enqueue(line, 1)?,
        }
    }

    for name in inventory.into_iter().rev() {
        ledger.incoming_mut().push(name, 1)?;
    }

    Ok(ledger)
}
