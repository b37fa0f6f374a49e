//! Text and table output for ledger results.

use warehouse_core::codec::{EMPTY_INVENTORY, EMPTY_SHIPPING};
use warehouse_core::{Container, LedgerView, LineItem, Receipt, SearchHit};

use crate::ui::{kv, receipt, table, title, UiContext};

pub fn added_text(ui: &UiContext, name: &str, qty: u32) -> String {
    receipt(
        ui,
        &format!("Added \"{}\" to inventory", name),
        &[("Name", name.to_string()), ("Quantity", qty.to_string())],
    )
}

pub fn process_text(ui: &UiContext, done: &Receipt) -> String {
    receipt(
        ui,
        &format!("Processed \"{}\" into the shipping queue", done.name),
        &[
            ("Name", done.name.clone()),
            ("Quantity", done.quantity.to_string()),
            ("Left in inventory", done.remaining.to_string()),
        ],
    )
}

pub fn ship_text(ui: &UiContext, done: &Receipt) -> String {
    receipt(
        ui,
        &format!("Shipped \"{}\"", done.name),
        &[
            ("Name", done.name.clone()),
            ("Quantity", done.quantity.to_string()),
            ("Left in queue", done.remaining.to_string()),
        ],
    )
}

pub fn remove_text(ui: &UiContext, done: &Receipt) -> String {
    receipt(
        ui,
        &format!("Removed one \"{}\" from {}", done.name, done.location),
        &[
            ("Name", done.name.clone()),
            ("Location", location_key(done.location).to_string()),
            ("Remaining", done.remaining.to_string()),
        ],
    )
}

pub fn update_text(
    ui: &UiContext,
    old_name: &str,
    new_name: &str,
    qty: u32,
    location: Container,
) -> String {
    receipt(
        ui,
        &format!("Updated item in {}: {} -> {}", location, old_name, new_name),
        &[
            ("Old name", old_name.to_string()),
            ("New name", new_name.to_string()),
            ("Quantity", qty.to_string()),
            ("Location", location_key(location).to_string()),
        ],
    )
}

/// `label` is e.g. "Last incoming" or "Next shipment".
pub fn peek_text(ui: &UiContext, label: &str, name: &str) -> String {
    kv(ui, label, name)
}

pub fn search_text(ui: &UiContext, hit: &SearchHit) -> String {
    if ui.mode.is_pretty() {
        let place = match hit.location {
            Container::Incoming => "Inventory",
            Container::Shipping => "Shipping Queue",
        };
        format!("Found in {}: {} ({})", place, hit.name, hit.quantity)
    } else {
        [
            kv(ui, "Name", &hit.name),
            kv(ui, "Quantity", &hit.quantity.to_string()),
            kv(ui, "Location", location_key(hit.location)),
        ]
        .join("\n")
    }
}

pub fn count_text(ui: &UiContext, total: u64) -> String {
    kv(ui, "Total items", &total.to_string())
}

pub fn view_text(ui: &UiContext, view: &LedgerView) -> String {
    let mut lines = vec![title(ui, "Inventory (top to bottom)")];
    lines.push(section(ui, &view.incoming, EMPTY_INVENTORY));
    lines.push(title(ui, "Shipping queue (front to rear)"));
    lines.push(section(ui, &view.shipping, EMPTY_SHIPPING));
    lines.join("\n")
}

fn section(ui: &UiContext, items: &[LineItem], empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| vec![item.name.clone(), item.quantity.to_string()])
        .collect();
    table(ui, &["NAME", "QTY"], &rows)
}

/// Stable machine-facing name for a container.
fn location_key(container: Container) -> &'static str {
    match container {
        Container::Incoming => "incoming",
        Container::Shipping => "shipping",
    }
}
