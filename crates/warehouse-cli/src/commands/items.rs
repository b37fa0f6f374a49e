//! Mutating commands: add, process, ship, remove, update.
//!
//! Each `apply_*` function runs the ledger operation and returns the
//! rendered result; the menu calls them directly.

use warehouse_core::InventoryLedger;

use crate::app::AppContext;
use crate::cli::{ItemArgs, NameArgs, UpdateArgs};
use crate::helpers::{parse_quantity, validate_item_name};
use crate::output::{added_text, process_text, remove_text, ship_text, update_text};
use crate::ui::UiContext;

pub fn apply_add(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    name: &str,
    qty: u32,
) -> anyhow::Result<String> {
    ledger.add_incoming(name, qty)?;
    Ok(added_text(ui, name, qty))
}

pub fn apply_process(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    name: &str,
    qty: u32,
) -> anyhow::Result<String> {
    let done = ledger.process_to_shipping(name, qty)?;
    Ok(process_text(ui, &done))
}

pub fn apply_ship(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    name: &str,
    qty: u32,
) -> anyhow::Result<String> {
    let done = ledger.ship_out(name, qty)?;
    Ok(ship_text(ui, &done))
}

pub fn apply_remove(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    name: &str,
) -> anyhow::Result<String> {
    let done = ledger.remove_item(name)?;
    Ok(remove_text(ui, &done))
}

pub fn apply_update(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    old_name: &str,
    new_name: &str,
    qty: u32,
) -> anyhow::Result<String> {
    let location = ledger.update_item(old_name, new_name, qty)?;
    Ok(update_text(ui, old_name, new_name, qty, location))
}

pub fn handle_add(ctx: &AppContext, args: &ItemArgs) -> anyhow::Result<()> {
    validate_item_name(&args.name)?;
    let qty = parse_quantity(&args.quantity)?;
    mutate(ctx, |ui, ledger| apply_add(ui, ledger, &args.name, qty))
}

pub fn handle_process(ctx: &AppContext, args: &ItemArgs) -> anyhow::Result<()> {
    let qty = parse_quantity(&args.quantity)?;
    mutate(ctx, |ui, ledger| apply_process(ui, ledger, &args.name, qty))
}

pub fn handle_ship(ctx: &AppContext, args: &ItemArgs) -> anyhow::Result<()> {
    let qty = parse_quantity(&args.quantity)?;
    mutate(ctx, |ui, ledger| apply_ship(ui, ledger, &args.name, qty))
}

pub fn handle_remove(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    if args.json {
        let mut ledger = ctx.load_ledger()?;
        let done = ledger.remove_item(&args.name)?;
        ctx.save_ledger(&ledger)?;
        return crate::output::print_json(&done);
    }
    mutate(ctx, |ui, ledger| apply_remove(ui, ledger, &args.name))
}

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    validate_item_name(&args.new_name)?;
    let qty = parse_quantity(&args.quantity)?;
    mutate(ctx, |ui, ledger| {
        apply_update(ui, ledger, &args.old_name, &args.new_name, qty)
    })
}

/// Load, apply, save, then print. Nothing is written when `op` fails.
fn mutate<F>(ctx: &AppContext, op: F) -> anyhow::Result<()>
where
    F: FnOnce(&UiContext, &mut InventoryLedger) -> anyhow::Result<String>,
{
    let ui = ctx.ui_context(false, None);
    let mut ledger = ctx.load_ledger()?;
    let message = op(&ui, &mut ledger)?;
    ctx.save_ledger(&ledger)?;
    if !ctx.quiet() {
        println!("{}", message);
    }
    Ok(())
}
