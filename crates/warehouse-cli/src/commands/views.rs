//! Read-only commands: last, next, view, search, count.

use serde_json::json;
use warehouse_core::InventoryLedger;

use crate::app::AppContext;
use crate::cli::{NameArgs, OutputArgs, ViewArgs};
use crate::helpers::validate_format;
use crate::output::{count_text, peek_text, print_json, search_text, view_text};
use crate::ui::UiContext;

pub fn last_text(ui: &UiContext, ledger: &InventoryLedger) -> anyhow::Result<String> {
    Ok(peek_text(ui, "Last incoming", ledger.peek_incoming()?))
}

pub fn next_text(ui: &UiContext, ledger: &InventoryLedger) -> anyhow::Result<String> {
    Ok(peek_text(ui, "Next shipment", ledger.peek_shipping()?))
}

pub fn find_text(ui: &UiContext, ledger: &InventoryLedger, name: &str) -> anyhow::Result<String> {
    Ok(search_text(ui, &ledger.search_item(name)?))
}

pub fn handle_last(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ledger = ctx.load_ledger()?;
    if args.json {
        return print_json(&json!({ "name": ledger.peek_incoming()? }));
    }
    println!("{}", last_text(&ctx.ui_context(false, None), &ledger)?);
    Ok(())
}

pub fn handle_next(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ledger = ctx.load_ledger()?;
    if args.json {
        return print_json(&json!({ "name": ledger.peek_shipping()? }));
    }
    println!("{}", next_text(&ctx.ui_context(false, None), &ledger)?);
    Ok(())
}

pub fn handle_view(ctx: &AppContext, args: &ViewArgs) -> anyhow::Result<()> {
    validate_format(args.format.as_deref())?;
    let ledger = ctx.load_ledger()?;
    let view = ledger.view_all();
    let ui = ctx.ui_context(args.json, args.format.as_deref());
    if ui.mode.is_json() {
        return print_json(&view);
    }
    println!("{}", view_text(&ui, &view));
    Ok(())
}

pub fn handle_search(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    let ledger = ctx.load_ledger()?;
    if args.json {
        return print_json(&ledger.search_item(&args.name)?);
    }
    println!("{}", find_text(&ctx.ui_context(false, None), &ledger, &args.name)?);
    Ok(())
}

pub fn handle_count(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ledger = ctx.load_ledger()?;
    let total = ledger.count_all();
    if args.json {
        return print_json(&json!({ "total": total }));
    }
    println!("{}", count_text(&ctx.ui_context(false, None), total));
    Ok(())
}
