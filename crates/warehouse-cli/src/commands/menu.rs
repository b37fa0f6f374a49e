//! Interactive menu session.
//!
//! The ledger is loaded once, kept in memory across actions and saved when
//! the user exits. Ledger errors are reported and the menu continues; any
//! other failure saves what is there and ends the session.

use std::io::IsTerminal;
use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use tracing::{debug, warn};
use warehouse_core::{store, InventoryLedger, WarehouseError};

use crate::app::AppContext;
use crate::commands::items::{apply_add, apply_process, apply_remove, apply_ship, apply_update};
use crate::commands::views::{find_text, last_text, next_text};
use crate::errors::{hint, CliError};
use crate::helpers::{prompt_item_name, prompt_name, prompt_quantity};
use crate::output::{count_text, view_text};
use crate::ui::{badge, print_error, Badge, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Process,
    Ship,
    Last,
    Next,
    View,
    Remove,
    Search,
    Count,
    Update,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 11] = [
        MenuAction::Add,
        MenuAction::Process,
        MenuAction::Ship,
        MenuAction::Last,
        MenuAction::Next,
        MenuAction::View,
        MenuAction::Remove,
        MenuAction::Search,
        MenuAction::Count,
        MenuAction::Update,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add incoming item",
            MenuAction::Process => "Process incoming item",
            MenuAction::Ship => "Ship item",
            MenuAction::Last => "View last incoming item",
            MenuAction::Next => "View next shipment",
            MenuAction::View => "View all items",
            MenuAction::Remove => "Remove item",
            MenuAction::Search => "Search item",
            MenuAction::Count => "Count all items",
            MenuAction::Update => "Update item",
            MenuAction::Exit => "Exit",
        }
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "Interactive menu requires a terminal. Use a subcommand instead.",
        )
        .into());
    }

    let ui = ctx.ui_context(false, None);
    let path = ctx.save_path()?;
    let mut ledger = open(&ui, &path)?;

    let outcome = run_session(&ui, &mut ledger);
    finish(&path, &ledger, outcome)?;

    println!(
        "{}",
        badge(&ui, Badge::Ok, &format!("Final result saved to {}", path.display()))
    );
    Ok(())
}

fn open(ui: &UiContext, path: &Path) -> anyhow::Result<InventoryLedger> {
    Ok(match store::load(path)? {
        Some(ledger) => {
            println!(
                "{}",
                badge(ui, Badge::Ok, &format!("Previous data loaded from {}", path.display()))
            );
            ledger
        }
        None => {
            println!("No previous save found. Starting fresh.");
            InventoryLedger::new()
        }
    })
}

/// Save the ledger after the session ends, reporting both failures when the
/// session and the save fail together.
fn finish(path: &Path, ledger: &InventoryLedger, outcome: anyhow::Result<()>) -> anyhow::Result<()> {
    let saved = store::save(path, ledger);
    match (outcome, saved) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(save_err)) => Err(save_err.into()),
        (Err(session_err), Ok(())) => Err(session_err),
        (Err(session_err), Err(save_err)) => {
            warn!(error = %session_err, "menu stopped before the failed save");
            Err(anyhow::anyhow!(
                "{}; the ledger was not saved: {}",
                session_err,
                save_err
            ))
        }
    }
}

fn run_session(ui: &UiContext, ledger: &mut InventoryLedger) -> anyhow::Result<()> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    let theme = ColorfulTheme::default();
    loop {
        let index = Select::with_theme(&theme)
            .with_prompt("Warehouse")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[index];
        if action == MenuAction::Exit {
            return Ok(());
        }
        debug!(action = action.label(), "menu action");

        match perform(ui, ledger, action) {
            Ok(message) => println!("{}", message),
            Err(err) if err.downcast_ref::<WarehouseError>().is_some() => {
                print_error(ui, &err.to_string(), hint(&err));
            }
            Err(err) => return Err(err),
        }
    }
}

fn perform(
    ui: &UiContext,
    ledger: &mut InventoryLedger,
    action: MenuAction,
) -> anyhow::Result<String> {
    match action {
        MenuAction::Add => {
            let name = prompt_item_name("Item name")?;
            let qty = prompt_quantity("Quantity")?;
            apply_add(ui, ledger, &name, qty)
        }
        MenuAction::Process => {
            let name = prompt_name("Item to process")?;
            let qty = prompt_quantity("Quantity")?;
            apply_process(ui, ledger, &name, qty)
        }
        MenuAction::Ship => {
            let name = prompt_name("Item to ship")?;
            let qty = prompt_quantity("Quantity")?;
            apply_ship(ui, ledger, &name, qty)
        }
        MenuAction::Last => last_text(ui, ledger),
        MenuAction::Next => next_text(ui, ledger),
        MenuAction::View => Ok(view_text(ui, &ledger.view_all())),
        MenuAction::Remove => {
            let name = prompt_name("Item to remove")?;
            apply_remove(ui, ledger, &name)
        }
        MenuAction::Search => {
            let name = prompt_name("Item to search")?;
            find_text(ui, ledger, &name)
        }
        MenuAction::Count => Ok(count_text(ui, ledger.count_all())),
        MenuAction::Update => {
            let old_name = prompt_name("Current item name")?;
            let new_name = prompt_item_name("New item name")?;
            let qty = prompt_quantity("New quantity")?;
            apply_update(ui, ledger, &old_name, &new_name, qty)
        }
        MenuAction::Exit => Ok(String::new()),
    }
}
