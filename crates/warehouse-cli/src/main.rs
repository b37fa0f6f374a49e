//! Warehouse CLI - track incoming stock and outgoing shipments
//!
//! This is the command-line interface for Warehouse. One-shot subcommands
//! operate on the save file directly; with no subcommand an interactive
//! menu session is started.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{items, menu, misc, views};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init(&ctx.logging_settings());

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        print_error(&ui_ctx, &e.to_string(), errors::hint(&e));
        std::process::exit(errors::exit_code(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => items::handle_add(ctx, args),
        Some(Commands::Process(args)) => items::handle_process(ctx, args),
        Some(Commands::Ship(args)) => items::handle_ship(ctx, args),
        Some(Commands::Last(args)) => views::handle_last(ctx, args),
        Some(Commands::Next(args)) => views::handle_next(ctx, args),
        Some(Commands::View(args)) => views::handle_view(ctx, args),
        Some(Commands::Remove(args)) => items::handle_remove(ctx, args),
        Some(Commands::Search(args)) => views::handle_search(ctx, args),
        Some(Commands::Count(args)) => views::handle_count(ctx, args),
        Some(Commands::Update(args)) => items::handle_update(ctx, args),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
        Some(Commands::Menu) | None => menu::handle_menu(ctx),
    }
}
