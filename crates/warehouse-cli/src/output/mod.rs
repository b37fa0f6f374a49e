//! Output formatting helpers for the CLI.
//!
//! This module renders ledger results in the three output modes
//! (JSON, plain, pretty).

mod json;
mod text;

pub use json::print_json;
pub use text::{
    added_text, count_text, peek_text, process_text, remove_text, search_text, ship_text,
    update_text, view_text,
};
