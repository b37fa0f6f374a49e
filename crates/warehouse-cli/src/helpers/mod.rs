//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Interactive prompts for the menu (`input`)
//! - Item name, quantity and format validation (`parsing`)

mod input;
mod parsing;

pub use input::{prompt_item_name, prompt_name, prompt_quantity};
pub use parsing::{parse_quantity, validate_format, validate_item_name};
