//! Interactive prompts used by the menu.

use dialoguer::Input;

use super::parsing::{parse_quantity, validate_item_name};

/// Prompt for an item name that passes `validate_item_name`.
pub fn prompt_item_name(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            validate_item_name(value).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read item name: {}", e))
}

/// Prompt for a name used only as a lookup key (no charset check).
pub fn prompt_name(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read item name: {}", e))
}

/// Prompt for a positive integer quantity.
pub fn prompt_quantity(prompt: &str) -> anyhow::Result<u32> {
    let raw = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            parse_quantity(value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read quantity: {}", e))?;
    Ok(parse_quantity(&raw)?)
}
