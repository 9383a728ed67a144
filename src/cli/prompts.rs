//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::flows::Flow;

/// Landing menu: pick a flow, or `None` to leave
pub fn select_flow() -> Result<Option<Flow>> {
    let items = [
        "I know what I want - build my roadmap",
        "I don't know what I want - help me figure it out",
        "Quit",
    ];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Where are you at?")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(match choice {
        Some(0) => Some(Flow::Know),
        Some(1) => Some(Flow::Discover),
        _ => None,
    })
}

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask whether to retry after a backend failure
pub fn confirm_retry(what: &str, error: &str) -> Result<bool> {
    let message = format!("Could not {}: {}. Try again?", what, error);
    confirm_step(&message)
}
