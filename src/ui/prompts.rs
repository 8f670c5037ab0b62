//! Interactive prompts

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use log::debug;

/// Ask a yes/no question; `skip` answers yes without prompting
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool, dialoguer::Error> {
    if skip {
        debug!("Confirmation skipped: {}", prompt);
        return Ok(true);
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
}

/// Let the user pick one of `items`, returning its index
pub fn select_item<T: std::fmt::Display>(
    prompt: &str,
    items: &[T],
) -> Result<usize, dialoguer::Error> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    debug!("User selected item {}", selection);
    Ok(selection)
}
