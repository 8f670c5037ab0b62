//! Terminal UI: progress spinners and interactive prompts

mod prompts;
mod spinner;

pub use prompts::{confirm_action, select_item};
pub use spinner::{create_spinner, finish_spinner};
