//! Terminal frontend built on inquire prompts.

use inquire::error::InquireError;
use inquire::{Confirm, Text};

use super::viewer::{Frontend, ViewError, WINDOW_TITLE};

#[derive(Debug, Default)]
pub struct InquireFrontend;

impl InquireFrontend {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(err: InquireError) -> ViewError {
    ViewError::Prompt(err.to_string())
}

impl Frontend for InquireFrontend {
    fn read_name(&mut self) -> Result<Option<String>, ViewError> {
        match Text::new("Pokémon Name")
            .with_help_message("Enter to Get Info, Esc to quit")
            .prompt()
        {
            Ok(name) => Ok(Some(name)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn show(&mut self, screen: &str) {
        println!();
        println!("═══ {} ═══", WINDOW_TITLE);
        println!("{}", screen);
        println!();
    }

    fn show_error(&mut self, title: &str, message: &str) -> Result<(), ViewError> {
        println!("❌ {}: {}", title, message);
        match Confirm::new("OK").with_default(true).prompt() {
            Ok(_) | Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(()),
            Err(e) => Err(prompt_error(e)),
        }
    }
}
