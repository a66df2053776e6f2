use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(what: &str, err: dialoguer::Error) -> AppError {
    AppError::Prompt(format!("{}: {}", what, err))
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }

    fn input(&self, message: &str, default: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .validate_with(|value: &String| -> Result<(), &str> {
                if value.trim().is_empty() {
                    Err("Please enter a valid import alias.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|e| prompt_error(message, e))
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        MultiSelect::new()
            .with_prompt(message)
            .items(items)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }

    fn notice(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }
}
