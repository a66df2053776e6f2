use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Pre-recorded answer for the next prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Input(String),
    MultiSelect(Vec<usize>),
}

/// Prompter that replays scripted answers and records every question asked.
///
/// Panics when asked a question it has no (or a mismatched) answer for.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: RefCell::new(answers.into_iter().collect()), ..Self::default() }
    }

    /// A prompter that must never be consulted.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool, AppError> {
        match self.next(message) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm answer for '{message}', got {other:?}"),
        }
    }

    fn select(&self, message: &str, _items: &[String], _default: usize) -> Result<usize, AppError> {
        match self.next(message) {
            Answer::Select(value) => Ok(value),
            other => panic!("expected select answer for '{message}', got {other:?}"),
        }
    }

    fn input(&self, message: &str, _default: &str) -> Result<String, AppError> {
        match self.next(message) {
            Answer::Input(value) => Ok(value),
            other => panic!("expected input answer for '{message}', got {other:?}"),
        }
    }

    fn multi_select(&self, message: &str, _items: &[String]) -> Result<Vec<usize>, AppError> {
        match self.next(message) {
            Answer::MultiSelect(value) => Ok(value),
            other => panic!("expected multi-select answer for '{message}', got {other:?}"),
        }
    }

    fn notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
