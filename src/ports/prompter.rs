use crate::domain::AppError;

/// Port for interactive user prompts.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError>;

    /// Pick one item; returns its index.
    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize, AppError>;

    /// Read a non-empty line of text, pre-filled with `default`.
    fn input(&self, message: &str, default: &str) -> Result<String, AppError>;

    /// Pick any number of items; returns their indices.
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>, AppError>;

    /// Show a warning that gives context to the questions that follow.
    fn notice(&self, message: &str);
}
