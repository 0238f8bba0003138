use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl Question {
    /// Index of the option flagged correct. Valid questions have exactly one.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.is_correct)
    }

    /// A question must carry at least two options with exactly one flagged
    /// correct; anything else is rejected at bank load.
    pub fn validate(&self) -> AppResult<()> {
        if self.options.len() < 2 {
            return Err(AppError::ValidationError(format!(
                "Question {} has fewer than two options",
                self.id
            )));
        }

        let correct_count = self.options.iter().filter(|opt| opt.is_correct).count();
        if correct_count != 1 {
            return Err(AppError::ValidationError(format!(
                "Question {} has {} correct options, expected exactly one",
                self.id, correct_count
            )));
        }

        Ok(())
    }
}
