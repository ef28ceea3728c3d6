//! Terminal prompt backed by `inquire`

use inquire::{InquireError, Select};
use scuffle_battle::{Prompt, PromptError};

/// Arrow-key selection list on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompt;

impl InquirePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for InquirePrompt {
    fn select(&mut self, title: &str, labels: &[&str]) -> Result<usize, PromptError> {
        if labels.is_empty() {
            return Err(PromptError::NoOptions(title.to_string()));
        }

        let choice = Select::new(title, labels.to_vec())
            .with_page_size(labels.len())
            .raw_prompt()
            .map_err(map_inquire_error)?;

        tracing::debug!(title, index = choice.index, label = choice.value, "prompt answered");
        Ok(choice.index)
    }
}

fn map_inquire_error(e: InquireError) -> PromptError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Aborted
        }
        other => PromptError::Failed(other.to_string()),
    }
}
