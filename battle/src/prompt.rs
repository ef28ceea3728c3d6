//! Interactive selection, abstracted away from any terminal library

use std::collections::VecDeque;

use crate::error::PromptError;

/// Asks a human to pick one of several labeled options
///
/// Implementations block until an answer is available. Every error is fatal
/// to the battle that asked.
pub trait Prompt {
    /// Return the index of the chosen label
    fn select(&mut self, title: &str, labels: &[&str]) -> Result<usize, PromptError>;

    /// Pick a value by its label
    fn select_one<'a, T>(
        &mut self,
        title: &str,
        options: &'a [(String, T)],
    ) -> Result<&'a T, PromptError>
    where
        Self: Sized,
    {
        if options.is_empty() {
            return Err(PromptError::NoOptions(title.to_string()));
        }

        let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
        let index = self.select(title, &labels)?;
        options
            .get(index)
            .map(|(_, value)| value)
            .ok_or(PromptError::OutOfRange {
                index,
                len: options.len(),
            })
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn select(&mut self, title: &str, labels: &[&str]) -> Result<usize, PromptError> {
        (**self).select(title, labels)
    }
}

/// Answers prompts from a queue of pre-recorded replies
///
/// Each reply is matched against the offered labels by text, so scripts read
/// like what a user would click. Running out of replies aborts, like a user
/// closing the prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    replies: VecDeque<String>,
    /// Titles of every prompt shown, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue another reply
    pub fn push(&mut self, reply: impl Into<String>) {
        self.replies.push_back(reply.into());
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, title: &str, labels: &[&str]) -> Result<usize, PromptError> {
        self.asked.push(title.to_string());
        let reply = self.replies.pop_front().ok_or(PromptError::Aborted)?;
        labels
            .iter()
            .position(|label| *label == reply)
            .ok_or_else(|| PromptError::Failed(format!("{reply:?} is not one of {labels:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, u32)> {
        vec![
            ("Scratch".to_string(), 5),
            ("Fireball".to_string(), 10),
            ("Flamethrower".to_string(), 15),
        ]
    }

    #[test]
    fn test_select_one_returns_value() {
        let mut prompt = ScriptedPrompt::new(["Fireball"]);
        let opts = options();
        assert_eq!(prompt.select_one("Choose your move", &opts), Ok(&10));
        assert_eq!(prompt.asked, vec!["Choose your move"]);
    }

    #[test]
    fn test_exhausted_script_aborts() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        let opts = options();
        assert_eq!(
            prompt.select_one("Choose your move", &opts),
            Err(PromptError::Aborted)
        );
    }

    #[test]
    fn test_unknown_reply_fails() {
        let mut prompt = ScriptedPrompt::new(["Hyper Beam"]);
        let opts = options();
        assert!(matches!(
            prompt.select_one("Choose your move", &opts),
            Err(PromptError::Failed(_))
        ));
    }

    #[test]
    fn test_no_options() {
        let mut prompt = ScriptedPrompt::new(["anything"]);
        let opts: Vec<(String, u32)> = Vec::new();
        assert_eq!(
            prompt.select_one("Choose your move", &opts),
            Err(PromptError::NoOptions("Choose your move".to_string()))
        );
        assert_eq!(prompt.remaining(), 1);
    }

    struct Fixed(usize);

    impl Prompt for Fixed {
        fn select(&mut self, _title: &str, _labels: &[&str]) -> Result<usize, PromptError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let opts = options();
        assert_eq!(
            Fixed(3).select_one("Choose your move", &opts),
            Err(PromptError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_duplicate_labels_resolve_by_position() {
        let opts = vec![("Tackle".to_string(), 'a'), ("Tackle".to_string(), 'b')];
        assert_eq!(Fixed(1).select_one("Choose", &opts), Ok(&'b'));
    }
}
