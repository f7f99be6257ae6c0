//! Helpers for driving flows without a terminal.

use crate::commands::{CmdResult, MessageLevel};
use crate::error::{Result, TrackerError};
use crate::prompt::Prompter;
use std::collections::VecDeque;

/// A [`Prompter`] that replays queued answers.
///
/// Selects are answered by label: the queued answer must equal one of the
/// offered options exactly. Running out of answers behaves like end of input
/// and returns [`TrackerError::Interrupted`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every prompt message asked, in order.
    pub prompts: Vec<String>,
    /// Options offered by each select, in order.
    pub offered: Vec<Vec<String>>,
    pub invalid_messages: Vec<String>,
    pub shown: Vec<CmdResult>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answers.push_back(answer.to_string());
        self
    }

    pub fn answers(mut self, answers: &[&str]) -> Self {
        self.answers.extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    /// Contents of every shown message at `level`, across all results.
    pub fn shown_messages(&self, level: MessageLevel) -> Vec<String> {
        self.shown
            .iter()
            .flat_map(|r| r.messages.iter())
            .filter(|m| m.level == level)
            .map(|m| m.content.clone())
            .collect()
    }

    fn next(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.answers.pop_front().ok_or(TrackerError::Interrupted)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<String> {
        self.offered.push(options.to_vec());
        let answer = self.next(message)?;
        if options.contains(&answer) {
            Ok(answer)
        } else {
            Err(TrackerError::Selection(format!(
                "scripted answer \"{}\" is not among {:?}",
                answer, options
            )))
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        self.next(message)
    }

    fn invalid(&mut self, message: &str) {
        self.invalid_messages.push(message.to_string());
    }

    fn show(&mut self, result: &CmdResult) {
        self.shown.push(result.clone());
    }
}
