//! # Prompting
//!
//! Flows talk to the operator only through the [`Prompter`] trait, so they stay
//! free of terminal code. The binary provides a `console`-backed prompter; tests
//! use `test_utils::ScriptedPrompter`.
//!
//! Field validation lives here as plain functions returning the message to show.
//! [`Prompter::input_validated`] loops on the same field until the validator
//! accepts, so a validation failure never leaves the prompt.

use crate::commands::CmdResult;
use crate::error::{Result, TrackerError};
use crate::lookup::Choices;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const FIELD_REQUIRED: &str = "**FIELD REQUIRED**";
pub const NUMBER_REQUIRED: &str = "**VALID NUMBER REQUIRED**";
pub const SALARY_NEGATIVE: &str = "**SALARY CANNOT BE NEGATIVE**";

pub trait Prompter {
    /// Asks for one of `options` and returns the option picked, verbatim.
    fn select(&mut self, message: &str, options: &[String]) -> Result<String>;

    /// Asks for a line of free text.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Shows a validation message for the field being asked.
    fn invalid(&mut self, message: &str);

    /// Shows the outcome of a flow (tables, confirmations, guidance).
    fn show(&mut self, result: &CmdResult);

    /// Re-asks the same field until `parse` accepts the answer.
    fn input_parsed<T>(
        &mut self,
        message: &str,
        parse: &dyn Fn(&str) -> std::result::Result<T, String>,
    ) -> Result<T>
    where
        Self: Sized,
    {
        loop {
            let answer = self.input(message)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.invalid(&reason),
            }
        }
    }

    fn input_validated(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String>
    where
        Self: Sized,
    {
        self.input_parsed(message, &|answer| validate(answer).map(|()| answer.to_string()))
    }

    /// Single-select over `choices`, returning the chosen value.
    fn choose<T: Clone>(&mut self, message: &str, choices: &Choices<T>) -> Result<T>
    where
        Self: Sized,
    {
        self.choose_labelled(message, choices).map(|(_, value)| value)
    }

    /// Like [`Prompter::choose`], also returning the label that was picked.
    fn choose_labelled<T: Clone>(
        &mut self,
        message: &str,
        choices: &Choices<T>,
    ) -> Result<(String, T)>
    where
        Self: Sized,
    {
        if choices.is_empty() {
            return Err(TrackerError::Selection(format!(
                "nothing to choose from for \"{}\"",
                message
            )));
        }
        let label = self.select(message, choices.labels())?;
        match choices.resolve(&label) {
            Some(value) => Ok((label, value)),
            None => Err(TrackerError::Selection(format!(
                "\"{}\" is not one of the choices",
                label
            ))),
        }
    }
}

pub fn required(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        Err(FIELD_REQUIRED.to_string())
    } else {
        Ok(())
    }
}

/// Parses a salary: plain or scientific decimal notation, surrounding
/// whitespace ignored, negatives rejected.
pub fn parse_salary(input: &str) -> std::result::Result<Decimal, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NUMBER_REQUIRED.to_string());
    }
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| NUMBER_REQUIRED.to_string())?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(SALARY_NEGATIVE.to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedPrompter;

    #[test]
    fn required_rejects_only_empty() {
        assert!(required("").is_err());
        assert!(required("Ada").is_ok());
        assert!(required(" ").is_ok());
    }

    #[test]
    fn salary_accepts_numbers() {
        assert_eq!(parse_salary("50000"), Ok(Decimal::from(50000)));
        assert_eq!(parse_salary(" 1234.50 "), Ok(Decimal::new(123450, 2)));
        assert_eq!(parse_salary("0"), Ok(Decimal::ZERO));
        assert_eq!(parse_salary("5e4"), Ok(Decimal::from(50000)));
    }

    #[test]
    fn salary_rejects_non_numbers() {
        assert_eq!(parse_salary(""), Err(NUMBER_REQUIRED.to_string()));
        assert_eq!(parse_salary("abc"), Err(NUMBER_REQUIRED.to_string()));
        assert_eq!(parse_salary("12k"), Err(NUMBER_REQUIRED.to_string()));
    }

    #[test]
    fn salary_rejects_negatives() {
        assert_eq!(parse_salary("-1"), Err(SALARY_NEGATIVE.to_string()));
    }

    #[test]
    fn validated_input_repeats_until_accepted() {
        let mut prompter = ScriptedPrompter::new().answer("").answer("").answer("Ada");
        let value = prompter.input_validated("First name: ", &required).unwrap();

        assert_eq!(value, "Ada");
        assert_eq!(prompter.invalid_messages, vec![FIELD_REQUIRED, FIELD_REQUIRED]);
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn accepted_input_is_asked_once() {
        let mut prompter = ScriptedPrompter::new().answer("Lovelace").answer("unused");
        prompter.input_validated("Last name: ", &required).unwrap();
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn parsed_input_returns_the_parsed_value() {
        let mut prompter = ScriptedPrompter::new().answers(&["lots", "-5", "42000"]);
        let value = prompter.input_parsed("Salary: ", &parse_salary).unwrap();

        assert_eq!(value, Decimal::from(42000));
        assert_eq!(prompter.invalid_messages, [NUMBER_REQUIRED, SALARY_NEGATIVE]);
    }

    #[test]
    fn choose_labelled_returns_label_and_value() {
        let mut prompter = ScriptedPrompter::new().answer("Sales");
        let choices = Choices::new(vec![
            ("Engineering".to_string(), 1, 1_i64),
            ("Sales".to_string(), 2, 2_i64),
        ]);
        assert_eq!(
            prompter.choose_labelled("Department?", &choices).unwrap(),
            ("Sales".to_string(), 2)
        );
    }

    #[test]
    fn choose_on_empty_choices_is_a_selection_error() {
        let mut prompter = ScriptedPrompter::new();
        let choices: Choices<i64> = Choices::new(vec![]);
        assert!(matches!(
            prompter.choose("Role?", &choices),
            Err(TrackerError::Selection(_))
        ));
    }
}
