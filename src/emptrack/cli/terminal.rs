//! Terminal-backed [`Prompter`].
//!
//! On a TTY, selects are arrow-key lists redrawn in place and text input is
//! read through `console` in raw mode, so Ctrl-C arrives as an interrupted
//! read instead of killing the process. When stdin is not a terminal
//! (piped input), selects fall back to a numbered list answered by line
//! from the prompter's input reader.

use super::render;
use super::styles::TRACKER_THEME;
use console::{Key, Term};
use emptrack::api::CmdResult;
use emptrack::error::{Result, TrackerError};
use emptrack::prompt::Prompter;
use std::io::{self, BufRead, IsTerminal};

const CURSOR: &str = "❯";
pub const BANNER: &str = "WELCOME TO EMPLOYEE TRACKER";

pub struct TermPrompter<R = io::BufReader<io::Stdin>> {
    term: Term,
    input: R,
    interactive: bool,
}

impl TermPrompter {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self {
            term,
            input: io::BufReader::new(io::stdin()),
            interactive,
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> TermPrompter<R> {
    /// Line-mode prompter reading answers from `input`.
    #[cfg(test)]
    fn with_input(input: R) -> Self {
        Self {
            term: Term::stdout(),
            input,
            interactive: false,
        }
    }

    pub fn banner(&self) -> Result<()> {
        let rule = "=".repeat(BANNER.len());
        self.term.write_line(&rule)?;
        self.term
            .write_line(&TRACKER_THEME.banner.apply_to(BANNER).to_string())?;
        self.term.write_line(&rule)?;
        Ok(())
    }

    /// Puts the terminal back the way it was found.
    pub fn restore(&self) {
        if self.interactive {
            let _ = self.term.show_cursor();
        }
    }

    fn question(&self, message: &str) -> String {
        format!(
            "{} {}",
            TRACKER_THEME.question.apply_to("?"),
            TRACKER_THEME.question.apply_to(message)
        )
    }

    fn answered(&self, message: &str, answer: &str) -> io::Result<()> {
        self.term.write_line(&format!(
            "{} {}",
            self.question(message),
            TRACKER_THEME.answer.apply_to(answer)
        ))
    }

    fn select_with_keys(&mut self, message: &str, options: &[String]) -> io::Result<usize> {
        let mut cursor = 0;
        self.term.hide_cursor()?;
        let picked = loop {
            self.term.write_line(&self.question(message))?;
            for (i, option) in options.iter().enumerate() {
                if i == cursor {
                    self.term.write_line(&format!(
                        "{} {}",
                        TRACKER_THEME.cursor.apply_to(CURSOR),
                        TRACKER_THEME.cursor.apply_to(option)
                    ))?;
                } else {
                    self.term.write_line(&format!("  {}", option))?;
                }
            }

            let key = self.term.read_key();
            self.term.clear_last_lines(options.len() + 1)?;
            match key? {
                Key::ArrowUp | Key::Char('k') => {
                    cursor = (cursor + options.len() - 1) % options.len();
                }
                Key::ArrowDown | Key::Char('j') | Key::Tab => {
                    cursor = (cursor + 1) % options.len();
                }
                Key::Home => cursor = 0,
                Key::End => cursor = options.len() - 1,
                Key::Enter => break cursor,
                _ => {}
            }
        };
        self.term.show_cursor()?;
        self.answered(message, &options[picked])?;
        Ok(picked)
    }

    fn select_by_number(&mut self, message: &str, options: &[String]) -> Result<usize> {
        self.term.write_line(&self.question(message))?;
        for (i, option) in options.iter().enumerate() {
            self.term.write_line(&format!("  {}) {}", i + 1, option))?;
        }
        loop {
            let answer = self.read_text("  Answer: ")?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.invalid(&out_of_range(options.len())),
            }
        }
    }

    fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        if self.interactive {
            return self.term.read_line().map_err(from_io);
        }
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(from_io)?;
        if read == 0 {
            return Err(TrackerError::Interrupted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> Prompter for TermPrompter<R> {
    fn select(&mut self, message: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(TrackerError::Selection(format!(
                "nothing to choose from for \"{}\"",
                message
            )));
        }
        let picked = if self.interactive {
            let picked = self.select_with_keys(message, options);
            if picked.is_err() {
                let _ = self.term.show_cursor();
            }
            picked.map_err(from_io)?
        } else {
            self.select_by_number(message, options)?
        };
        Ok(options[picked].clone())
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let prompt = format!("{} ", self.question(message));
        self.read_text(&prompt)
    }

    fn invalid(&mut self, message: &str) {
        let _ = self
            .term
            .write_line(&TRACKER_THEME.invalid.apply_to(message).to_string());
    }

    fn show(&mut self, result: &CmdResult) {
        render::print_result(result);
    }
}

fn out_of_range(count: usize) -> String {
    format!("**ENTER A NUMBER FROM 1 TO {}**", count)
}

/// Ctrl-C in raw mode and end of input both end the session.
fn from_io(err: io::Error) -> TrackerError {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => TrackerError::Interrupted,
        _ => TrackerError::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> Vec<String> {
        ["Engineer", "Lead Engineer", "Salesperson"]
            .iter()
            .map(|o| o.to_string())
            .collect()
    }

    #[test]
    fn numbered_select_reasks_until_in_range() {
        let mut ui = TermPrompter::with_input(Cursor::new("0\n9\nabc\n2\n"));

        let picked = ui.select("Which role?", &options()).unwrap();

        assert_eq!(picked, "Lead Engineer");
        assert!(matches!(ui.input("Next?"), Err(TrackerError::Interrupted)));
    }

    #[test]
    fn numbered_select_accepts_padded_answer() {
        let mut ui = TermPrompter::with_input(Cursor::new(" 3 \r\n"));
        assert_eq!(ui.select("Which role?", &options()).unwrap(), "Salesperson");
    }

    #[test]
    fn end_of_input_interrupts_select() {
        let mut ui = TermPrompter::with_input(Cursor::new(""));
        assert!(matches!(
            ui.select("Which role?", &options()),
            Err(TrackerError::Interrupted)
        ));
    }

    #[test]
    fn end_of_input_interrupts_a_half_answered_select() {
        let mut ui = TermPrompter::with_input(Cursor::new("7\n"));
        assert!(matches!(
            ui.select("Which role?", &options()),
            Err(TrackerError::Interrupted)
        ));
    }

    #[test]
    fn empty_options_are_a_selection_error() {
        let mut ui = TermPrompter::with_input(Cursor::new("1\n"));
        assert!(matches!(ui.select("Which role?", &[]), Err(TrackerError::Selection(_))));
    }

    #[test]
    fn text_input_drops_line_ending_only() {
        let mut ui = TermPrompter::with_input(Cursor::new("Ada \r\n\n"));

        assert_eq!(ui.input("First name?").unwrap(), "Ada ");
        assert_eq!(ui.input("Last name?").unwrap(), "");
        assert!(matches!(ui.input("Role?"), Err(TrackerError::Interrupted)));
    }

    #[test]
    fn range_message_names_the_bounds() {
        assert_eq!(out_of_range(3), "**ENTER A NUMBER FROM 1 TO 3**");
    }

    #[test]
    fn interrupt_and_eof_end_the_session() {
        assert!(matches!(
            from_io(io::Error::new(io::ErrorKind::Interrupted, "read interrupted")),
            TrackerError::Interrupted
        ));
        assert!(matches!(
            from_io(io::Error::from(io::ErrorKind::UnexpectedEof)),
            TrackerError::Interrupted
        ));
    }

    #[test]
    fn other_io_errors_stay_io() {
        assert!(matches!(
            from_io(io::Error::from(io::ErrorKind::BrokenPipe)),
            TrackerError::Io(_)
        ));
    }
}
