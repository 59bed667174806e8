//! # Console Menu
//!
//! The interactive loop that drives a `Stack<i64>`.
//!
//! Input is consumed as whitespace-separated tokens, so a choice and its
//! operand may share a line (`1 42`). A token that does not parse is rejected
//! together with the rest of its line, and the menu is shown again.

use super::CliError;
use linkstack_core::{Stack, StackError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

// =============================================================================
// MENU CHOICES
// =============================================================================

/// The five numbered menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Push,
    Pop,
    Peek,
    CheckEmpty,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its option, or `None` if out of range.
    #[must_use]
    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::Push),
            2 => Some(Self::Pop),
            3 => Some(Self::Peek),
            4 => Some(Self::CheckEmpty),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user picked option 5.
    Exit,
    /// Input was closed before option 5 was chosen.
    InputClosed,
}

// =============================================================================
// TOKEN READER
// =============================================================================

/// Result of reading one typed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    /// The token parsed successfully.
    Value(T),
    /// The token did not parse; the rest of its line was discarded.
    Invalid,
    /// No more input.
    Closed,
}

/// Splits a line-oriented reader into whitespace-separated tokens.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, reading further lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, CliError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    /// Next token parsed as `T`. On a parse failure the remainder of the
    /// current line is dropped.
    pub fn read<T: FromStr>(&mut self) -> Result<Input<T>, CliError> {
        let Some(token) = self.next_token()? else {
            return Ok(Input::Closed);
        };

        match token.parse() {
            Ok(value) => Ok(Input::Value(value)),
            Err(_) => {
                tracing::debug!(token = %token, "rejected input token");
                self.pending.clear();
                Ok(Input::Invalid)
            }
        }
    }
}

// =============================================================================
// MENU LOOP
// =============================================================================

/// Menu bound to an input source and an output sink.
pub struct Menu<R, W> {
    input: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self, stack: &mut dyn Stack<i64>) -> Result<MenuOutcome, CliError> {
        loop {
            self.show_options()?;

            let number = match self.input.read::<i64>()? {
                Input::Value(number) => number,
                Input::Invalid => {
                    writeln!(self.output, "Invalid input! Please enter a valid number.")?;
                    continue;
                }
                Input::Closed => {
                    writeln!(self.output)?;
                    tracing::info!("input closed, leaving menu");
                    return Ok(MenuOutcome::InputClosed);
                }
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice! Please choose a valid option.")?;
                continue;
            };
            tracing::debug!(?choice, "menu selection");

            match choice {
                MenuChoice::Push => {
                    if let Some(outcome) = self.push(stack)? {
                        return Ok(outcome);
                    }
                }
                MenuChoice::Pop => {
                    if stack.pop() {
                        writeln!(self.output, "Item popped from the stack.")?;
                    } else {
                        writeln!(self.output, "Stack is empty! Cannot pop.")?;
                    }
                }
                MenuChoice::Peek => match stack.peek() {
                    Ok(top) => writeln!(self.output, "Top item on the stack: {}", top)?,
                    Err(StackError::Empty) => {
                        writeln!(self.output, "Stack is empty! Cannot peek.")?;
                    }
                },
                MenuChoice::CheckEmpty => {
                    if stack.is_empty() {
                        writeln!(self.output, "Stack is empty.")?;
                    } else {
                        writeln!(self.output, "Stack is not empty.")?;
                    }
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program...")?;
                    self.output.flush()?;
                    return Ok(MenuOutcome::Exit);
                }
            }
        }
    }

    /// Prompt for a value and push it. Returns an outcome only when the
    /// session has to end.
    fn push(&mut self, stack: &mut dyn Stack<i64>) -> Result<Option<MenuOutcome>, CliError> {
        write!(self.output, "Enter the value to push onto the stack: ")?;
        self.output.flush()?;

        match self.input.read::<i64>()? {
            Input::Value(value) => {
                stack.push(value);
                tracing::debug!(value, "pushed");
                writeln!(self.output, "Value {} pushed onto the stack.", value)?;
            }
            Input::Invalid => {
                writeln!(self.output, "Invalid input! Please enter a valid integer.")?;
            }
            Input::Closed => {
                writeln!(self.output)?;
                tracing::info!("input closed at push prompt");
                return Ok(Some(MenuOutcome::InputClosed));
            }
        }
        Ok(None)
    }

    fn show_options(&mut self) -> Result<(), CliError> {
        write!(
            self.output,
            "\n----- Stack Operations -----\n\
             1. Push item onto stack\n\
             2. Pop item from stack\n\
             3. Peek top item\n\
             4. Check if stack is empty\n\
             5. Exit\n\
             Enter your choice: "
        )?;
        self.output.flush()?;
        Ok(())
    }
}
