//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::{Backend, CliError, Menu, MenuOutcome};
use linkstack_core::{LinkedStack, Stack, VecStack};
use std::fmt;
use std::io::{BufRead, Write};

/// Build an empty stack on the requested backing.
pub fn new_stack(backend: Backend) -> Box<dyn Stack<i64>> {
    match backend {
        Backend::Linked => Box::new(LinkedStack::new()),
        Backend::Vec => Box::new(VecStack::new()),
    }
}

// =============================================================================
// MENU COMMAND
// =============================================================================

/// Run the interactive menu until the user exits or input closes.
pub fn cmd_menu<R: BufRead, W: Write>(
    backend: Backend,
    input: R,
    output: W,
) -> Result<MenuOutcome, CliError> {
    tracing::info!(?backend, "starting menu");

    let mut stack = new_stack(backend);
    let outcome = Menu::new(input, output).run(stack.as_mut())?;

    tracing::info!(?outcome, "menu finished");
    Ok(outcome)
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// One step of the scripted demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Push(i64),
    Pop,
    Peek,
    IsEmpty,
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => write!(f, "push({})", value),
            Self::Pop => write!(f, "pop()"),
            Self::Peek => write!(f, "peek()"),
            Self::IsEmpty => write!(f, "is_empty()"),
        }
    }
}

/// The reference scenario exercised by `linkstack demo`.
pub const DEMO_SCRIPT: [DemoStep; 11] = [
    DemoStep::Push(5),
    DemoStep::Push(10),
    DemoStep::Push(15),
    DemoStep::Peek,
    DemoStep::Pop,
    DemoStep::Peek,
    DemoStep::IsEmpty,
    DemoStep::Pop,
    DemoStep::Pop,
    DemoStep::IsEmpty,
    DemoStep::Pop,
];

/// Apply one step and render its result.
pub fn apply_step(stack: &mut dyn Stack<i64>, step: DemoStep) -> String {
    match step {
        DemoStep::Push(value) => stack.push(value).to_string(),
        DemoStep::Pop => stack.pop().to_string(),
        DemoStep::Peek => match stack.peek() {
            Ok(top) => top.to_string(),
            Err(e) => format!("error: {}", e),
        },
        DemoStep::IsEmpty => stack.is_empty().to_string(),
    }
}

/// Run the scripted scenario and print each step with its result.
pub fn cmd_demo<W: Write>(backend: Backend, mut output: W) -> Result<(), CliError> {
    tracing::info!(?backend, steps = DEMO_SCRIPT.len(), "running demo");

    let mut stack = new_stack(backend);

    writeln!(output, "linkstack demo ({} backing)", backend)?;
    writeln!(output, "==========================")?;
    for step in DEMO_SCRIPT {
        let result = apply_step(stack.as_mut(), step);
        writeln!(output, "{:<12} -> {}", step.to_string(), result)?;
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_step_display() {
        assert_eq!(DemoStep::Push(5).to_string(), "push(5)");
        assert_eq!(DemoStep::IsEmpty.to_string(), "is_empty()");
    }

    #[test]
    fn peek_step_reports_empty_error() {
        let mut stack = new_stack(Backend::Linked);
        assert_eq!(apply_step(stack.as_mut(), DemoStep::Peek), "error: Stack is empty");
        assert_eq!(apply_step(stack.as_mut(), DemoStep::Pop), "false");
    }

    #[test]
    fn demo_script_results() {
        for backend in [Backend::Linked, Backend::Vec] {
            let mut stack = new_stack(backend);
            let results: Vec<String> = DEMO_SCRIPT
                .iter()
                .map(|step| apply_step(stack.as_mut(), *step))
                .collect();
            assert_eq!(
                results,
                [
                    "true", "true", "true", "15", "true", "10", "false", "true", "true", "true",
                    "false"
                ]
            );
        }
    }
}
