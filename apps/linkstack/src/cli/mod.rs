//! # linkstack CLI Module
//!
//! This module implements the CLI interface for linkstack.
//!
//! ## Available Commands
//!
//! - `menu` - Interactive push/pop/peek menu (default)
//! - `demo` - Run the reference push/pop/peek scenario and print each step

mod commands;
mod menu;

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;

pub use commands::*;
pub use menu::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// linkstack - a linked LIFO stack at the console
///
/// Push, pop and peek integers on a stack of singly-linked nodes.
#[derive(Parser, Debug)]
#[command(name = "linkstack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Stack backing: "linked" (singly-linked nodes) or "vec" (contiguous buffer)
    #[arg(short = 'B', long, global = true, value_enum, default_value_t = Backend::Linked)]
    pub backend: Backend,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Interactive stack menu
    Menu,

    /// Run the scripted push/pop/peek scenario
    Demo,
}

/// Storage behind the `Stack` contract.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Singly-linked nodes
    Linked,
    /// Contiguous vector
    Vec,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linked => f.write_str("linked"),
            Self::Vec => f.write_str("vec"),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by the binary.
///
/// Stack emptiness is not one of them: the menu handles it in place.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the console or writing to it failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments against the given console streams.
pub fn execute<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Demo) => cmd_demo(cli.backend, output),
        Some(Commands::Menu) | None => {
            // No subcommand - open the menu by default
            cmd_menu(cli.backend, input, output).map(|_| ())
        }
    }
}
