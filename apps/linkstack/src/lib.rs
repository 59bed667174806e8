//! # linkstack
//!
//! Console front-end for `linkstack-core`: the interactive menu, the scripted
//! demo and their clap argument surface. Exposed as a library so the menu can
//! be driven from tests with in-memory streams.

pub mod cli;
