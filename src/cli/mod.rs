//! CLI module for tasklist - command-line interface and subcommands.
//!
//! The CLI is the presentation layer: it loads the store, applies one user
//! intent, prints the resulting list and waits for the write to land.

pub mod commands;

pub use commands::Cli;
