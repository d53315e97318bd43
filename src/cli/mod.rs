//! CLI module for tbxmeta - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for generating and
//! inspecting toolbox metadata documents.

pub mod commands;

pub use commands::Cli;
