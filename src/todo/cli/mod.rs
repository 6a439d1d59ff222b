//! # CLI Behavior
//!
//! This is one possible UI client for the todo library. It is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Verbs
//!
//! - `todo add <text...>`: every remaining word is joined with single spaces
//! - `todo list`: count plus one line per item, or `No todos found.`
//! - `todo remove <id>`: exact id match
//! - `todo help` or bare `todo`: usage text with examples
//!
//! A missing argument is a usage error and prints that command's usage line.
//! An unrecognised verb is an error naming the verb, followed by the short
//! usage line. Both exit with status 1.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap, help text
//! - `logging`: tracing subscriber for `-v` / `RUST_LOG`

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
