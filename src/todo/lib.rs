//! # Todo Architecture
//!
//! A small todo list kept in a JSON file. The crate is a library with a thin
//! CLI client on top, layered so that everything below the CLI is plain Rust
//! in, plain Rust out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, prints usage           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / remove                                      │
//! │  - Whole-collection read, one change, whole-collection write│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (todos.json), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unreadable Data
//!
//! A `todos.json` that cannot be read or parsed is treated as an empty list.
//! The command still succeeds; the problem is logged and returned as a warning
//! message in the command's result. The next add or remove overwrites the file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Todo`] record
//! - [`init`]: Resolving the todo file from the working directory
//! - [`error`]: Error types
//! - `cli`: Argument parsing, help text and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

/// One-line usage shown after an unknown command.
pub const SHORT_USAGE: &str = "Usage: todo <command> [arguments]";
