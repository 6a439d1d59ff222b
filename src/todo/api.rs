//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for todo
//! operations, whatever the UI.
//!
//! The API dispatches to the matching command function and returns structured
//! results. It holds no business logic (that lives in `commands/*.rs`) and does
//! no presentation: no stdout, no stderr, no exit codes.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands::{self, helpers};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text.into())
    }

    pub fn list_todos(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_todo(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// The raw collection, with unreadable data treated as empty.
    pub fn load_all(&self) -> Result<Vec<Todo>> {
        let loaded = helpers::load_all(&self.store)?;
        if let Some(diagnostic) = &loaded.diagnostic {
            tracing::warn!("{}", diagnostic);
        }
        Ok(loaded.todos)
    }

    pub fn save_all(&mut self, todos: &[Todo]) -> Result<()> {
        helpers::save_all(&mut self.store, todos)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
