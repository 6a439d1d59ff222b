use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::Todo;
use crate::store::DataStore;

/// The collection as read for a command, plus why it came back empty if the
/// backing data was unusable.
#[derive(Debug, Default)]
pub struct Loaded {
    pub todos: Vec<Todo>,
    pub diagnostic: Option<String>,
}

impl Loaded {
    /// Moves the diagnostic, if any, into `result` as a warning.
    pub fn report_into(&mut self, result: &mut CmdResult) {
        if let Some(diagnostic) = self.diagnostic.take() {
            result.add_message(CmdMessage::warning(diagnostic));
        }
    }
}

/// Loads every todo, treating unreadable data as an empty collection.
///
/// Corruption is handed back as a diagnostic rather than failing the command;
/// callers decide how to surface it. Any later save overwrites the corrupted data.
pub fn load_all<S: DataStore>(store: &S) -> Result<Loaded> {
    match store.load_todos() {
        Ok(todos) => Ok(Loaded {
            todos,
            diagnostic: None,
        }),
        Err(err @ TodoError::Corrupt { .. }) => {
            tracing::debug!(location = %store.location(), error = %err, "treating todo data as empty");
            Ok(Loaded {
                todos: Vec::new(),
                diagnostic: Some(format!("{}; starting with an empty list", err)),
            })
        }
        Err(err) => Err(err),
    }
}

/// Overwrites the stored collection. Failures are never swallowed.
pub fn save_all<S: DataStore>(store: &mut S, todos: &[Todo]) -> Result<()> {
    store.save_todos(todos)
}
