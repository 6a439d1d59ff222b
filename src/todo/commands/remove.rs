use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::store::DataStore;

use super::helpers::{load_all, save_all};

/// Removes the first todo whose id equals `id` exactly.
///
/// A miss fails with [`TodoError::NotFound`] before anything is written.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut loaded = load_all(store)?;
    let mut result = CmdResult::default();
    loaded.report_into(&mut result);

    let Some(position) = loaded.todos.iter().position(|t| t.id == id) else {
        // The result is discarded on error, so the diagnostic goes to the log
        for warning in result.warnings() {
            tracing::warn!("{}", warning.content);
        }
        return Err(TodoError::NotFound(id.to_string()));
    };

    let removed = loaded.todos.remove(position);
    save_all(store, &loaded.todos)?;

    tracing::debug!(id = %removed.id, remaining = loaded.todos.len(), "removed todo");
    result.add_message(CmdMessage::success(format!("Removed: {}", removed.text)));
    Ok(result.with_affected_todos(vec![removed]))
}
