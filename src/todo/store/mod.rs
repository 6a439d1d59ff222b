//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. The whole collection is read and written as one unit: there is
//! no partial update, no index and no locking.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The collection lives in a single `todos.json` file (JSON array)
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts writes and can simulate write failures or corrupted data
//!
//! ## Storage Format
//!
//! ```text
//! todos.json
//! [
//!   {
//!     "id": "9f1c0c3d8d6b4c1e9a3e2b7f5d4c3b2a",
//!     "text": "Buy groceries",
//!     "createdAt": "2024-05-01T09:30:00.000Z"
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait DataStore {
    /// Read the whole collection, in stored order.
    ///
    /// Missing backing data is an empty collection, not an error. Data that
    /// exists but cannot be read or parsed yields [`TodoError::Corrupt`].
    ///
    /// [`TodoError::Corrupt`]: crate::error::TodoError::Corrupt
    fn load_todos(&self) -> Result<Vec<Todo>>;

    /// Replace the whole collection.
    fn save_todos(&mut self, todos: &[Todo]) -> Result<()>;

    /// Where the data lives, for diagnostics.
    fn location(&self) -> String;
}
