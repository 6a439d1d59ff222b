use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    writes: usize,
    fail_writes: bool,
    corrupt: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save_todos` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make loads behave as if the backing data were unparsable.
    pub fn set_corrupt(&mut self, corrupt: bool) {
        self.corrupt = corrupt;
    }
}

impl DataStore for InMemoryStore {
    fn load_todos(&self) -> Result<Vec<Todo>> {
        if self.corrupt {
            return Err(TodoError::Corrupt {
                location: self.location(),
                reason: "simulated corruption".to_string(),
            });
        }
        Ok(self.todos.clone())
    }

    fn save_todos(&mut self, todos: &[Todo]) -> Result<()> {
        if self.fail_writes {
            return Err(TodoError::Io(io::Error::other("Write failed")));
        }
        self.todos = todos.to_vec();
        self.corrupt = false;
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.todos.push(Todo::new(format!("Todo {}", i + 1)));
            }
            self
        }

        /// Seed a todo with a fixed id, bypassing id generation.
        pub fn with_todo(mut self, id: &str, text: &str) -> Self {
            let mut todo = Todo::new(text);
            todo.id = id.to_string();
            self.store.todos.push(todo);
            self
        }

        pub fn corrupted(mut self) -> Self {
            self.store.corrupt = true;
            self
        }
    }
}
