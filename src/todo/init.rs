//! # Locating the Todo File
//!
//! The todo list belongs to the directory it is used from: the backing file is
//! always `todos.json` in the current working directory. There is no global
//! list and no search up the tree.
//!
//! [`initialize`] resolves that location once and hands an explicit path to
//! the store, so nothing below the CLI reads the working directory itself and
//! tests can point separate stores at separate directories.

use crate::api::TodoApi;
use crate::store::fs::{FileStore, TODO_FILENAME};
use std::path::{Path, PathBuf};

pub struct TodoContext {
    pub api: TodoApi<FileStore>,
    /// `todos.json` inside the directory passed to [`initialize`].
    pub data_file: PathBuf,
}

pub fn initialize(cwd: &Path) -> TodoContext {
    let data_file = cwd.join(TODO_FILENAME);
    tracing::debug!(file = %data_file.display(), "resolved todo file");

    let api = TodoApi::new(FileStore::new(data_file.clone()));
    TodoContext { api, data_file }
}
