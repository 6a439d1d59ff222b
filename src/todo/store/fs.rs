use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const TODO_FILENAME: &str = "todos.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `todos.json` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(TODO_FILENAME))
    }

    fn corrupt(&self, reason: impl ToString) -> TodoError {
        TodoError::Corrupt {
            location: self.location(),
            reason: reason.to_string(),
        }
    }
}

impl DataStore for FileStore {
    fn load_todos(&self) -> Result<Vec<Todo>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no todo file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.corrupt(e)),
        };

        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    fn save_todos(&mut self, todos: &[Todo]) -> Result<()> {
        let mut content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        content.push('\n');

        // Write next to the target so the rename stays on one filesystem
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp_file = dir.join(format!(".todos-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodoError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = todos.len(), "saved todos");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load_todos().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let (_dir, mut store) = setup();
        let todos = vec![Todo::new("first"), Todo::new(""), Todo::new("third")];

        store.save_todos(&todos).unwrap();
        let loaded = store.load_todos().unwrap();

        assert_eq!(loaded, todos);
    }

    #[test]
    fn writes_pretty_json_array() {
        let (dir, mut store) = setup();
        store.save_todos(&[Todo::new("Buy milk")]).unwrap();

        let raw = fs::read_to_string(dir.path().join(TODO_FILENAME)).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"text\": \"Buy milk\""));
    }

    #[test]
    fn reads_records_written_by_hand() {
        let (dir, store) = setup();
        fs::write(
            dir.path().join(TODO_FILENAME),
            r#"[{"id":"1","text":"Test todo","createdAt":"2023-01-01T00:00:00.000Z"}]"#,
        )
        .unwrap();

        let loaded = store.load_todos().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[0].text, "Test todo");
    }

    #[test]
    fn invalid_json_is_reported_as_corrupt() {
        let (dir, store) = setup();
        fs::write(dir.path().join(TODO_FILENAME), "invalid json").unwrap();

        let err = store.load_todos().unwrap_err();
        assert!(matches!(err, TodoError::Corrupt { .. }));
    }

    #[test]
    fn wrong_shape_is_reported_as_corrupt() {
        let (dir, store) = setup();
        fs::write(dir.path().join(TODO_FILENAME), r#"{"id":"1"}"#).unwrap();

        assert!(matches!(
            store.load_todos(),
            Err(TodoError::Corrupt { .. })
        ));
    }

    #[test]
    fn unreadable_path_is_reported_as_corrupt() {
        let (dir, store) = setup();
        fs::create_dir(dir.path().join(TODO_FILENAME)).unwrap();

        assert!(matches!(
            store.load_todos(),
            Err(TodoError::Corrupt { .. })
        ));
    }

    #[test]
    fn write_failure_propagates() {
        let (dir, mut store) = setup();
        fs::create_dir(dir.path().join(TODO_FILENAME)).unwrap();

        let err = store.save_todos(&[Todo::new("x")]).unwrap_err();
        assert!(matches!(err, TodoError::Io(_)));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (dir, mut store) = setup();
        store.save_todos(&[Todo::new("a")]).unwrap();
        store.save_todos(&[Todo::new("b")]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover temp file: {}", name);
        }
    }
}
