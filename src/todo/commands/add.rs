use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

use super::helpers::{load_all, save_all};

pub fn run<S: DataStore>(store: &mut S, text: String) -> Result<CmdResult> {
    let mut loaded = load_all(store)?;
    let mut result = CmdResult::default();
    loaded.report_into(&mut result);

    let todo = Todo::new(text).with_unique_id(&loaded.todos);
    loaded.todos.push(todo.clone());
    save_all(store, &loaded.todos)?;

    tracing::debug!(id = %todo.id, total = loaded.todos.len(), "added todo");
    result.add_message(CmdMessage::success(format!(
        "Added: {} [{}]",
        todo.text, todo.id
    )));
    Ok(result.with_affected_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn adds_a_todo_and_returns_it() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Test todo".into()).unwrap();

        assert_eq!(result.affected_todos.len(), 1);
        let todo = &result.affected_todos[0];
        assert_eq!(todo.text, "Test todo");
        assert!(!todo.id.is_empty());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn appends_to_existing_todos() {
        let mut fixture = StoreFixture::new().with_todo("1", "Existing todo");
        run(&mut fixture.store, "New todo".into()).unwrap();

        let listed = list::run(&fixture.store).unwrap().listed_todos;
        let texts: Vec<_> = listed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Existing todo", "New todo"]);
    }

    #[test]
    fn empty_text_is_stored_verbatim() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, String::new()).unwrap();

        assert_eq!(result.affected_todos[0].text, "");
        let listed = list::run(&store).unwrap().listed_todos;
        assert_eq!(listed[0].text, "");
    }

    #[test]
    fn every_add_gets_a_unique_id() {
        let mut store = InMemoryStore::new();
        for i in 0..50 {
            run(&mut store, format!("Todo {}", i)).unwrap();
        }

        let listed = list::run(&store).unwrap().listed_todos;
        assert_eq!(listed.len(), 50);
        let ids: HashSet<_> = listed.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn write_failure_means_not_added() {
        let mut store = InMemoryStore::new();
        store.fail_writes(true);

        let err = run(&mut store, "Test todo".into()).unwrap_err();
        assert!(matches!(err, TodoError::Io(_)));
        assert_eq!(err.to_string(), "IO error: Write failed");

        store.fail_writes(false);
        assert!(list::run(&store).unwrap().listed_todos.is_empty());
    }

    #[test]
    fn adding_over_corrupt_data_starts_fresh_and_warns() {
        let mut fixture = StoreFixture::new().with_todos(3).corrupted();
        let result = run(&mut fixture.store, "Fresh".into()).unwrap();

        assert_eq!(result.warnings().count(), 1);
        let listed = list::run(&fixture.store).unwrap().listed_todos;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "Fresh");
    }
}
