use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_all;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut loaded = load_all(store)?;
    let mut result = CmdResult::default();
    loaded.report_into(&mut result);

    Ok(result.with_listed_todos(loaded.todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_nothing_when_empty() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_todos.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_todos(3);
        let result = run(&fixture.store).unwrap();

        let texts: Vec<_> = result.listed_todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Todo 1", "Todo 2", "Todo 3"]);
    }

    #[test]
    fn listing_twice_is_identical_and_never_writes() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();
        add::run(&mut store, "B".into()).unwrap();
        let writes = store.writes();

        let first = run(&store).unwrap().listed_todos;
        let second = run(&store).unwrap().listed_todos;

        assert_eq!(first, second);
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn corrupt_data_lists_empty_with_warning() {
        let fixture = StoreFixture::new().with_todos(2).corrupted();
        let result = run(&fixture.store).unwrap();

        assert!(result.listed_todos.is_empty());
        assert_eq!(result.warnings().count(), 1);
    }
}
