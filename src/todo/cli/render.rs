use chrono::SecondsFormat;
use colored::Colorize;
use todo::api::{CmdMessage, MessageLevel};
use todo::model::Todo;

/// Success goes to stdout, warnings to stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", format!("Warning: {}", message.content).yellow()),
        }
    }
}

pub(super) fn print_todo_list(todos: &[Todo]) {
    print!("{}", render_todo_list(todos));
}

pub(super) fn render_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.\n".to_string();
    }

    let mut output = format!("Found {} todo(s):\n", todos.len());
    for todo in todos {
        let created = todo
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        output.push_str(&format!(
            "  {} {} {}\n",
            format!("[{}]", todo.id).yellow(),
            todo.text,
            format!("({})", created).dimmed()
        ));
    }
    output
}
