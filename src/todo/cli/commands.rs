use super::logging::setup_logging;
use super::render::{print_messages, print_todo_list};
use super::setup::{print_help_for_command, print_usage_help, Cli, Commands};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::path::PathBuf;
use todo::error::{Result, TodoError};
use todo::init::{initialize, TodoContext};

pub const ADD_USAGE: &str = "Usage: todo add <text>";
pub const LIST_USAGE: &str = "Usage: todo list";
pub const REMOVE_USAGE: &str = "Usage: todo remove <id>";

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(parse_error(&e, &args)),
    };
    setup_logging(cli.verbose);

    if cli.help {
        match command_name(&cli.command) {
            Some(name) => print_help_for_command(name),
            None => print_usage_help(),
        }
        return Ok(());
    }

    let command = match cli.command {
        None | Some(Commands::Help) => {
            print_usage_help();
            return Ok(());
        }
        Some(Commands::External(args)) => {
            let verb = args.into_iter().next().unwrap_or_default();
            return Err(TodoError::UnknownCommand(verb));
        }
        Some(command) => command,
    };

    let mut ctx = init_context();
    tracing::debug!(?command, file = %ctx.data_file.display(), "dispatching");

    match command {
        Commands::Add { text } => handle_add(&mut ctx, text),
        Commands::List => handle_list(&ctx),
        Commands::Remove { id } => handle_remove(&mut ctx, id),
        Commands::Help | Commands::External(_) => Ok(()),
    }
}

fn command_name(command: &Option<Commands>) -> Option<&'static str> {
    match command {
        Some(Commands::Add { .. }) => Some("add"),
        Some(Commands::List) => Some("list"),
        Some(Commands::Remove { .. }) => Some("remove"),
        Some(Commands::Help) | Some(Commands::External(_)) | None => None,
    }
}

fn init_context() -> TodoContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    initialize(&cwd)
}

/// The first argument that is not a top-level flag, i.e. where the verb goes.
fn verb_position(args: &[String]) -> Option<&str> {
    args.iter().skip(1).map(String::as_str).find(|arg| {
        let is_verbose = *arg == "--verbose"
            || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'));
        !(is_verbose || *arg == "-h" || *arg == "--help")
    })
}

/// Turns a clap rejection into the same errors the dispatcher reports itself.
///
/// A flag-shaped token in the verb position is an unknown command; anything
/// else clap refuses (extra arguments, bad flags after a verb) is a usage
/// error for that verb.
fn parse_error(err: &clap::Error, args: &[String]) -> TodoError {
    let verb = verb_position(args);

    if let (Some(ContextValue::String(invalid)), Some(verb)) =
        (err.get(ContextKind::InvalidArg), verb)
    {
        if invalid == verb && verb.starts_with('-') {
            return TodoError::UnknownCommand(invalid.clone());
        }
    }

    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    let usage = match verb {
        Some("add") => ADD_USAGE,
        Some("list") | Some("ls") => LIST_USAGE,
        Some("remove") | Some("rm") => REMOVE_USAGE,
        _ => todo::SHORT_USAGE,
    };
    TodoError::usage(message, usage)
}

/// Joins the words of `todo add` into one text, or `None` when there are none.
fn join_text(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn handle_add(ctx: &mut TodoContext, words: Vec<String>) -> Result<()> {
    let text = join_text(words).ok_or_else(|| {
        TodoError::usage("Please provide text for the todo item", ADD_USAGE)
    })?;

    let result = ctx.api.add_todo(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &TodoContext) -> Result<()> {
    let result = ctx.api.list_todos()?;
    print_messages(&result.messages);
    print_todo_list(&result.listed_todos);
    Ok(())
}

fn handle_remove(ctx: &mut TodoContext, id: Option<String>) -> Result<()> {
    let id = id.ok_or_else(|| {
        TodoError::usage("Please provide the ID of the todo to remove", REMOVE_USAGE)
    })?;

    let result = ctx.api.remove_todo(&id)?;
    print_messages(&result.messages);
    Ok(())
}
