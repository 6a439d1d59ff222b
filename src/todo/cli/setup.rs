use clap::{ArgAction, CommandFactory, Parser, Subcommand};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    bin_name = "todo",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep a todo list in the current directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo item
    #[command(disable_help_flag = true)]
    Add {
        /// Text of the todo; all words are joined with single spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all todo items
    #[command(alias = "ls")]
    List,

    /// Remove a todo item by ID
    #[command(alias = "rm")]
    Remove {
        /// ID of the todo, as shown by `todo list`
        id: Option<String>,
    },

    /// Show this help message
    Help,

    /// Anything else is reported as an unknown command
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Argument form shown for each command in the help text, in display order.
const COMMAND_FORMS: &[(&str, &str)] = &[
    ("add", "add <text>"),
    ("list", "list"),
    ("remove", "remove <id>"),
    ("help", "help"),
];

/// Returns the top-level help: usage, commands, options and examples.
pub fn get_usage_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    let mut output = String::new();
    output.push_str(&format!("todo {version}\n"));
    output.push_str(&format!("{about}\n"));
    output.push('\n');
    output.push_str(&format!("{}\n", todo::SHORT_USAGE));

    output.push('\n');
    output.push_str("Commands:\n");
    for (name, form) in COMMAND_FORMS {
        let about = cmd
            .find_subcommand(name)
            .and_then(|sc| sc.get_about())
            .map(|s| s.to_string())
            .unwrap_or_default();
        output.push_str(&format!("  {:<14} {}\n", form, about));
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Increase log output (repeatable, before the command)\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output.push('\n');
    output.push_str("Examples:\n");
    output.push_str("  todo add Buy groceries\n");
    output.push_str("  todo add \"Call the dentist\"\n");
    output.push_str("  todo list\n");
    output.push_str("  todo remove 3f2a9c0e5b7d4e1f8a6c2b9d0e4f7a1c\n");

    output
}

pub fn print_usage_help() {
    print!("{}", get_usage_help());
}

/// Prints clap's help for a single command, falling back to the full help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(subcmd) => print!("{}", subcmd.render_help()),
        None => print_usage_help(),
    }
}
