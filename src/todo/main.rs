//! The binary only runs the CLI and turns its error into output and an exit
//! code. Everything else lives in `cli/` and the `todo` library.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", format!("Error: {}", e).red());
        if let Some(usage) = e.usage_hint() {
            eprintln!("{}", usage);
        }
        std::process::exit(1);
    }
}
