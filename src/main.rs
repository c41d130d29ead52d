use std::process;

use clap::{Arg, ArgAction, Command};
use colored::*;

use todo_sync::commands::handle_sync;
use todo_sync::constants::{DEFAULT_INPUT_PATH, DEFAULT_TABLE};
use todo_sync::logging::{get_log_file_path, init_logging, log_error, log_panic_info, set_verbose};

fn build_cli() -> Command {
    Command::new("todo-sync")
        .about("Sync code annotations (TODO/BUG/FIX/NEW) from a report file into the issue store")
        .after_help(
            "Environment:\n  \
             TODO_URL     Base URL of the issue store\n  \
             TODO_KEY     API key for the issue store\n  \
             GITHUB_REPO  Repository in owner/name form\n  \
             GITHUB_SHA   Commit the report was generated from",
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .help("Report file with one annotation per line")
                .default_value(DEFAULT_INPUT_PATH)
        )
        .arg(
            Arg::new("table")
                .long("table")
                .short('t')
                .value_name("NAME")
                .help("REST resource holding the issues")
                .default_value(DEFAULT_TABLE)
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would change without touching the store")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print per-line parse results")
                .action(ArgAction::SetTrue)
        )
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    set_verbose(matches.get_flag("verbose"));
    if let Err(e) = init_logging() {
        eprintln!("{} could not set up log file: {}", "Warning:".yellow(), e);
    }

    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    if let Err(e) = handle_sync(&matches).await {
        log_error(&e.to_string());
        if let Some(path) = get_log_file_path() {
            eprintln!("See log: {}", path.display());
        }
        process::exit(1);
    }
}
