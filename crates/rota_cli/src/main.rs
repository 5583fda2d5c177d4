//! CLI presentation probe for `rota_core`.
//!
//! # Responsibility
//! - Forward add/remove intents to the core service.
//! - Render the current selection, week label and roster as plain text.

mod cli;

use clap::Parser;
use log::warn;
use rota_core::db::open_db;
use rota_core::{
    init_logging, KeyValueStore, RepoResult, Roster, RotaService, SqliteKeyValueStore,
};
use std::error::Error;
use std::process::ExitCode;

use crate::cli::{CliArgs, Command};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rota: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let config = args.resolve_config();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        // Logging is optional for a one-shot command.
        eprintln!("rota: logging disabled: {err}");
    }

    let conn = open_db(&config.db_path)?;
    let service = RotaService::new(SqliteKeyValueStore::new(&conn));

    match args.command() {
        Command::Show => {
            for line in show_lines(&service)? {
                println!("{line}");
            }
        }
        Command::List => print_roster(&service.list_members()?),
        Command::Add { name } => {
            let before = service.list_members()?.len();
            let roster = service.add_member(&name)?;
            if roster.len() == before {
                warn!("event=cli_add module=cli status=rejected reason=empty_name");
                eprintln!("rota: member name cannot be empty");
            }
            print_roster(&roster);
        }
        Command::Remove { id } => print_roster(&service.remove_member(id)?),
    }

    Ok(())
}

/// Week label plus current selection. An empty roster never touches the anchor.
fn show_lines<S: KeyValueStore>(service: &RotaService<S>) -> RepoResult<Vec<String>> {
    let selection = match service.current_scrum_master()? {
        Some(member) => format!("Current Scrum Master: {}", member.name),
        None => "Please add team members to generate rotation".to_string(),
    };
    Ok(vec![
        format!("Week of {}", service.current_week_label()),
        selection,
    ])
}

fn print_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("No team members added yet");
        return;
    }
    for member in roster {
        println!("{:>4}  {}", member.id, member.name);
    }
}
