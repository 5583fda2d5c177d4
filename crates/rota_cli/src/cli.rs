use clap::{Parser, Subcommand};
use rota_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use rota_core::{MemberId, RotaConfig};
use std::path::PathBuf;

/// Weekly scrum master rotation.
#[derive(Parser, Debug)]
#[command(name = "rota", version, about = "Weekly scrum master rotation")]
pub struct CliArgs {
    /// SQLite file holding the roster and rotation anchor
    #[arg(long, env = DB_PATH_ENV)]
    pub db_path: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = LOG_LEVEL_ENV)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show this week's scrum master (default)
    Show,
    /// List team members in rotation order
    List,
    /// Add a team member to the end of the rotation
    Add {
        /// Member name; surrounding whitespace is trimmed
        name: String,
    },
    /// Remove a team member by id
    Remove { id: MemberId },
}

impl CliArgs {
    /// Flags override environment-derived defaults.
    pub fn resolve_config(&self) -> RotaConfig {
        let mut config = RotaConfig::from_env();
        if let Some(path) = non_empty_path(&self.db_path) {
            config.db_path = path.clone();
        }
        if let Some(level) = self.log_level.as_deref().map(str::trim) {
            if !level.is_empty() {
                config.log_level = level.to_string();
            }
        }
        if let Some(dir) = non_empty_path(&self.log_dir) {
            config.log_dir = dir.clone();
        }
        config
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}

fn non_empty_path(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|path| !path.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, Command};
    use clap::Parser;

    #[test]
    fn defaults_to_show() {
        let args = CliArgs::try_parse_from(["rota"]).unwrap();
        assert_eq!(args.command(), Command::Show);
    }

    #[test]
    fn parses_add_and_remove() {
        let add = CliArgs::try_parse_from(["rota", "add", "Alice Smith"]).unwrap();
        assert_eq!(
            add.command(),
            Command::Add {
                name: "Alice Smith".to_string()
            }
        );

        let remove = CliArgs::try_parse_from(["rota", "remove", "3"]).unwrap();
        assert_eq!(remove.command(), Command::Remove { id: 3 });
    }

    #[test]
    fn db_path_flag_overrides_config() {
        let args =
            CliArgs::try_parse_from(["rota", "--db-path", "/tmp/team.sqlite3", "list"]).unwrap();
        assert_eq!(
            args.resolve_config().db_path,
            std::path::PathBuf::from("/tmp/team.sqlite3")
        );
    }
}
