//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: show tasks in sort order
//! - add / done / undone / delete / priority: task mutations
//! - theme: show or toggle light/dark mode
//!
//! Task numbers are 1-based and refer to the order `list` prints with the
//! same `--ascending` setting.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tasklist::domain::Priority;

/// Tasklist - a priority-sorted to-do list
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Sort low priority first
    #[arg(short, long, global = true)]
    pub ascending: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tasks
    List,

    /// Add a task
    Add {
        /// Task name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Priority (high, medium, low); defaults to the configured priority
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Mark a task complete
    Done {
        /// Task number from `list`
        number: usize,
    },

    /// Mark a task not complete
    Undone {
        /// Task number from `list`
        number: usize,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task number from `list`
        number: usize,
    },

    /// Change a task's priority
    Priority {
        /// Task number from `list`
        number: usize,

        /// New priority (high, medium, low)
        priority: Priority,
    },

    /// Show the current theme
    Theme {
        /// Switch between light and dark
        #[arg(short, long)]
        toggle: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (list)
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.ascending);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["tasklist", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["tasklist", "-c", "/path/to/tasklist.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/tasklist.yml")));
    }

    #[test]
    fn test_ascending_is_global() {
        let cli = Cli::try_parse_from(["tasklist", "done", "2", "--ascending"]).unwrap();
        assert!(cli.ascending);
        assert!(matches!(cli.command, Some(Commands::Done { number: 2 })));
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["tasklist", "add", "Buy", "milk", "-p", "high"]).unwrap();
        match cli.command {
            Some(Commands::Add { name, priority }) => {
                assert_eq!(name.join(" "), "Buy milk");
                assert_eq!(priority, Some(Priority::High));
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_without_priority() {
        let cli = Cli::try_parse_from(["tasklist", "add", "Walk dog"]).unwrap();
        match cli.command {
            Some(Commands::Add { priority, .. }) => assert!(priority.is_none()),
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_requires_name() {
        assert!(Cli::try_parse_from(["tasklist", "add"]).is_err());
    }

    #[test]
    fn test_add_rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["tasklist", "add", "x", "-p", "urgent"]).is_err());
    }

    #[test]
    fn test_delete_alias() {
        let cli = Cli::try_parse_from(["tasklist", "rm", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { number: 3 })));
    }

    #[test]
    fn test_priority_command() {
        let cli = Cli::try_parse_from(["tasklist", "priority", "1", "low"]).unwrap();
        match cli.command {
            Some(Commands::Priority { number, priority }) => {
                assert_eq!(number, 1);
                assert_eq!(priority, Priority::Low);
            }
            _ => panic!("Expected priority command"),
        }
    }

    #[test]
    fn test_theme_toggle() {
        let cli = Cli::try_parse_from(["tasklist", "theme", "--toggle"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Theme { toggle: true })));
    }
}
