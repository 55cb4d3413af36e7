//! CLI argument parsing for taskify

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Priority, SortDirection, SortOption, Status, Theme};

#[derive(Parser, Debug)]
#[command(name = "taskify")]
#[command(author, version, about = "Personal task tracker", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title (must not be empty)
        #[arg(required = true)]
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due_date)]
        due: DateTime<Utc>,

        /// Initial status: pending, in-progress, or completed
        #[arg(short, long, default_value = "pending")]
        status: Status,
    },

    /// List tasks (filtered and sorted)
    List {
        /// Keep only tasks with this priority
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Keep only tasks with this status
        #[arg(short, long)]
        status: Option<Status>,

        /// Keep only tasks whose title or description contains this term
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort key: priority, due-date, status, or created-at
        #[arg(long, default_value = "created-at")]
        sort: SortOption,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        direction: SortDirection,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due_date)]
        due: Option<DateTime<Utc>>,

        /// New status
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Mark a task as completed
    Done {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,
    },

    /// Remove all completed tasks
    ClearCompleted,

    /// Remove every task
    Reset,

    /// Show or set the appearance theme
    Theme {
        /// Theme to set: light, dark, or system (omit to show the current one)
        theme: Option<Theme>,
    },
}

/// Output format for the list command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

/// Parse a due date given as either RFC 3339 or a plain date
///
/// Plain dates resolve to midnight UTC.
pub fn parse_due_date(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| format!("Invalid date: {}", s))?;
        return Ok(midnight.and_utc());
    }
    Err(format!("Invalid due date: {}. Use YYYY-MM-DD or RFC 3339", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date_plain() {
        let dt = parse_due_date("2025-01-10").unwrap();
        assert_eq!(dt, "2025-01-10T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_parse_due_date_rfc3339() {
        let dt = parse_due_date("2025-01-10T14:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-01-10T14:30:00+00:00");
    }

    #[test]
    fn test_parse_due_date_invalid() {
        assert!(parse_due_date("next tuesday").is_err());
    }

    #[test]
    fn test_cli_parse_add() {
        let cli = Cli::parse_from(["taskify", "add", "Buy milk", "--due", "2025-01-10"]);
        if let Command::Add {
            title,
            priority,
            status,
            ..
        } = cli.command
        {
            assert_eq!(title, "Buy milk");
            assert_eq!(priority, Priority::Medium);
            assert_eq!(status, Status::Pending);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_parse_add_with_priority() {
        let cli = Cli::parse_from(["taskify", "add", "Taxes", "--due", "2025-04-15", "-p", "high"]);
        if let Command::Add { priority, .. } = cli.command {
            assert_eq!(priority, Priority::High);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_parse_list_defaults() {
        let cli = Cli::parse_from(["taskify", "list"]);
        if let Command::List { sort, direction, .. } = cli.command {
            assert_eq!(sort, SortOption::CreatedAt);
            assert_eq!(direction, SortDirection::Desc);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_list_filters() {
        let cli = Cli::parse_from(["taskify", "list", "-s", "pending", "--sort", "priority", "--direction", "asc"]);
        if let Command::List {
            status,
            sort,
            direction,
            ..
        } = cli.command
        {
            assert_eq!(status, Some(Status::Pending));
            assert_eq!(sort, SortOption::Priority);
            assert_eq!(direction, SortDirection::Asc);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_done() {
        let cli = Cli::parse_from(["taskify", "done", "abc123"]);
        assert!(matches!(cli.command, Command::Done { id } if id == "abc123"));
    }

    #[test]
    fn test_cli_parse_theme() {
        let cli = Cli::parse_from(["taskify", "theme", "dark"]);
        assert!(matches!(cli.command, Command::Theme { theme: Some(Theme::Dark) }));

        let cli = Cli::parse_from(["taskify", "theme"]);
        assert!(matches!(cli.command, Command::Theme { theme: None }));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["taskify", "-c", "/path/to/config.yml", "list"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
