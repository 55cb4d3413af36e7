//! taskify CLI entry point

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use taskify::cli::{Cli, Command, OutputFormat};
use taskify::config::Config;
use taskify::domain::{AppSettings, Priority, SortDirection, SortOption, Status, Task, TaskFilter};
use taskify::engine::TaskEngine;
use taskify::store::TaskStore;

fn setup_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let store = TaskStore::open(&config.store_path).context("Failed to open task store")?;

    info!(store_path = %config.store_path.display(), "taskify starting");

    match cli.command {
        Command::Add {
            title,
            description,
            priority,
            due,
            status,
        } => {
            // Validation lives here: the engine trusts its callers
            if title.trim().is_empty() {
                return Err(eyre::eyre!("Task title must not be empty"));
            }
            let mut engine = TaskEngine::new(store);
            let task = engine.add_task(title.trim(), description, priority, due, status);
            println!("{} Added task: {} ({})", "✓".green(), task.title, short_id(&task.id).cyan());
        }
        Command::List {
            priority,
            status,
            search,
            sort,
            direction,
            format,
        } => {
            let mut engine = TaskEngine::new(store);
            engine.set_filter(TaskFilter {
                priority,
                status,
                search_term: search,
            });
            engine.set_sort_option(sort);
            engine.set_sort_direction(direction);
            print_view(&engine.derived_view(), sort, direction, format)?;
        }
        Command::Edit {
            id,
            title,
            description,
            priority,
            due,
            status,
        } => {
            if let Some(t) = &title
                && t.trim().is_empty()
            {
                return Err(eyre::eyre!("Task title must not be empty"));
            }
            let mut engine = TaskEngine::new(store);
            let full_id = resolve_id(&engine, &id)?;
            let mut task = engine
                .get(&full_id)
                .cloned()
                .ok_or_else(|| eyre::eyre!("No task found with id {}", full_id))?;
            if let Some(t) = title {
                task.title = t.trim().to_string();
            }
            if let Some(d) = description {
                task.description = d;
            }
            if let Some(p) = priority {
                task.priority = p;
            }
            if let Some(d) = due {
                task.due_date = d;
            }
            if let Some(s) = status {
                task.status = s;
            }
            engine.update_task(task);
            println!("{} Updated task {}", "✓".green(), short_id(&full_id).cyan());
        }
        Command::Done { id } => {
            let mut engine = TaskEngine::new(store);
            let full_id = resolve_id(&engine, &id)?;
            engine.mark_completed(&full_id);
            println!("{} Completed task {}", "✓".green(), short_id(&full_id).cyan());
        }
        Command::Rm { id } => {
            let mut engine = TaskEngine::new(store);
            let full_id = resolve_id(&engine, &id)?;
            engine.remove_task(&full_id);
            println!("{} Deleted task {}", "✓".green(), short_id(&full_id).cyan());
        }
        Command::ClearCompleted => {
            let mut engine = TaskEngine::new(store);
            let before = engine.tasks().len();
            engine.clear_completed();
            let removed = before - engine.tasks().len();
            println!("{} Cleared {} completed task(s)", "✓".green(), removed);
        }
        Command::Reset => {
            let mut engine = TaskEngine::new(store);
            let count = engine.tasks().len();
            engine.reset_all();
            println!("{} Removed all {} task(s)", "✓".green(), count);
        }
        Command::Theme { theme } => match theme {
            Some(theme) => {
                store.save_settings(&AppSettings { theme });
                println!("{} Theme set to {}", "✓".green(), theme);
            }
            None => {
                println!("{}", store.load_settings().theme);
            }
        },
    }

    Ok(())
}

/// Resolve a full task id from a unique prefix
fn resolve_id(engine: &TaskEngine, reference: &str) -> Result<String> {
    let matches: Vec<&Task> = engine.tasks().iter().filter(|t| t.id.starts_with(reference)).collect();
    match matches.len() {
        0 => Err(eyre::eyre!("No task found with id {}", reference)),
        1 => Ok(matches[0].id.clone()),
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|t| format!("{} ({})", short_id(&t.id), t.title))
                .collect();
            Err(eyre::eyre!(
                "Ambiguous id {}: matches {}",
                reference,
                candidates.join(", ")
            ))
        }
    }
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

fn print_view(view: &[Task], sort: SortOption, direction: SortDirection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        OutputFormat::Text => {
            if view.is_empty() {
                println!("No tasks");
                return Ok(());
            }
            for task in view {
                let priority = match task.priority {
                    Priority::High => task.priority.to_string().red(),
                    Priority::Medium => task.priority.to_string().yellow(),
                    Priority::Low => task.priority.to_string().green(),
                };
                let marker = match task.status {
                    Status::Completed => "✓".green(),
                    Status::InProgress => "…".yellow(),
                    Status::Pending => "·".normal(),
                };
                println!(
                    "{} {} {} [{}] due {}{}",
                    short_id(&task.id).cyan(),
                    marker,
                    task.title,
                    priority,
                    task.due_date.format("%Y-%m-%d"),
                    if task.description.is_empty() {
                        String::new()
                    } else {
                        format!(" - {}", task.description.dimmed())
                    }
                );
            }
            println!();
            println!("{}", format!("{} task(s), sorted by {} {}", view.len(), sort, direction).dimmed());
        }
    }
    Ok(())
}
