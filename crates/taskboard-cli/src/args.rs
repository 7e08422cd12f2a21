use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddTaskArgs, EditTaskArgs, ListTasksArgs, TaskIdArgs, ThemeArgs};

/// Command-line interface for the Taskboard task tracker
///
/// Taskboard keeps a single list of tasks with a status, a priority and an
/// optional due date. Tasks can be filtered by status and sorted by due date,
/// priority, title or status.
#[derive(Parser)]
#[command(version, about, name = "tb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/taskboard/taskboard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Taskboard CLI
///
/// Running `tb` without a command lists all tasks.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks, optionally filtered and sorted
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Edit a task's fields
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Mark a task as in progress
    Start(TaskIdArgs),
    /// Mark a task as completed
    #[command(alias = "complete")]
    Done(TaskIdArgs),
    /// Move a completed task back to todo
    Reopen(TaskIdArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(TaskIdArgs),
    /// Show task counts per status
    Stats,
    /// Show or change the color theme
    Theme(ThemeArgs),
}
