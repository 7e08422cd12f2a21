//! Command argument wrappers and command handlers.
//!
//! Each command defines a clap argument struct that converts into a core
//! parameter type, keeping clap attributes out of `taskboard-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskStore
//! ```
//!
//! [`Cli`] then runs the command against the store and renders the markdown
//! result through the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, warn};
use taskboard_core::{
    params::{CreateTask, EditTask, Id, ListTasks},
    view::{self, SortKey, StatusFilter},
    CreateResult, DeleteResult, NewTask, OperationStatus, Preferences, Priority, SqliteStore,
    TaskId, TaskStatus, TaskStore, TaskUpdate, TaskboardError, Tasks, UpdateResult,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Create a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Optional details about the task")]
    pub description: Option<String>,
    #[arg(long, help = "Due date in YYYY-MM-DD format")]
    pub due: Option<String>,
    #[arg(short, long, value_enum, help = "Priority of the task (default: medium)")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum, help = "Initial status of the task (default: todo)")]
    pub status: Option<StatusArg>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description,
            due_date: val.due,
            priority: val.priority.map(Into::into),
            status: val.status.map(Into::into),
        }
    }
}

/// List tasks
///
/// Shows all tasks by default. Use --filter to narrow the list to one status
/// and --sort/--desc to change the order. Tasks without a due date are always
/// listed after dated ones when sorting by due date.
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(short, long, value_enum, default_value_t = FilterArg::All, help = "Only show tasks with this status")]
    pub filter: FilterArg,
    #[arg(long, value_enum, default_value_t = SortArg::DueDate, help = "Field to sort by")]
    pub sort: SortArg,
    #[arg(long, help = "Sort in descending order")]
    pub desc: bool,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            filter: val.filter.into(),
            sort: val.sort.into(),
            descending: val.desc,
        }
    }
}

/// Identify a single task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: String,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a task
///
/// Only the given fields change. Pass an empty string to --due to remove the
/// due date.
#[derive(Args)]
pub struct EditTaskArgs {
    #[arg(help = "Unique identifier of the task to edit")]
    pub id: String,
    #[arg(short, long, help = "New title for the task")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description for the task")]
    pub description: Option<String>,
    #[arg(long, help = "New due date in YYYY-MM-DD format, or \"\" to clear it")]
    pub due: Option<String>,
    #[arg(short, long, value_enum, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum, help = "New status")]
    pub status: Option<StatusArg>,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            id: val.id,
            title: val.title,
            description: val.description,
            due_date: val.due,
            priority: val.priority.map(Into::into),
            status: val.status.map(Into::into),
        }
    }
}

/// Show or change the color theme
#[derive(Args)]
pub struct ThemeArgs {
    #[arg(value_enum, help = "Theme to switch to; omit to show the current one")]
    pub mode: Option<ThemeMode>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
    Toggle,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Finished
    Completed,
}

impl From<StatusArg> for TaskStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Completed => TaskStatus::Completed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Todo,
    InProgress,
    Completed,
}

impl From<FilterArg> for StatusFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => StatusFilter::All,
            FilterArg::Todo => StatusFilter::Todo,
            FilterArg::InProgress => StatusFilter::InProgress,
            FilterArg::Completed => StatusFilter::Completed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    DueDate,
    Priority,
    Title,
    Status,
}

impl From<SortArg> for SortKey {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::DueDate => SortKey::DueDate,
            SortArg::Priority => SortKey::Priority,
            SortArg::Title => SortKey::Title,
            SortArg::Status => SortKey::Status,
        }
    }
}

/// Runs commands against the task store.
pub struct Cli {
    store: TaskStore<SqliteStore>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore<SqliteStore>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Executes one command and makes sure its changes reached the database.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Add(args)) => self.add_task(args.into())?,
            Some(Commands::List(args)) => self.list_tasks(&args.into())?,
            Some(Commands::Show(args)) => self.show_task(&args.into())?,
            Some(Commands::Edit(args)) => self.edit_task(args.into())?,
            Some(Commands::Start(args)) => self.set_status(&args.into(), TaskStatus::InProgress)?,
            Some(Commands::Done(args)) => self.set_status(&args.into(), TaskStatus::Completed)?,
            Some(Commands::Reopen(args)) => self.set_status(&args.into(), TaskStatus::Todo)?,
            Some(Commands::Delete(args)) => self.delete_task(&args.into())?,
            Some(Commands::Stats) => self.show_stats()?,
            Some(Commands::Theme(args)) => self.theme(args.mode)?,
            None => self.list_tasks(&ListTasks::default())?,
        }

        if self.store.is_dirty() {
            warn!("Retrying save of task changes that failed to persist");
        }
        self.store
            .flush()
            .context("Failed to save tasks to the database")
    }

    fn add_task(&mut self, params: CreateTask) -> Result<()> {
        let input = NewTask::try_from(params)?;
        let task = self.store.add_task(input)?;
        self.renderer.render(&CreateResult::new(task).to_string())
    }

    fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        let sort = params.sort_state();
        let tasks = Tasks(view::derive(self.store.tasks(), params.filter, sort));
        debug!("Listing {} tasks", tasks.len());

        let mut output = format!(
            "# {} ({})\n\nSorted by {sort}\n\n",
            params.filter.label(),
            tasks.len()
        );
        output.push_str(&tasks.to_string());
        output.push('\n');
        output.push_str(&self.store.stats().to_string());
        self.renderer.render(&output)
    }

    fn show_task(&self, params: &Id) -> Result<()> {
        let id = params.task_id();
        let task = self
            .store
            .get(&id)
            .ok_or_else(|| not_found(&id))?;
        self.renderer.render(&task.to_string())
    }

    fn edit_task(&mut self, params: EditTask) -> Result<()> {
        let id = params.task_id();
        let update = TaskUpdate::try_from(params)?;
        self.apply_update(&id, update)
    }

    fn set_status(&mut self, params: &Id, status: TaskStatus) -> Result<()> {
        self.apply_update(&params.task_id(), TaskUpdate::status(status))
    }

    fn apply_update(&mut self, id: &TaskId, update: TaskUpdate) -> Result<()> {
        let before = self.store.get(id).cloned().ok_or_else(|| not_found(id))?;
        let after = self
            .store
            .update_task(id, update)?
            .ok_or_else(|| not_found(id))?;
        self.renderer
            .render(&UpdateResult::between(&before, after).to_string())
    }

    fn delete_task(&mut self, params: &Id) -> Result<()> {
        let id = params.task_id();
        let removed = self
            .store
            .delete_task(&id)?
            .ok_or_else(|| not_found(&id))?;
        self.renderer.render(&DeleteResult::new(removed).to_string())
    }

    fn show_stats(&self) -> Result<()> {
        let output = format!("# Task Statistics\n\n{}", self.store.stats());
        self.renderer.render(&output)
    }

    fn theme(&mut self, mode: Option<ThemeMode>) -> Result<()> {
        let mut prefs = Preferences::load(self.store.storage());
        let storage = self.store.storage_mut();

        let message = match mode {
            None => format!(
                "Current theme: {}",
                if prefs.dark_mode { "dark" } else { "light" }
            ),
            Some(ThemeMode::Dark) => {
                prefs.set_dark_mode(storage, true)?;
                "Dark mode enabled".to_string()
            }
            Some(ThemeMode::Light) => {
                prefs.set_dark_mode(storage, false)?;
                "Light mode enabled".to_string()
            }
            Some(ThemeMode::Toggle) => {
                if prefs.toggle_dark_mode(storage)? {
                    "Dark mode enabled".to_string()
                } else {
                    "Light mode enabled".to_string()
                }
            }
        };

        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }
}

fn not_found(id: &TaskId) -> TaskboardError {
    TaskboardError::TaskNotFound { id: id.to_string() }
}
