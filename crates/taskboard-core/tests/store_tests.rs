mod common;

use common::{create_test_environment, open_store};
use jiff::civil::date;
use taskboard_core::{
    storage::{KeyValueStore, DARK_MODE_SLOT, TASKS_SLOT},
    view::derive,
    NewTask, Preferences, Priority, SortDirection, SortKey, SortState, StatusFilter, TaskStatus,
    TaskStoreBuilder, TaskUpdate,
};

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_task_workflow() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut store = open_store(&db_path);
    assert!(store.is_empty());

    let report = store
        .add_task(
            NewTask::new("Write report")
                .with_due_date(date(2024, 6, 1))
                .with_priority(Priority::High),
        )
        .expect("Failed to add task");
    let groceries = store
        .add_task(NewTask::new("Buy groceries").with_due_date(date(2024, 1, 1)))
        .expect("Failed to add task");
    let someday = store
        .add_task(NewTask::new("Learn piano").with_priority(Priority::Low))
        .expect("Failed to add task");

    // Start one, finish another
    store
        .set_status(&report.id, TaskStatus::InProgress)
        .expect("Failed to start task");
    let done = store
        .set_status(&groceries.id, TaskStatus::Completed)
        .expect("Failed to complete task")
        .expect("Task should exist");
    assert!(done.completed);
    assert!(done.completed_at.is_some());

    // Default view: due date ascending, undated last
    let view = derive(store.tasks(), StatusFilter::All, SortState::default());
    let titles: Vec<&str> = view.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Buy groceries", "Write report", "Learn piano"]);

    // Reload from disk and check everything survived
    let before = store.tasks().to_vec();
    drop(store);
    let mut store = open_store(&db_path);
    assert_eq!(store.tasks(), before.as_slice());

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.todo, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 1);

    // Edit, then delete
    store
        .update_task(
            &someday.id,
            TaskUpdate {
                description: Some("Scales every morning".to_string()),
                due_date: Some(Some(date(2025, 1, 1))),
                ..Default::default()
            },
        )
        .expect("Failed to update task")
        .expect("Task should exist");
    store.delete_task(&report.id).expect("Failed to delete task");

    let store = open_store(&db_path);
    assert_eq!(store.len(), 2);
    assert!(store.get(&report.id).is_none());
    let someday = store.get(&someday.id).expect("Task should survive reload");
    assert_eq!(someday.description, "Scales every morning");
    assert_eq!(someday.due_date, Some(date(2025, 1, 1)));
}

#[test]
fn test_corrupt_database_slot_starts_empty() {
    let (_temp_dir, db_path) = create_test_environment();
    {
        let mut store = open_store(&db_path);
        store
            .storage_mut()
            .set(TASKS_SLOT, "[{\"id\": broken")
            .expect("Failed to write raw slot");
    }

    let mut store = open_store(&db_path);
    assert!(store.is_empty());

    // The store stays usable and overwrites the corrupt slot on first write
    store.add_task(NewTask::new("Fresh start")).unwrap();
    let store = open_store(&db_path);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_priority_sort_over_reloaded_tasks() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut store = open_store(&db_path);
    for (title, priority) in [
        ("medium", Priority::Medium),
        ("high", Priority::High),
        ("low", Priority::Low),
    ] {
        store
            .add_task(NewTask::new(title).with_priority(priority))
            .unwrap();
    }
    drop(store);

    let store = open_store(&db_path);
    let sort = SortState::new(SortKey::Priority, SortDirection::Ascending);
    let titles: Vec<&str> = derive(store.tasks(), StatusFilter::All, sort)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["low", "medium", "high"]);
}

#[test]
fn test_preferences_share_the_database() {
    let (_temp_dir, db_path) = create_test_environment();
    {
        let mut store = open_store(&db_path);
        store.add_task(NewTask::new("Unaffected")).unwrap();
        let mut prefs = Preferences::load(store.storage());
        prefs
            .set_dark_mode(store.storage_mut(), true)
            .expect("Failed to save preference");
    }

    let store = open_store(&db_path);
    assert!(Preferences::load(store.storage()).dark_mode);
    assert_eq!(
        store.storage().get(DARK_MODE_SLOT).unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_builder_creates_missing_directories() {
    let (temp_dir, _) = create_test_environment();
    let nested = temp_dir.path().join("a").join("b").join("tasks.db");

    let store = TaskStoreBuilder::new()
        .with_database_path(Some(&nested))
        .build()
        .expect("Failed to open store in nested directory");
    assert!(store.is_empty());
    assert!(nested.exists());
}
