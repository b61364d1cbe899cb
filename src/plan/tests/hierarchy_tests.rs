//! Tree reconstruction over the denormalized parent references.

use crate::plan::domain::hierarchy::{flatten, organize};
use crate::plan::domain::{TaskPriority, TaskRecord, TaskStatus};
use rstest::rstest;

fn record(name: &str, order: i32, parent_order: Option<i32>) -> TaskRecord {
    TaskRecord {
        name: name.to_owned(),
        description: None,
        start: None,
        finish: None,
        duration_days: None,
        progress: 0,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        order,
        outline_level: 1,
        parent_name: None,
        parent_order,
    }
}

#[rstest]
fn organize_rebuilds_the_forest_from_order_joins() {
    let tasks = vec![
        record("Phase 1", 0, None),
        record("Task A", 1, Some(0)),
        record("Task B", 2, Some(0)),
        record("Phase 2", 3, None),
    ];

    let forest = organize(&tasks);

    assert_eq!(forest.len(), 2);
    let phase_one = forest.first().expect("first root");
    assert_eq!(phase_one.record.name, "Phase 1");
    let child_names: Vec<&str> = phase_one
        .children
        .iter()
        .map(|node| node.record.name.as_str())
        .collect();
    assert_eq!(child_names, ["Task A", "Task B"]);
    let phase_two = forest.get(1).expect("second root");
    assert!(phase_two.children.is_empty());
}

#[rstest]
fn unresolvable_parents_fall_back_to_root_placement() {
    let tasks = vec![record("Phase 1", 0, None), record("Stray", 1, Some(99))];

    let forest = organize(&tasks);

    let names: Vec<&str> = forest
        .iter()
        .map(|node| node.record.name.as_str())
        .collect();
    assert_eq!(names, ["Phase 1", "Stray"]);
}

#[rstest]
fn nested_children_attach_transitively() {
    let tasks = vec![
        record("Phase 1", 0, None),
        record("Task A", 1, Some(0)),
        record("Subtask A.1", 2, Some(1)),
    ];

    let forest = organize(&tasks);

    let phase = forest.first().expect("root");
    let task_a = phase.children.first().expect("mid level");
    let subtask = task_a.children.first().expect("leaf");
    assert_eq!(subtask.record.name, "Subtask A.1");
}

#[rstest]
fn flatten_annotates_depth_in_traversal_order() {
    let tasks = vec![
        record("Phase 1", 0, None),
        record("Task A", 1, Some(0)),
        record("Subtask A.1", 2, Some(1)),
        record("Phase 2", 3, None),
    ];

    let flat = flatten(&organize(&tasks));

    let listing: Vec<(&str, usize)> = flat
        .iter()
        .map(|entry| (entry.record.name.as_str(), entry.depth))
        .collect();
    assert_eq!(
        listing,
        [
            ("Phase 1", 0),
            ("Task A", 1),
            ("Subtask A.1", 2),
            ("Phase 2", 0),
        ]
    );
}

#[rstest]
fn flatten_round_trips_parent_first_listings() {
    let tasks = vec![
        record("Phase 1", 0, None),
        record("Task A", 1, Some(0)),
        record("Task B", 2, Some(0)),
    ];

    let flat = flatten(&organize(&tasks));

    let records: Vec<TaskRecord> = flat.into_iter().map(|entry| entry.record).collect();
    assert_eq!(records, tasks);
}
