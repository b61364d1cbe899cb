//! Hierarchy linking: order assignment and parent denormalization.
//!
//! Two concerns meet here. First, ordering: valid tasks (those with a
//! non-blank name) receive dense zero-based orders in document traversal
//! order; invalid entries are skipped without leaving gaps. Second,
//! linkage: each task's structural parent is flattened into a name/order
//! pair so consumers can rebuild the tree with a join instead of walking
//! nested payloads. Parent lookups go through a handle-keyed map built
//! during the indexing walk, because a parent may appear before or after
//! its children and names may repeat within a document.

use crate::plan::ports::{RawProject, RawTask, RawTaskHandle};
use std::collections::HashMap;

/// A retained task with its assigned order and resolved parent linkage.
#[derive(Debug)]
pub(crate) struct LinkedTask<'a> {
    /// The raw task behind this record.
    pub task: &'a RawTask,
    /// Document name; guaranteed non-blank for retained tasks.
    pub name: &'a str,
    /// Dense zero-based position among retained tasks.
    pub order: i32,
    /// Structural parent name, when the link resolved.
    pub parent_name: Option<String>,
    /// Structural parent order, when the link resolved.
    pub parent_order: Option<i32>,
}

/// Orders the valid tasks and resolves their parent references.
pub(crate) fn link(project: &RawProject) -> Vec<LinkedTask<'_>> {
    // Indexing walk: retained tasks keep their assigned order so the
    // materialization below never re-derives a second counter.
    let mut order_by_handle = HashMap::new();
    let mut retained = Vec::new();
    let mut next_order = 0_i32;

    for (handle, task) in project.tasks() {
        let Some(name) = usable_name(task) else {
            continue;
        };
        order_by_handle.insert(handle, next_order);
        retained.push((task, name, next_order));
        next_order += 1;
    }

    retained
        .into_iter()
        .map(|(task, name, order)| {
            let (parent_name, parent_order) = resolve_parent(project, &order_by_handle, task);
            LinkedTask {
                task,
                name,
                order,
                parent_name,
                parent_order,
            }
        })
        .collect()
}

/// Returns the task's name when it is usable, i.e. non-blank after trimming.
fn usable_name(task: &RawTask) -> Option<&str> {
    task.name().filter(|name| !name.trim().is_empty())
}

fn resolve_parent(
    project: &RawProject,
    order_by_handle: &HashMap<RawTaskHandle, i32>,
    task: &RawTask,
) -> (Option<String>, Option<i32>) {
    let Some(handle) = task.parent() else {
        return (None, None);
    };
    let Some(parent) = project.task(handle) else {
        return (None, None);
    };
    if usable_name(parent).is_none() {
        // A blank-named parent drops the link silently rather than
        // surfacing a dangling name.
        return (None, None);
    }
    match order_by_handle.get(&handle) {
        Some(parent_order) => (
            parent.name().map(str::to_owned),
            Some(*parent_order),
        ),
        // Parent filtered out during indexing: the link goes with it.
        None => (None, None),
    }
}
