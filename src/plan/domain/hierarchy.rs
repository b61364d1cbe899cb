//! Tree reconstruction over the flat task records.
//!
//! The flat output denormalizes each task's parent into a name/order pair
//! so the wire format stays streamable. Consumers that want the tree back
//! rebuild it here by joining `parent_order` against `order`. Tasks whose
//! parent reference does not resolve are placed at the root, and each task
//! has at most one parent, so the rebuilt structure is always a forest.

use super::TaskRecord;
use std::collections::{HashMap, HashSet};

/// A task record with its reconstructed children.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    /// The flat record at this position in the tree.
    pub record: TaskRecord,
    /// Child nodes in assigned-order sequence.
    pub children: Vec<TaskNode>,
}

/// A task record annotated with its depth in the reconstructed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveledTask {
    /// The flat record.
    pub record: TaskRecord,
    /// Zero-based depth; root tasks sit at depth 0.
    pub depth: usize,
}

/// Rebuilds the task forest implied by the denormalized parent references.
///
/// Root placement applies to tasks without a `parent_order` and to tasks
/// whose `parent_order` matches no record in the input.
#[must_use]
pub fn organize(tasks: &[TaskRecord]) -> Vec<TaskNode> {
    let known_orders: HashSet<i32> = tasks.iter().map(|task| task.order).collect();
    let mut children_of: HashMap<i32, Vec<&TaskRecord>> = HashMap::new();
    let mut roots: Vec<&TaskRecord> = Vec::new();

    for task in tasks {
        match task.parent_order {
            Some(parent_order) if known_orders.contains(&parent_order) => {
                children_of.entry(parent_order).or_default().push(task);
            }
            _ => roots.push(task),
        }
    }

    roots
        .iter()
        .map(|root| build_node(root, &children_of))
        .collect()
}

/// Flattens a reconstructed forest back into depth-annotated records.
#[must_use]
pub fn flatten(nodes: &[TaskNode]) -> Vec<LeveledTask> {
    let mut flat = Vec::new();
    append_level(nodes, 0, &mut flat);
    flat
}

fn build_node(record: &TaskRecord, children_of: &HashMap<i32, Vec<&TaskRecord>>) -> TaskNode {
    let children = children_of
        .get(&record.order)
        .map(|entries| {
            entries
                .iter()
                .map(|child| build_node(child, children_of))
                .collect()
        })
        .unwrap_or_default();

    TaskNode {
        record: record.clone(),
        children,
    }
}

fn append_level(nodes: &[TaskNode], depth: usize, flat: &mut Vec<LeveledTask>) {
    for node in nodes {
        flat.push(LeveledTask {
            record: node.record.clone(),
            depth,
        });
        append_level(&node.children, depth.saturating_add(1), flat);
    }
}
