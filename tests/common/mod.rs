use hash_dispatch::task::{Task, TaskTable};

/// Builds a task table from `(id, name, amount)` triples.
pub fn tasks(specs: &[(&str, &str, u32)]) -> TaskTable {
    TaskTable::new(
        specs
            .iter()
            .map(|&(id, name, amount)| Task {
                id: id.to_string(),
                name: name.to_string(),
                amount,
            })
            .collect(),
    )
}

/// The four-row table used by the end-to-end scenarios.
pub fn spec_tasks() -> TaskTable {
    tasks(&[("1", "a", 1), ("2", "b", 2), ("3", "c", 1), ("4", "d", 3)])
}
