//! src/report.rs
//!
//! Tabular rendering of a completed run.
//!
//! Rows appear in original task order. The worker column is derived from
//! the strided ownership rule (`row % k + 1`); abandoned rows keep their
//! owner but render an empty digest, and the caller can spot them by the
//! blank column.

use crate::dispatch::{ResultTable, RowRouter};
use crate::task::TaskTable;
use std::fmt::Write;

/// Renders the result table in task order.
///
/// `active_workers` is the stride the run used; with 0 active workers no
/// row has an owner and the worker column is blank throughout.
pub fn render(tasks: &TaskTable, results: &ResultTable, active_workers: usize) -> String {
    let name_width = tasks
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max("name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<name_width$}  {}", "worker", "name", "digest");

    let router = (active_workers > 0).then(|| RowRouter::new(active_workers));
    for (row, task) in tasks.iter().enumerate() {
        let owner = router
            .map(|r| (r.owner_of(row) + 1).to_string())
            .unwrap_or_default();
        let digest = results.get(row).unwrap_or("");
        let _ = writeln!(out, "{:>6}  {:<name_width$}  {}", owner, task.name, digest);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn table(names: &[&str]) -> TaskTable {
        TaskTable::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Task {
                    id: (i + 1).to_string(),
                    name: name.to_string(),
                    amount: 1,
                })
                .collect(),
        )
    }

    #[test]
    fn renders_owner_name_and_digest_per_row() {
        let tasks = table(&["a", "b"]);
        let results = ResultTable::new(2);
        results.set(0, "d0".into());
        results.set(1, "d1".into());

        let rendered = render(&tasks, &results, 2);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains('a') && lines[1].contains("d0") && lines[1].contains('1'));
        assert!(lines[2].contains('b') && lines[2].contains("d1") && lines[2].contains('2'));
    }

    #[test]
    fn abandoned_rows_render_blank_digest() {
        let tasks = table(&["a", "b"]);
        let results = ResultTable::new(2);
        results.set(0, "d0".into());

        let rendered = render(&tasks, &results, 1);
        let abandoned = rendered.lines().nth(2).unwrap();
        assert!(abandoned.trim_end().ends_with('b'));
    }

    #[test]
    fn zero_active_workers_blanks_the_worker_column() {
        let tasks = table(&["a"]);
        let results = ResultTable::new(1);

        let rendered = render(&tasks, &results, 0);
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.trim_start().starts_with('a'));
    }

    #[test]
    fn worker_column_follows_the_stride() {
        let tasks = table(&["a", "b", "c", "d"]);
        let results = ResultTable::new(4);

        let rendered = render(&tasks, &results, 2);
        let owners: Vec<&str> = rendered
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(owners, vec!["1", "2", "1", "2"]);
    }
}
