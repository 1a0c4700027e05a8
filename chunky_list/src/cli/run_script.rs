// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use miette::Diagnostic;

use super::ListOp;
use crate::{ChunkedList, GetMemSize, ListError, ListResult, MemorySize, SegmentFills,
            SequenceList};

/// Apply every op in order, returning one output line per op. A failing op is reported
/// on its line and the rest of the script still runs.
pub fn run_script(list: &mut ChunkedList<String>, ops: &[ListOp]) -> Vec<String> {
    ops.iter()
        .map(|op| match apply_op(list, op) {
            Ok(output) => format!("{op} => {output}"),
            Err(error) => format_error_line(op, &error),
        })
        .collect()
}

/// # Errors
///
/// Returns the [`ListError`] reported by the list, which is unchanged in that case.
pub fn apply_op(list: &mut ChunkedList<String>, op: &ListOp) -> ListResult<String> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "apply op", op = %op);

    let it = match op {
        ListOp::AddFront(item) => list.add_front(item.clone()).map(|()| "ok".to_string())?,
        ListOp::AddBack(item) => list.add_back(item.clone()).map(|()| "ok".to_string())?,
        ListOp::AddIndex(index, item) => {
            list.add_index(item.clone(), *index).map(|()| "ok".to_string())?
        }
        ListOp::RemoveFront => list.remove_front()?,
        ListOp::RemoveBack => list.remove_back()?,
        ListOp::RemoveIndex(index) => list.remove_index(*index)?,
        ListOp::GetFront => list.get_front()?.clone(),
        ListOp::GetBack => list.get_back()?.clone(),
        ListOp::GetIndex(index) => list.get_index(*index)?.clone(),
        ListOp::Size => list.len().to_string(),
        ListOp::IsEmpty => list.is_empty().to_string(),
        ListOp::Dump => format!("{list:?}"),
        ListOp::Stats => ListStats::from(&*list).to_string(),
    };
    Ok(it)
}

fn format_error_line(op: &ListOp, error: &ListError) -> String {
    // % is Display, ? is Debug.
    tracing::debug!(message = "op failed", op = %op, error = ?error);

    match error.code() {
        Some(code) => format!("{op} => error[{code}]: {error}"),
        None => format!("{op} => error: {error}"),
    }
}

/// Shape of a [`ChunkedList`], as printed by the `stats` op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStats {
    pub len: usize,
    pub chunk_capacity: usize,
    pub segment_fills: SegmentFills,
    pub mem_size: MemorySize,
}

impl<T> From<&ChunkedList<T>> for ListStats {
    fn from(list: &ChunkedList<T>) -> Self {
        Self {
            len: list.len(),
            chunk_capacity: list.chunk_capacity(),
            segment_fills: list.segment_fills(),
            mem_size: MemorySize::new(list.get_mem_size()),
        }
    }
}

impl Display for ListStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "len: {}, chunk_capacity: {}, segments: {}, fills: {:?}, mem: {}",
            self.len,
            self.chunk_capacity,
            self.segment_fills.len(),
            self.segment_fills.as_slice(),
            self.mem_size
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_ops(script: &[&str]) -> Vec<ListOp> {
        script.iter().map(|it| ListOp::from_str(it).unwrap()).collect()
    }

    #[test]
    fn test_run_script() {
        let mut list = ChunkedList::new(4);
        let ops = parse_ops(&[
            "add-back:a",
            "add-back:b",
            "add-back:c",
            "add-back:d",
            "add-back:e",
            "get-index:4",
            "size",
            "remove-index:2",
            "dump",
            "is-empty",
        ]);

        let lines = run_script(&mut list, &ops);

        assert_eq!(
            lines,
            vec![
                "add-back:a => ok",
                "add-back:b => ok",
                "add-back:c => ok",
                "add-back:d => ok",
                "add-back:e => ok",
                "get-index:4 => e",
                "size => 5",
                "remove-index:2 => c",
                r#"dump => ["a", "b", "d", "e"]"#,
                "is-empty => false",
            ]
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_script() {
        let mut list = ChunkedList::new(2);
        let ops = parse_ops(&["remove-front", "add-front:x", "get-index:-1", "get-front"]);

        let lines = run_script(&mut list, &ops);

        assert_eq!(
            lines,
            vec![
                "remove-front => error[r3bl_chunky_list::empty_list]: 🫙 The list is empty",
                "add-front:x => ok",
                "get-index:-1 => error[r3bl_chunky_list::bad_index]: 🔍 Index -1 is out of \
                 bounds, expected 0 <= index < len (len = 1)",
                "get-front => x",
            ]
        );
    }

    #[test]
    fn test_stats() {
        let mut list = ChunkedList::new(2);
        for it in ["a", "b", "c"] {
            list.add_back(it.to_string()).unwrap();
        }

        let stats = ListStats::from(&list);
        assert_eq!(stats.len, 3);
        assert_eq!(stats.segment_fills.as_slice(), &[2, 1]);

        let line = apply_op(&mut list, &ListOp::Stats).unwrap();
        assert!(
            line.starts_with("len: 3, chunk_capacity: 2, segments: 2, fills: [2, 1], mem: "),
            "{line}"
        );
    }
}
