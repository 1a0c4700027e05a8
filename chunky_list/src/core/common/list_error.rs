// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors reported by every implementation of [`crate::SequenceList`].
//!
//! All of them are reported immediately to the caller. None are retried or recovered
//! internally, and every operation validates its arguments before it mutates anything,
//! so a call that returns an error leaves the list exactly as it was.
//!
//! For more information on the error handling approach, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::ValidRange;

/// Type alias for the result of every list operation.
pub type ListResult<T> = Result<T, ListError>;

/// Errors that list operations can report.
///
/// | Variant                  | Cause                                                        |
/// | :----------------------- | :----------------------------------------------------------- |
/// | [`EmptyList`]            | The operation needs at least one item, but the list is empty |
/// | [`BadIndex`]             | The index is outside of the operation's valid range          |
/// | [`OutOfCapacity`]        | A [`crate::BoundedSegment`] used directly is already full    |
/// | [`InvalidChunkCapacity`] | A [`crate::ChunkedList`] was configured with capacity 0      |
///
/// [`EmptyList`]: Self::EmptyList
/// [`BadIndex`]: Self::BadIndex
/// [`OutOfCapacity`]: Self::OutOfCapacity
/// [`InvalidChunkCapacity`]: Self::InvalidChunkCapacity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ListError {
    #[error("🫙 The list is empty")]
    #[diagnostic(
        code(r3bl_chunky_list::empty_list),
        help("Check `is_empty()` before removing or reading items.")
    )]
    EmptyList,

    #[error("🔍 Index {index} is out of bounds, expected {valid_range} (len = {len})")]
    #[diagnostic(
        code(r3bl_chunky_list::bad_index),
        help("Reads and removals accept `0..len`, insertions accept `0..=len`.")
    )]
    BadIndex {
        index: isize,
        len: usize,
        valid_range: ValidRange,
    },

    #[error("📦 The segment is full (capacity = {capacity})")]
    #[diagnostic(
        code(r3bl_chunky_list::out_of_capacity),
        help(
            "A bounded segment never grows. Use a `ChunkedList` or a `GrowableList` \
             if you need an unbounded list."
        )
    )]
    OutOfCapacity { capacity: usize },

    #[error("📐 Invalid chunk capacity {requested}, it must be at least 1")]
    #[diagnostic(code(r3bl_chunky_list::invalid_chunk_capacity))]
    InvalidChunkCapacity { requested: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bad_index() {
        let error = ListError::BadIndex {
            index: -1,
            len: 4,
            valid_range: ValidRange::Exclusive,
        };
        assert_eq!(
            error.to_string(),
            "🔍 Index -1 is out of bounds, expected 0 <= index < len (len = 4)"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;

        let code = ListError::OutOfCapacity { capacity: 4 }
            .code()
            .map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_chunky_list::out_of_capacity"));
    }
}
