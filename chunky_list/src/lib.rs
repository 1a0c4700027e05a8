// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_chunky_list
//!
//! An indexable list backed by a singly linked chain of fixed capacity segments. It
//! has the memory locality of an array, and `O(1)` amortized insertion at the front.
//!
//! The crate is built bottom up from three pieces, and each of them is usable on its
//! own:
//!
//! | Type               | What it is                                                      |
//! | :----------------- | :-------------------------------------------------------------- |
//! | [`BoundedSegment`] | A fixed capacity ordered buffer, allocated once                 |
//! | [`Chain`]          | A generic singly linked list where each node owns the next one  |
//! | [`ChunkedList`]    | A [`Chain`] of [`BoundedSegment`]s that all share one capacity  |
//!
//! [`GrowableList`] is a plain doubling array list. It implements the same
//! [`SequenceList`] contract, so it can stand in for a [`ChunkedList`] in generic
//! code.
//!
//! ## Choosing a chunk capacity
//!
//! The chunk capacity `C` of a [`ChunkedList`] is fixed at construction time (see
//! [`ChunkedListConfig`]). Larger values mean fewer segments to walk and fewer segment
//! allocations, but more items to shift on an insert or remove in the middle of a
//! segment.
//!
//! ```
//! use r3bl_chunky_list::{ChunkedList, SequenceList};
//!
//! let mut list = ChunkedList::new(4);
//! for it in ["1", "0", "-1", "-2"] {
//!     list.add_front(it).unwrap();
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["-2", "-1", "0", "1"]);
//! assert_eq!(list.get_index(1), Ok(&"-1"));
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns a [`ListResult`]. See [`ListError`] for the
//! variants. A call that fails never changes the list.
//!
//! ## Logging
//!
//! [`ChunkedList`] emits [`tracing`] events when it allocates, splits, or collapses a
//! segment. Use [`TracingConfig`] to send them to the terminal or to a file.
//!
//! ## Thread safety
//!
//! None of the types synchronize internally. Wrap a list in a mutex to share it
//! between threads.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod cli;
pub mod core;
pub mod list;

// Re-export.
pub use cli::*;
pub use core::*;
pub use list::*;
