// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ListIndex, ListResult};

/// The indexable sequence contract. There are four implementations of this trait:
/// - [`super::BoundedSegment`] which holds at most a fixed number of items.
/// - [`super::Chain`] which is a singly linked list.
/// - [`super::ChunkedList`] which is a [`super::Chain`] of [`super::BoundedSegment`]s.
/// - [`super::GrowableList`] which is an array that doubles when it fills up.
///
/// Since they share this contract, any of them can be swapped in for another in
/// generic code. Their cost profiles differ, see each type for details.
///
/// Every fallible operation validates its arguments before it mutates anything. If it
/// returns an error, the list is unchanged.
///
/// # Example
///
/// ```
/// use r3bl_chunky_list::{ChunkedList, GrowableList, ListResult, SequenceList};
///
/// fn fill<L: SequenceList<&'static str>>(list: &mut L) -> ListResult<()> {
///     list.add_back("b")?;
///     list.add_front("a")?;
///     list.add_index("c", 2)?;
///     Ok(())
/// }
///
/// let mut chunked = ChunkedList::new(2);
/// let mut growable = GrowableList::new();
/// fill(&mut chunked).unwrap();
/// fill(&mut growable).unwrap();
///
/// assert_eq!(chunked.get_index(2), Ok(&"c"));
/// assert_eq!(growable.get_index(2), Ok(&"c"));
/// assert_eq!(chunked.len(), growable.len());
/// ```
pub trait SequenceList<T> {
    /// Insert `item` so that it is at index 0 after this call.
    ///
    /// # Errors
    ///
    /// [`crate::ListError::OutOfCapacity`] for bounded implementations that are full.
    fn add_front(&mut self, item: T) -> ListResult<()>;

    /// Insert `item` so that it is at index `len() - 1` after this call.
    ///
    /// # Errors
    ///
    /// [`crate::ListError::OutOfCapacity`] for bounded implementations that are full.
    fn add_back(&mut self, item: T) -> ListResult<()>;

    /// Insert `item` at `arg_index`, shifting the items at and after it back by one.
    /// Valid indices are `0..=len()`.
    ///
    /// # Errors
    ///
    /// [`crate::ListError::BadIndex`] if the index is out of range, and
    /// [`crate::ListError::OutOfCapacity`] for bounded implementations that are full.
    fn add_index(&mut self, item: T, arg_index: impl Into<ListIndex>) -> ListResult<()>;

    /// # Errors
    ///
    /// [`crate::ListError::EmptyList`] if there is nothing to remove.
    fn remove_front(&mut self) -> ListResult<T>;

    /// # Errors
    ///
    /// [`crate::ListError::EmptyList`] if there is nothing to remove.
    fn remove_back(&mut self) -> ListResult<T>;

    /// Remove the item at `arg_index`, shifting the items after it forward by one.
    /// Valid indices are `0..len()`.
    ///
    /// # Errors
    ///
    /// [`crate::ListError::EmptyList`] if there is nothing to remove, and
    /// [`crate::ListError::BadIndex`] if the index is out of range.
    fn remove_index(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<T>;

    /// # Errors
    ///
    /// [`crate::ListError::EmptyList`] if the list is empty.
    fn get_front(&self) -> ListResult<&T>;

    /// # Errors
    ///
    /// [`crate::ListError::EmptyList`] if the list is empty.
    fn get_back(&self) -> ListResult<&T>;

    /// # Errors
    ///
    /// [`crate::ListError::BadIndex`] if the index is not in `0..len()`. Some
    /// implementations report [`crate::ListError::EmptyList`] first when empty.
    fn get_index(&self, arg_index: impl Into<ListIndex>) -> ListResult<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Same as [`SequenceList::add_back`].
    ///
    /// # Errors
    ///
    /// See [`SequenceList::add_back`].
    fn push(&mut self, item: T) -> ListResult<()> { self.add_back(item) }

    /// Same as [`SequenceList::remove_back`], but returns [None] instead of an error.
    fn pop(&mut self) -> Option<T> { self.remove_back().ok() }

    fn first(&self) -> Option<&T> { self.get_front().ok() }

    fn last(&self) -> Option<&T> { self.get_back().ok() }
}
