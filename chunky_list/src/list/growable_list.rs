// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, num::NonZeroUsize};

use super::{BoundedSegment, BoundedSegmentIterator, SequenceList};
use crate::{GetMemSize, ListError, ListIndex, ListResult, ValidRange};

/// Capacity of a [`GrowableList`] created with [`GrowableList::new`].
pub const START_CAPACITY: usize = 4;

/// An unbounded array list behind the same [`SequenceList`] contract as
/// [`super::ChunkedList`], so the two can be swapped in generic code.
///
/// It keeps all items in one [`BoundedSegment`]. When that segment is full, the items
/// are moved into a new segment with twice the capacity, which makes `add_back`
/// amortized `O(1)`. The capacity never shrinks.
///
/// # Examples
///
/// ```
/// use r3bl_chunky_list::{GrowableList, SequenceList};
///
/// let mut list = GrowableList::with_capacity(1);
/// for it in 0..5 {
///     list.add_back(it).unwrap();
/// }
/// assert_eq!(list.capacity(), 8);
/// assert_eq!(list.remove_index(2), Ok(2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 3, 4]);
/// ```
/// Equality is element-wise, the capacity is ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct GrowableList<T> {
    buffer: BoundedSegment<T>,
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> GrowableList<T> {
    #[must_use]
    pub fn new() -> Self { Self::with_capacity(START_CAPACITY) }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BoundedSegment::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Drop every item, keeping the current capacity.
    pub fn clear(&mut self) { self.buffer.clear(); }

    #[must_use]
    pub fn iter(&self) -> BoundedSegmentIterator<'_, T> { self.buffer.iter() }

    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty, [`ListError::BadIndex`] if the
    /// index is not in `0..len()`.
    pub fn get_index_mut(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<&mut T> {
        self.check_not_empty()?;
        self.buffer.get_index_mut(arg_index)
    }

    fn check_not_empty(&self) -> ListResult<()> {
        if self.buffer.is_empty() {
            return Err(ListError::EmptyList);
        }
        Ok(())
    }

    /// Make sure there is room for at least one more item.
    fn ensure_room(&mut self) {
        if self.buffer.is_full() {
            self.grow();
        }
    }

    /// Move the items into a segment with twice the capacity, or 1 slot if the
    /// capacity is 0.
    fn grow(&mut self) {
        let old_capacity = self.buffer.capacity();
        let additional = NonZeroUsize::new(old_capacity).unwrap_or(NonZeroUsize::MIN);
        self.buffer = self.buffer.take_into_larger(additional);

        tracing::trace!(
            message = "grew growable list",
            old_capacity,
            new_capacity = self.buffer.capacity()
        );
    }

    /// Append `item`, growing first if the buffer is full.
    fn push_growing(&mut self, item: T) {
        let mut pending = item;
        while let Err(item) = self.buffer.push_within_capacity(pending) {
            self.grow();
            pending = item;
        }
    }
}

impl<T> SequenceList<T> for GrowableList<T> {
    fn add_front(&mut self, item: T) -> ListResult<()> {
        self.ensure_room();
        self.buffer.add_front(item)
    }

    fn add_back(&mut self, item: T) -> ListResult<()> {
        self.push_growing(item);
        Ok(())
    }

    fn add_index(&mut self, item: T, arg_index: impl Into<ListIndex>) -> ListResult<()> {
        let index = arg_index
            .into()
            .try_resolve(self.buffer.len(), ValidRange::Inclusive)?;
        self.ensure_room();
        self.buffer.add_index(item, index)
    }

    fn remove_front(&mut self) -> ListResult<T> { self.buffer.remove_front() }

    fn remove_back(&mut self) -> ListResult<T> { self.buffer.remove_back() }

    fn remove_index(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<T> {
        self.buffer.remove_index(arg_index)
    }

    fn get_front(&self) -> ListResult<&T> { self.buffer.get_front() }

    fn get_back(&self) -> ListResult<&T> { self.buffer.get_back() }

    fn get_index(&self, arg_index: impl Into<ListIndex>) -> ListResult<&T> {
        self.check_not_empty()?;
        self.buffer.get_index(arg_index)
    }

    fn len(&self) -> usize { self.buffer.len() }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = BoundedSegmentIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> Extend<T> for GrowableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_growing(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut it = Self::new();
        it.extend(iter);
        it
    }
}

impl<T: Debug> Debug for GrowableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> GetMemSize for GrowableList<T> {
    fn get_mem_size(&self) -> usize { self.buffer.get_mem_size() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let list: GrowableList<i32> = GrowableList::new();
        assert_eq!(list.capacity(), START_CAPACITY);
        assert!(list.is_empty());
        assert_eq!(format!("{list:?}"), "[]");
    }

    #[test_case(0, &[1, 2, 4, 4, 8])]
    #[test_case(1, &[1, 2, 4, 4, 8])]
    #[test_case(3, &[3, 3, 3, 6, 6])]
    fn test_capacity_doubles_when_full(start: usize, expected: &[usize]) {
        let mut list = GrowableList::with_capacity(start);
        let mut capacities = vec![];
        for it in 0..5 {
            list.add_back(it).unwrap();
            capacities.push(list.capacity());
        }
        assert_eq!(capacities, expected);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_add_front_and_index_grow() {
        let mut list = GrowableList::with_capacity(2);
        list.add_front("c").unwrap();
        list.add_front("a").unwrap();
        list.add_index("b", 1).unwrap();
        list.add_index("d", 3).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_bad_index_does_not_grow() {
        let mut list = GrowableList::with_capacity(1);
        list.add_back(1).unwrap();
        assert!(matches!(list.add_index(2, 5), Err(ListError::BadIndex { .. })));
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn test_empty_errors() {
        let mut list: GrowableList<i32> = GrowableList::new();
        assert_eq!(list.remove_front(), Err(ListError::EmptyList));
        assert_eq!(list.remove_back(), Err(ListError::EmptyList));
        assert_eq!(list.remove_index(0), Err(ListError::EmptyList));
        assert_eq!(list.get_front(), Err(ListError::EmptyList));
        assert_eq!(list.get_back(), Err(ListError::EmptyList));
        assert_eq!(list.get_index(0), Err(ListError::EmptyList));
        assert_eq!(list.get_index_mut(0), Err(ListError::EmptyList));
    }

    #[test]
    fn test_collect_extend_clear() {
        let mut list: GrowableList<i32> = (0..10).collect();
        assert_eq!(list.len(), 10);
        assert_eq!(list.capacity(), 16);

        list.extend([10, 11]);
        *list.get_index_mut(0).unwrap() = -1;
        assert_eq!(list.get_front(), Ok(&-1));
        assert_eq!(list.get_back(), Ok(&11));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 16);
    }

    #[test]
    fn test_eq_ignores_capacity() {
        let mut small = GrowableList::with_capacity(1);
        small.add_back(1).unwrap();
        let mut large = GrowableList::with_capacity(4);
        large.add_back(1).unwrap();
        assert_eq!(small, large);

        large.add_back(2).unwrap();
        large.remove_back().unwrap();
        assert_eq!(small, large);

        small.add_front(0).unwrap();
        assert_ne!(small, large);
    }

    #[test]
    fn test_extend_keeps_every_item_across_growth() {
        let mut list = GrowableList::with_capacity(0);
        list.extend(0..100);
        assert_eq!(list.len(), 100);
        assert_eq!(list.capacity(), 128);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>());
    }
}
