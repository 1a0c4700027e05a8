// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The hybrid list. It combines the memory locality of a [`BoundedSegment`] with the
//! cheap edge insertion of a [`Chain`].

use std::{fmt::Debug, num::NonZeroUsize};

use smallvec::SmallVec;

use super::{BoundedSegment, Chain, ChainIterator, ChunkedListConfig, SequenceList};
use crate::{GetMemSize, ListError, ListIndex, ListResult, ValidRange, iter_size};

/// Number of segment fills that [`ChunkedList::segment_fills`] stores inline before it
/// spills to the heap.
pub const INLINE_SEGMENT_FILLS: usize = 8;

pub type SegmentFills = SmallVec<[usize; INLINE_SEGMENT_FILLS]>;

/// An indexable list that stores its items in a [`Chain`] of [`BoundedSegment`]s,
/// which all have the same `chunk_capacity`.
///
/// - A new list holds one empty segment.
/// - Adding to a full edge segment links a new segment at that edge.
/// - Inserting into a full segment in the middle splits it at the insertion point. The
///   trailing items move into a new segment linked right after it, so no segment ever
///   holds more than `chunk_capacity` items.
/// - A segment that is emptied by a removal is unlinked by that same removal.
///
/// Global indices are translated into a `(segment, local index)` pair by scanning the
/// segments in order and keeping a running start offset.
///
/// | Operation                         | Cost                        |
/// | :-------------------------------- | :-------------------------- |
/// | `add_front`, `remove_front`       | `O(C)`, `O(1)` amortized    |
/// | `get_front`                       | `O(1)`                      |
/// | `add_back`, `remove_back`         | `O(n/C)` to reach the tail  |
/// | `*_index`                         | `O(n/C)` to locate + `O(C)` |
/// | `len`                             | `O(n/C)`                    |
///
/// # Examples
///
/// ```
/// use r3bl_chunky_list::{ChunkedList, ListError, SequenceList};
///
/// let mut list = ChunkedList::new(4);
/// for it in ["a", "b", "c", "d", "e"] {
///     list.add_back(it).unwrap();
/// }
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.segment_count(), 2);
///
/// assert_eq!(list.remove_index(2), Ok("c"));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "d", "e"]);
/// assert!(matches!(list.get_index(-1), Err(ListError::BadIndex { .. })));
/// ```
#[derive(Clone)]
pub struct ChunkedList<T> {
    chunks: Chain<BoundedSegment<T>>,
    chunk_capacity: NonZeroUsize,
}

/// Where a global index lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLocation {
    pub segment_position: usize,
    pub local_index: usize,
}

mod constructor {
    use super::{
        BoundedSegment, Chain, ChunkedList, ChunkedListConfig, ListError, ListResult,
        NonZeroUsize,
    };

    impl<T> ChunkedList<T> {
        /// # Panics
        ///
        /// If `chunk_capacity` is 0. Use [`ChunkedList::try_new`] to get an error
        /// instead.
        #[must_use]
        pub fn new(chunk_capacity: usize) -> Self {
            match NonZeroUsize::new(chunk_capacity) {
                Some(chunk_capacity) => Self::with_chunk_capacity(chunk_capacity),
                None => panic!("chunk_capacity must be at least 1"),
            }
        }

        /// # Errors
        ///
        /// [`ListError::InvalidChunkCapacity`] if `chunk_capacity` is 0.
        pub fn try_new(chunk_capacity: usize) -> ListResult<Self> {
            NonZeroUsize::new(chunk_capacity)
                .map(Self::with_chunk_capacity)
                .ok_or(ListError::InvalidChunkCapacity {
                    requested: chunk_capacity,
                })
        }

        /// # Errors
        ///
        /// [`ListError::InvalidChunkCapacity`] if the configured capacity is 0.
        pub fn try_from_config(config: ChunkedListConfig) -> ListResult<Self> {
            config.try_chunk_capacity().map(Self::with_chunk_capacity)
        }

        #[must_use]
        pub fn with_chunk_capacity(chunk_capacity: NonZeroUsize) -> Self {
            let mut chunks = Chain::new();
            chunks.extend(std::iter::once(BoundedSegment::new(chunk_capacity.get())));
            Self {
                chunks,
                chunk_capacity,
            }
        }

        /// Packs the items front to back, so every segment but the last one is full.
        pub fn from_iter_with_capacity(
            chunk_capacity: NonZeroUsize,
            iter: impl IntoIterator<Item = T>,
        ) -> Self {
            let mut it = Self::with_chunk_capacity(chunk_capacity);
            it.extend(iter);
            it
        }
    }

    impl<T> Default for ChunkedList<T> {
        fn default() -> Self {
            let chunk_capacity = ChunkedListConfig::default()
                .try_chunk_capacity()
                .unwrap_or(NonZeroUsize::MIN);
            Self::with_chunk_capacity(chunk_capacity)
        }
    }
}

mod introspect {
    use super::{BoundedSegment, ChunkedList, SegmentFills};
    use crate::SequenceList;

    impl<T> ChunkedList<T> {
        #[must_use]
        pub fn chunk_capacity(&self) -> usize { self.chunk_capacity.get() }

        /// Number of segments in the chain. An empty list has 0 or 1.
        #[must_use]
        pub fn segment_count(&self) -> usize { self.chunks.len() }

        /// The fill of every segment, in chain order.
        #[must_use]
        pub fn segment_fills(&self) -> SegmentFills {
            self.chunks.iter().map(BoundedSegment::len).collect()
        }
    }
}

mod locate {
    use super::{ChunkedList, ListError, ListIndex, ListResult, SegmentLocation, ValidRange};
    use crate::SequenceList;

    impl<T> ChunkedList<T> {
        /// Find the segment that holds the item at global `index`, or `None` if
        /// `index >= len()`.
        #[must_use]
        pub fn locate(&self, index: usize) -> Option<SegmentLocation> {
            let mut start = 0;
            for (segment_position, segment) in self.chunks.iter().enumerate() {
                let end = start + segment.len();
                if index < end {
                    return Some(SegmentLocation {
                        segment_position,
                        local_index: index - start,
                    });
                }
                start = end;
            }
            None
        }

        pub(super) fn try_locate(&self, index: usize) -> ListResult<SegmentLocation> {
            self.locate(index).ok_or_else(|| ListError::BadIndex {
                index: ListIndex::from(index).as_isize(),
                len: self.len(),
                valid_range: ValidRange::Exclusive,
            })
        }
    }
}

mod topology {
    use super::{BoundedSegment, ChunkedList, ListError, ListResult};
    use crate::SequenceList;

    impl<T> ChunkedList<T> {
        pub(super) fn check_not_empty(&self) -> ListResult<()> {
            if self.is_empty() {
                return Err(ListError::EmptyList);
            }
            Ok(())
        }

        pub(super) fn front_has_room(&self) -> bool {
            self.chunks.get_front().is_ok_and(|segment| !segment.is_full())
        }

        pub(super) fn back_has_room(&self) -> bool {
            self.chunks.get_back().is_ok_and(|segment| !segment.is_full())
        }

        /// Unlink the segment at `segment_position`. The caller has just emptied it.
        pub(super) fn collapse(&mut self, segment_position: usize) -> ListResult<()> {
            let _unused: BoundedSegment<T> = self.chunks.remove_index(segment_position)?;
            tracing::trace!(
                message = "collapsed empty segment",
                segment_position,
                segment_count = self.chunks.len()
            );
            Ok(())
        }

        /// Insert `item` at `local_index` of the full segment at `segment_position`.
        /// The items from `local_index` onward move into a new segment that is linked
        /// right after it, then `item` is appended to the leading segment.
        pub(super) fn split_and_insert(
            &mut self,
            item: T,
            segment_position: usize,
            local_index: usize,
        ) -> ListResult<()> {
            let leading = self.chunks.get_index_mut(segment_position)?;
            let trailing = leading.split_off(local_index)?;
            leading.add_back(item)?;

            let moved = trailing.len();
            self.chunks.add_index(trailing, segment_position + 1)?;

            tracing::debug!(
                message = "split full segment",
                segment_position,
                local_index,
                moved,
                chunk_capacity = self.chunk_capacity.get()
            );
            Ok(())
        }
    }
}

impl<T> SequenceList<T> for ChunkedList<T> {
    fn add_front(&mut self, item: T) -> ListResult<()> {
        if self.front_has_room() {
            return self.chunks.get_front_mut()?.add_front(item);
        }
        self.chunks
            .add_front(BoundedSegment::new_with_first(self.chunk_capacity, item))?;
        tracing::trace!(
            message = "allocated segment at front",
            chunk_capacity = self.chunk_capacity.get(),
            segment_count = self.chunks.len()
        );
        Ok(())
    }

    fn add_back(&mut self, item: T) -> ListResult<()> {
        if self.back_has_room() {
            return self.chunks.get_back_mut()?.add_back(item);
        }
        self.chunks
            .add_back(BoundedSegment::new_with_first(self.chunk_capacity, item))?;
        tracing::trace!(
            message = "allocated segment at back",
            chunk_capacity = self.chunk_capacity.get(),
            segment_count = self.chunks.len()
        );
        Ok(())
    }

    fn add_index(&mut self, item: T, arg_index: impl Into<ListIndex>) -> ListResult<()> {
        let len = self.len();
        let index = arg_index.into().try_resolve(len, ValidRange::Inclusive)?;
        if index == 0 {
            return self.add_front(item);
        }
        if index == len {
            return self.add_back(item);
        }

        let SegmentLocation {
            segment_position,
            local_index,
        } = self.try_locate(index)?;

        let segment = self.chunks.get_index_mut(segment_position)?;
        if segment.is_full() {
            self.split_and_insert(item, segment_position, local_index)
        } else {
            segment.add_index(item, local_index)
        }
    }

    fn remove_front(&mut self) -> ListResult<T> {
        self.check_not_empty()?;
        let segment = self.chunks.get_front_mut()?;
        let item = segment.remove_front()?;
        if segment.is_empty() {
            self.collapse(0)?;
        }
        Ok(item)
    }

    fn remove_back(&mut self) -> ListResult<T> {
        self.check_not_empty()?;
        let last = self.chunks.len() - 1;
        let segment = self.chunks.get_back_mut()?;
        let item = segment.remove_back()?;
        if segment.is_empty() {
            self.collapse(last)?;
        }
        Ok(item)
    }

    fn remove_index(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<T> {
        self.check_not_empty()?;
        let len = self.len();
        let index = arg_index.into().try_resolve(len, ValidRange::Exclusive)?;
        if index == 0 {
            return self.remove_front();
        }
        if index == len - 1 {
            return self.remove_back();
        }

        let SegmentLocation {
            segment_position,
            local_index,
        } = self.try_locate(index)?;

        let segment = self.chunks.get_index_mut(segment_position)?;
        let item = segment.remove_index(local_index)?;
        if segment.is_empty() {
            self.collapse(segment_position)?;
        }
        Ok(item)
    }

    fn get_front(&self) -> ListResult<&T> {
        self.check_not_empty()?;
        self.chunks.get_front()?.get_front()
    }

    fn get_back(&self) -> ListResult<&T> {
        self.check_not_empty()?;
        self.chunks.get_back()?.get_back()
    }

    fn get_index(&self, arg_index: impl Into<ListIndex>) -> ListResult<&T> {
        self.check_not_empty()?;
        let index = arg_index.into().try_resolve(self.len(), ValidRange::Exclusive)?;
        let SegmentLocation {
            segment_position,
            local_index,
        } = self.try_locate(index)?;
        self.chunks.get_index(segment_position)?.get_index(local_index)
    }

    fn len(&self) -> usize { self.chunks.iter().map(BoundedSegment::len).sum() }

    /// True when there are no segments, or the first one is empty.
    fn is_empty(&self) -> bool {
        self.chunks.is_empty() || self.chunks.get_front().is_ok_and(BoundedSegment::is_empty)
    }
}

mod mutator {
    use super::{ChunkedList, ListIndex, ListResult, SegmentLocation, ValidRange};
    use crate::{BoundedSegment, SequenceList};

    impl<T> ChunkedList<T> {
        /// # Errors
        ///
        /// [`crate::ListError::EmptyList`] if the list is empty.
        pub fn get_front_mut(&mut self) -> ListResult<&mut T> {
            self.check_not_empty()?;
            self.chunks.get_front_mut()?.get_index_mut(0)
        }

        /// # Errors
        ///
        /// [`crate::ListError::EmptyList`] if the list is empty.
        pub fn get_back_mut(&mut self) -> ListResult<&mut T> {
            self.check_not_empty()?;
            let segment = self.chunks.get_back_mut()?;
            let last = segment.len() - 1;
            segment.get_index_mut(last)
        }

        /// # Errors
        ///
        /// [`crate::ListError::EmptyList`] if the list is empty,
        /// [`crate::ListError::BadIndex`] if the index is not in `0..len()`.
        pub fn get_index_mut(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<&mut T> {
            self.check_not_empty()?;
            let index = arg_index.into().try_resolve(self.len(), ValidRange::Exclusive)?;
            let SegmentLocation {
                segment_position,
                local_index,
            } = self.try_locate(index)?;
            self.chunks
                .get_index_mut(segment_position)?
                .get_index_mut(local_index)
        }

        /// Drop every item, leaving the single empty segment of a new list.
        pub fn clear(&mut self) {
            self.chunks.clear();
            self.chunks
                .extend(std::iter::once(BoundedSegment::new(self.chunk_capacity.get())));
        }
    }
}

mod iterator {
    use std::{fmt::Debug, iter::Flatten};

    use super::{BoundedSegment, ChainIterator, ChunkedList};
    use crate::SequenceList;

    impl<T> ChunkedList<T> {
        /// Starts a new cursor at the first item of the first segment.
        #[must_use]
        pub fn iter(&self) -> ChunkedListIterator<'_, T> {
            ChunkedListIterator {
                items: self.chunks.iter().flatten(),
                remaining: self.len(),
            }
        }
    }

    pub struct ChunkedListIterator<'a, T> {
        items: Flatten<ChainIterator<'a, BoundedSegment<T>>>,
        remaining: usize,
    }

    impl<'a, T> Iterator for ChunkedListIterator<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            let it = self.items.next()?;
            self.remaining -= 1;
            Some(it)
        }

        fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
    }

    impl<T> ExactSizeIterator for ChunkedListIterator<'_, T> {}

    impl<T> Debug for ChunkedListIterator<'_, T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ChunkedListIterator")
                .field("remaining", &self.remaining)
                .finish_non_exhaustive()
        }
    }

    /// Owning iterator. Takes items off the front, so segments are released as soon as
    /// they are drained.
    #[derive(Debug)]
    pub struct ChunkedListIntoIterator<T> {
        list: ChunkedList<T>,
    }

    impl<T> Iterator for ChunkedListIntoIterator<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> { self.list.remove_front().ok() }

        fn size_hint(&self) -> (usize, Option<usize>) {
            let len = self.list.len();
            (len, Some(len))
        }
    }

    impl<T> ExactSizeIterator for ChunkedListIntoIterator<T> {}

    impl<T> IntoIterator for ChunkedList<T> {
        type Item = T;
        type IntoIter = ChunkedListIntoIterator<T>;

        fn into_iter(self) -> Self::IntoIter { ChunkedListIntoIterator { list: self } }
    }

    impl<'a, T> IntoIterator for &'a ChunkedList<T> {
        type Item = &'a T;
        type IntoIter = ChunkedListIterator<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }
}
pub use iterator::*;

impl<T> Extend<T> for ChunkedList<T> {
    /// Tops up the last segment, then packs the rest into new full segments that are
    /// linked at the back in one pass.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();

        let mut overflow = None;
        if let Ok(last) = self.chunks.get_back_mut() {
            for item in iter.by_ref() {
                if let Err(item) = last.push_within_capacity(item) {
                    overflow = Some(item);
                    break;
                }
            }
        }

        let mut new_segments: Vec<BoundedSegment<T>> = Vec::new();
        for item in overflow.into_iter().chain(iter) {
            let item = match new_segments.last_mut() {
                Some(segment) => match segment.push_within_capacity(item) {
                    Ok(()) => continue,
                    Err(item) => item,
                },
                None => item,
            };
            new_segments.push(BoundedSegment::new_with_first(self.chunk_capacity, item));
        }

        if !new_segments.is_empty() {
            let added = new_segments.len();
            self.chunks.extend(new_segments);
            tracing::trace!(
                message = "allocated segments at back",
                added,
                segment_count = self.chunks.len()
            );
        }
    }
}

/// Compares items only. Two lists with the same items are equal even if their
/// segments are laid out differently.
impl<T: PartialEq> PartialEq for ChunkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ChunkedList<T> {}

impl<T: Debug> Debug for ChunkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> GetMemSize for ChunkedList<T> {
    fn get_mem_size(&self) -> usize {
        let node_overhead = self.chunks.len() * std::mem::size_of::<usize>();
        std::mem::size_of::<Self>() + node_overhead + iter_size(self.chunks.iter())
    }
}
