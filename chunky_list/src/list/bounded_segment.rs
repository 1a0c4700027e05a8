// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed capacity, ordered buffer. It is the unit of storage of a
//! [`super::ChunkedList`], and also the backing store of a [`super::GrowableList`].

use std::fmt::Debug;

use super::SequenceList;
use crate::{GetMemSize, ListError, ListIndex, ListResult, ValidRange};

/// A fixed capacity ordered buffer.
///
/// - The capacity is chosen at construction time and the buffer is allocated once, it
///   never grows or shrinks.
/// - Items occupy slots `0..len()` with no gaps. Inserting or removing in the middle
///   shifts the items after that slot by one.
/// - Adding to a full segment returns [`ListError::OutOfCapacity`].
///
/// | Operation                      | Cost   |
/// | :----------------------------- | :----- |
/// | `add_back`, `remove_back`      | `O(1)` |
/// | `get_*`, `len`, `is_empty`     | `O(1)` |
/// | `add_front`, `add_index`       | `O(C)` |
/// | `remove_front`, `remove_index` | `O(C)` |
///
/// # Examples
///
/// ```
/// use r3bl_chunky_list::{BoundedSegment, ListError, SequenceList};
///
/// let mut segment = BoundedSegment::new(2);
/// segment.add_back("b").unwrap();
/// segment.add_front("a").unwrap();
///
/// assert!(segment.is_full());
/// assert_eq!(segment.add_back("c"), Err(ListError::OutOfCapacity { capacity: 2 }));
/// assert_eq!(segment.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Clone)]
pub struct BoundedSegment<T> {
    internal_storage: Box<[Option<T>]>,
    fill: usize,
}

mod constructor {
    use std::num::NonZeroUsize;

    use super::BoundedSegment;

    impl<T> BoundedSegment<T> {
        /// Allocates all `capacity` slots up front.
        #[must_use]
        pub fn new(capacity: usize) -> Self {
            Self {
                internal_storage: std::iter::repeat_with(|| None).take(capacity).collect(),
                fill: 0,
            }
        }

        /// A segment that already holds `item`. Can't fail since there is at least one
        /// slot.
        #[must_use]
        pub fn new_with_first(capacity: NonZeroUsize, item: T) -> Self {
            let mut it = Self::new(capacity.get());
            it.internal_storage[0] = Some(item);
            it.fill = 1;
            it
        }
    }
}

mod size {
    use super::BoundedSegment;

    impl<T> BoundedSegment<T> {
        #[must_use]
        pub fn capacity(&self) -> usize { self.internal_storage.len() }

        #[must_use]
        pub fn is_full(&self) -> bool { self.fill == self.capacity() }

        /// Number of free slots.
        #[must_use]
        pub fn remaining(&self) -> usize { self.capacity() - self.fill }
    }
}

mod shift {
    use super::{BoundedSegment, ListError, ListResult};

    impl<T> BoundedSegment<T> {
        /// Put `item` in slot `index`, moving `index..fill` one slot to the right. The
        /// caller has checked `fill < capacity` and `index <= fill`.
        pub(super) fn shift_right_and_insert(&mut self, item: T, index: usize) {
            self.internal_storage[self.fill] = Some(item);
            self.internal_storage[index..=self.fill].rotate_right(1);
            self.fill += 1;
        }

        /// Take the item in slot `index`, moving `index + 1..fill` one slot to the left.
        /// The caller has checked `index < fill`.
        pub(super) fn take_and_shift_left(&mut self, index: usize) -> ListResult<T> {
            let item = self.internal_storage[index]
                .take()
                .ok_or(ListError::EmptyList)?;
            self.internal_storage[index..self.fill].rotate_left(1);
            self.fill -= 1;
            Ok(item)
        }

        pub(super) fn check_has_room(&self) -> ListResult<()> {
            if self.is_full() {
                return Err(ListError::OutOfCapacity {
                    capacity: self.capacity(),
                });
            }
            Ok(())
        }

        pub(super) fn check_not_empty(&self) -> ListResult<()> {
            if self.fill == 0 {
                return Err(ListError::EmptyList);
            }
            Ok(())
        }
    }
}

mod mutator {
    use std::num::NonZeroUsize;

    use super::{BoundedSegment, BoundedSegmentDrain, ListIndex, ListResult, ValidRange};

    impl<T> BoundedSegment<T> {
        /// Append `item` if there is room, otherwise hand it back.
        ///
        /// # Errors
        ///
        /// Returns `item` if the segment is full.
        pub fn push_within_capacity(&mut self, item: T) -> Result<(), T> {
            if self.is_full() {
                return Err(item);
            }
            self.internal_storage[self.fill] = Some(item);
            self.fill += 1;
            Ok(())
        }

        /// Move the items in `at..len()` into a new segment with the same capacity. This
        /// segment keeps `0..at`.
        ///
        /// # Errors
        ///
        /// [`crate::ListError::BadIndex`] if `at` is not in `0..=len()`.
        pub fn split_off(&mut self, arg_at: impl Into<ListIndex>) -> ListResult<Self> {
            let at = arg_at.into().try_resolve(self.fill, ValidRange::Inclusive)?;

            let mut other = Self::new(self.capacity());
            for (slot, item) in self.internal_storage[at..self.fill].iter_mut().enumerate()
            {
                other.internal_storage[slot] = item.take();
            }
            other.fill = self.fill - at;
            self.fill = at;

            Ok(other)
        }

        /// Move every item out, front to back, leaving this segment empty. Items that the
        /// iterator does not yield are dropped along with it.
        pub fn drain(&mut self) -> BoundedSegmentDrain<'_, T> {
            let fill = std::mem::take(&mut self.fill);
            BoundedSegmentDrain {
                slots: self.internal_storage[..fill].iter_mut(),
            }
        }

        /// Move every item into a new segment that has `additional` more slots than this
        /// one. This segment is left empty, with its capacity unchanged.
        #[must_use]
        pub fn take_into_larger(&mut self, additional: NonZeroUsize) -> Self {
            let mut other = Self::new(self.capacity() + additional.get());
            for (slot, item) in self.internal_storage[..self.fill].iter_mut().enumerate() {
                other.internal_storage[slot] = item.take();
            }
            other.fill = std::mem::take(&mut self.fill);
            other
        }

        /// Drop every item. The capacity stays the same.
        pub fn clear(&mut self) {
            self.internal_storage.iter_mut().for_each(|slot| *slot = None);
            self.fill = 0;
        }

        /// # Errors
        ///
        /// [`crate::ListError::BadIndex`] if the index is not in `0..len()`.
        pub fn get_index_mut(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<&mut T> {
            let index = arg_index.into().try_resolve(self.fill, ValidRange::Exclusive)?;
            self.internal_storage[index]
                .as_mut()
                .ok_or(crate::ListError::EmptyList)
        }
    }
}

impl<T> SequenceList<T> for BoundedSegment<T> {
    fn add_front(&mut self, item: T) -> ListResult<()> { self.add_index(item, 0) }

    fn add_back(&mut self, item: T) -> ListResult<()> {
        self.check_has_room()?;
        self.internal_storage[self.fill] = Some(item);
        self.fill += 1;
        Ok(())
    }

    fn add_index(&mut self, item: T, arg_index: impl Into<ListIndex>) -> ListResult<()> {
        self.check_has_room()?;
        let index = arg_index.into().try_resolve(self.fill, ValidRange::Inclusive)?;
        self.shift_right_and_insert(item, index);
        Ok(())
    }

    fn remove_front(&mut self) -> ListResult<T> { self.remove_index(0) }

    fn remove_back(&mut self) -> ListResult<T> {
        self.check_not_empty()?;
        let item = self.internal_storage[self.fill - 1]
            .take()
            .ok_or(ListError::EmptyList)?;
        self.fill -= 1;
        Ok(item)
    }

    fn remove_index(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<T> {
        self.check_not_empty()?;
        let index = arg_index.into().try_resolve(self.fill, ValidRange::Exclusive)?;
        self.take_and_shift_left(index)
    }

    fn get_front(&self) -> ListResult<&T> {
        self.check_not_empty()?;
        self.get_index(0)
    }

    fn get_back(&self) -> ListResult<&T> {
        self.check_not_empty()?;
        self.get_index(self.fill - 1)
    }

    /// An empty segment reports [`ListError::BadIndex`] here, not
    /// [`ListError::EmptyList`].
    fn get_index(&self, arg_index: impl Into<ListIndex>) -> ListResult<&T> {
        let index = arg_index.into().try_resolve(self.fill, ValidRange::Exclusive)?;
        self.internal_storage[index]
            .as_ref()
            .ok_or(ListError::EmptyList)
    }

    fn len(&self) -> usize { self.fill }
}

impl<T> BoundedSegment<T> {
    #[must_use]
    pub fn iter(&self) -> BoundedSegmentIterator<'_, T> {
        BoundedSegmentIterator {
            slots: self.internal_storage[..self.fill].iter(),
        }
    }
}

/// This implementation allows the segment to be used in a for loop directly.
impl<'a, T> IntoIterator for &'a BoundedSegment<T> {
    type Item = &'a T;
    type IntoIter = BoundedSegmentIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[derive(Debug, Clone)]
pub struct BoundedSegmentIterator<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for BoundedSegmentIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> { self.slots.next().and_then(Option::as_ref) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.slots.size_hint() }
}

/// Owning iterator returned by [`BoundedSegment::drain`]. Dropping it clears the slots
/// it has not yielded yet.
#[derive(Debug)]
pub struct BoundedSegmentDrain<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
}

impl<T> Iterator for BoundedSegmentDrain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> { self.slots.next().and_then(Option::take) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.slots.size_hint() }
}

impl<T> Drop for BoundedSegmentDrain<'_, T> {
    fn drop(&mut self) { self.slots.by_ref().for_each(|slot| *slot = None); }
}

/// Only the items in `0..len()` take part. Capacity and free slots are ignored.
impl<T: PartialEq> PartialEq for BoundedSegment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fill == other.fill && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedSegment<T> {}

impl<T: Debug> Debug for BoundedSegment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> GetMemSize for BoundedSegment<T> {
    fn get_mem_size(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * std::mem::size_of::<Option<T>>()
    }
}
