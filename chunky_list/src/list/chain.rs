// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A generic singly linked list. [`super::ChunkedList`] uses it to hold its segments,
//! but it works with any item type.

use std::fmt::Debug;

use super::SequenceList;
use crate::{GetMemSize, ListError, ListIndex, ListResult, ValidRange, iter_size};

/// A singly linked list where every node owns its successor.
///
/// - There is no tail pointer and no back reference, so ownership is a simple chain of
///   [Box]es from the head, and a cycle can't be expressed.
/// - Operations at the front are `O(1)`. Everything that needs the back, or a position,
///   walks the links from the head: `add_back`, `remove_back`, `get_back`, and the
///   `*_index` operations are `O(n)`.
/// - [`Chain::iter`] starts a new, independent, forward only cursor at the head every
///   time it is called.
///
/// # Examples
///
/// ```
/// use r3bl_chunky_list::{Chain, SequenceList};
///
/// let mut chain: Chain<i32> = [2, 3].into_iter().collect();
/// chain.add_front(1).unwrap();
/// chain.add_back(5).unwrap();
/// chain.add_index(4, 3).unwrap();
///
/// assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(chain.remove_index(1), Ok(2));
/// assert_eq!(chain.remove_back(), Ok(5));
/// assert_eq!(chain.len(), 3);
/// ```
pub struct Chain<T> {
    head: Link<T>,
    count: usize,
}

type Link<T> = Option<Box<ChainNode<T>>>;

struct ChainNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Chain<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }

    /// Returns the link that points at the node in `position`, which is the `next`
    /// field of the node before it (or the head). When `position == len()` this is
    /// the empty link after the last node.
    fn link_at_mut(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn node_at(&self, position: usize) -> Option<&ChainNode<T>> {
        let mut cursor = self.head.as_deref();
        for _ in 0..position {
            cursor = cursor?.next.as_deref();
        }
        cursor
    }

    fn check_not_empty(&self) -> ListResult<()> {
        if self.count == 0 {
            return Err(ListError::EmptyList);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the chain is empty.
    pub fn get_front_mut(&mut self) -> ListResult<&mut T> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(ListError::EmptyList)
    }

    /// `O(n)`.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the chain is empty.
    pub fn get_back_mut(&mut self) -> ListResult<&mut T> {
        self.check_not_empty()?;
        let last = self.count - 1;
        self.get_index_mut(last)
    }

    /// `O(n)`.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the chain is empty, [`ListError::BadIndex`] if the
    /// index is not in `0..len()`.
    pub fn get_index_mut(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<&mut T> {
        self.check_not_empty()?;
        let index = arg_index.into().try_resolve(self.count, ValidRange::Exclusive)?;
        self.iter_mut().nth(index).ok_or(ListError::EmptyList)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.count = 0;
    }
}

impl<T> SequenceList<T> for Chain<T> {
    fn add_front(&mut self, item: T) -> ListResult<()> {
        let next = self.head.take();
        self.head = Some(Box::new(ChainNode { value: item, next }));
        self.count += 1;
        Ok(())
    }

    /// `O(n)`, walks to the last node.
    fn add_back(&mut self, item: T) -> ListResult<()> {
        let count = self.count;
        self.add_index(item, count)
    }

    fn add_index(&mut self, item: T, arg_index: impl Into<ListIndex>) -> ListResult<()> {
        let index = arg_index.into().try_resolve(self.count, ValidRange::Inclusive)?;
        let link = self.link_at_mut(index);
        let next = link.take();
        *link = Some(Box::new(ChainNode { value: item, next }));
        self.count += 1;
        Ok(())
    }

    fn remove_front(&mut self) -> ListResult<T> {
        let node = self.head.take().ok_or(ListError::EmptyList)?;
        let ChainNode { value, next } = *node;
        self.head = next;
        self.count -= 1;
        Ok(value)
    }

    /// `O(n)`, walks to the second to last node. Removing the only node leaves the
    /// chain empty.
    fn remove_back(&mut self) -> ListResult<T> {
        self.check_not_empty()?;
        let last = self.count - 1;
        self.remove_index(last)
    }

    fn remove_index(&mut self, arg_index: impl Into<ListIndex>) -> ListResult<T> {
        self.check_not_empty()?;
        let index = arg_index.into().try_resolve(self.count, ValidRange::Exclusive)?;
        let link = self.link_at_mut(index);
        let node = link.take().ok_or(ListError::EmptyList)?;
        let ChainNode { value, next } = *node;
        *link = next;
        self.count -= 1;
        Ok(value)
    }

    fn get_front(&self) -> ListResult<&T> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    /// `O(n)`.
    fn get_back(&self) -> ListResult<&T> {
        self.check_not_empty()?;
        self.get_index(self.count - 1)
    }

    /// `O(n)`.
    fn get_index(&self, arg_index: impl Into<ListIndex>) -> ListResult<&T> {
        self.check_not_empty()?;
        let index = arg_index.into().try_resolve(self.count, ValidRange::Exclusive)?;
        self.node_at(index)
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    fn len(&self) -> usize { self.count }
}

/// Drop the nodes in a loop. The default recursive drop of nested [Box]es would use
/// one stack frame per node.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) { self.clear(); }
}

mod iterator {
    use super::{Chain, ChainNode, SequenceList};

    impl<T> Chain<T> {
        #[must_use]
        pub fn iter(&self) -> ChainIterator<'_, T> {
            ChainIterator {
                cursor: self.head.as_deref(),
                remaining: self.count,
            }
        }

        pub fn iter_mut(&mut self) -> ChainIteratorMut<'_, T> {
            ChainIteratorMut {
                cursor: self.head.as_deref_mut(),
                remaining: self.count,
            }
        }
    }

    pub struct ChainIterator<'a, T> {
        cursor: Option<&'a ChainNode<T>>,
        remaining: usize,
    }

    impl<'a, T> Iterator for ChainIterator<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            let node = self.cursor?;
            self.cursor = node.next.as_deref();
            self.remaining -= 1;
            Some(&node.value)
        }

        fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
    }

    impl<T> ExactSizeIterator for ChainIterator<'_, T> {}

    impl<T> Clone for ChainIterator<'_, T> {
        fn clone(&self) -> Self {
            Self {
                cursor: self.cursor,
                remaining: self.remaining,
            }
        }
    }

    impl<T> std::fmt::Debug for ChainIterator<'_, T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ChainIterator")
                .field("remaining", &self.remaining)
                .finish()
        }
    }

    pub struct ChainIteratorMut<'a, T> {
        cursor: Option<&'a mut ChainNode<T>>,
        remaining: usize,
    }

    impl<'a, T> Iterator for ChainIteratorMut<'a, T> {
        type Item = &'a mut T;

        fn next(&mut self) -> Option<Self::Item> {
            let node = self.cursor.take()?;
            self.cursor = node.next.as_deref_mut();
            self.remaining -= 1;
            Some(&mut node.value)
        }

        fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
    }

    impl<T> ExactSizeIterator for ChainIteratorMut<'_, T> {}

    impl<T> std::fmt::Debug for ChainIteratorMut<'_, T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ChainIteratorMut")
                .field("remaining", &self.remaining)
                .finish()
        }
    }

    /// Owning iterator, pops from the front.
    #[derive(Debug)]
    pub struct ChainIntoIterator<T> {
        chain: Chain<T>,
    }

    impl<T> Iterator for ChainIntoIterator<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> { self.chain.remove_front().ok() }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.chain.len(), Some(self.chain.len()))
        }
    }

    impl<T> ExactSizeIterator for ChainIntoIterator<T> {}

    impl<T> IntoIterator for Chain<T> {
        type Item = T;
        type IntoIter = ChainIntoIterator<T>;

        fn into_iter(self) -> Self::IntoIter { ChainIntoIterator { chain: self } }
    }

    /// This implementation allows the chain to be used in a for loop directly.
    impl<'a, T> IntoIterator for &'a Chain<T> {
        type Item = &'a T;
        type IntoIter = ChainIterator<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }

    impl<'a, T> IntoIterator for &'a mut Chain<T> {
        type Item = &'a mut T;
        type IntoIter = ChainIteratorMut<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
    }
}
pub use iterator::*;

mod collect {
    use super::{Chain, ChainNode, Link};

    impl<T> Extend<T> for Chain<T> {
        /// Appends in order. Walks to the end once, not once per item.
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            let mut added = 0;
            let end = self.count;
            let mut link: &mut Link<T> = self.link_at_mut(end);
            for value in iter {
                let node = link.insert(Box::new(ChainNode { value, next: None }));
                link = &mut node.next;
                added += 1;
            }
            self.count += added;
        }
    }

    impl<T> FromIterator<T> for Chain<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut chain = Chain::new();
            chain.extend(iter);
            chain
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Debug> Debug for Chain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: GetMemSize> GetMemSize for Chain<T> {
    fn get_mem_size(&self) -> usize {
        let node_overhead = self.count * std::mem::size_of::<Link<T>>();
        std::mem::size_of::<Self>() + node_overhead + iter_size(self.iter())
    }
}
