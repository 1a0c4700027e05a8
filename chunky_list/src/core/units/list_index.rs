// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

use crate::{ListError, ListResult};

/// Represents a 0 based position in a list.
///
/// Unlike [usize], a `ListIndex` can hold a negative value. Callers that compute indices
/// with signed arithmetic (eg: `len - 1` on an empty list) get a
/// [`ListError::BadIndex`] back instead of a silent wrap around to a huge [usize].
///
/// `ListIndex` values can be created using [`ListIndex::new`], the [`list_idx`]
/// function, or by converting from the common integer types.
///
/// # Examples
///
/// ```
/// use r3bl_chunky_list::{ListIndex, ValidRange, list_idx};
///
/// let index = list_idx(2);
/// assert_eq!(index, ListIndex::new(2_usize));
/// assert_eq!(index.resolve(3, ValidRange::Exclusive), Some(2));
/// assert_eq!(index.resolve(2, ValidRange::Exclusive), None);
/// assert_eq!(index.resolve(2, ValidRange::Inclusive), Some(2));
/// assert_eq!(list_idx(-1).resolve(10, ValidRange::Inclusive), None);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ListIndex(pub isize);

/// Creates a new [`ListIndex`] from a value that can be converted into one.
///
/// This is a convenience function that is equivalent to calling [`ListIndex::new`].
pub fn list_idx(arg_index: impl Into<ListIndex>) -> ListIndex { arg_index.into() }

impl Debug for ListIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListIndex({})", self.0)
    }
}

impl Display for ListIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which upper bound applies when an index is checked against a length.
///
/// - Access and removal use [`ValidRange::Exclusive`]: `0 <= index < len`.
/// - Insertion uses [`ValidRange::Inclusive`]: `0 <= index <= len` (inserting at `len`
///   appends).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidRange {
    Exclusive,
    Inclusive,
}

impl Display for ValidRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidRange::Exclusive => write!(f, "0 <= index < len"),
            ValidRange::Inclusive => write!(f, "0 <= index <= len"),
        }
    }
}

mod construct {
    use super::ListIndex;

    impl ListIndex {
        pub fn new(arg_index: impl Into<ListIndex>) -> Self { arg_index.into() }

        #[must_use]
        pub fn as_isize(&self) -> isize { self.0 }
    }

    impl From<isize> for ListIndex {
        fn from(val: isize) -> Self { ListIndex(val) }
    }

    impl From<i32> for ListIndex {
        fn from(val: i32) -> Self { ListIndex(val as isize) }
    }

    impl From<u32> for ListIndex {
        fn from(val: u32) -> Self { ListIndex(isize::try_from(val).unwrap_or(isize::MAX)) }
    }

    /// Values above [`isize::MAX`] saturate. No list can hold that many items, so they
    /// are rejected by [`ListIndex::resolve`] either way.
    impl From<usize> for ListIndex {
        fn from(val: usize) -> Self { ListIndex(isize::try_from(val).unwrap_or(isize::MAX)) }
    }
}

mod bounds_check {
    use super::{ListError, ListIndex, ListResult, ValidRange};

    impl ListIndex {
        /// Translate this index into a [usize] offset if it falls inside `range` for a
        /// list of length `len`.
        #[must_use]
        pub fn resolve(&self, len: usize, range: ValidRange) -> Option<usize> {
            let index = usize::try_from(self.0).ok()?;
            let in_bounds = match range {
                ValidRange::Exclusive => index < len,
                ValidRange::Inclusive => index <= len,
            };
            in_bounds.then_some(index)
        }

        /// Same as [`ListIndex::resolve`], but reports [`ListError::BadIndex`] when the
        /// index is out of bounds.
        ///
        /// # Errors
        ///
        /// Returns [`ListError::BadIndex`] if the index is negative or beyond `range`.
        pub fn try_resolve(&self, len: usize, range: ValidRange) -> ListResult<usize> {
            self.resolve(len, range)
                .ok_or(ListError::BadIndex {
                    index: self.0,
                    len,
                    valid_range: range,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 3, ValidRange::Exclusive, Some(0))]
    #[test_case(2, 3, ValidRange::Exclusive, Some(2))]
    #[test_case(3, 3, ValidRange::Exclusive, None)]
    #[test_case(3, 3, ValidRange::Inclusive, Some(3))]
    #[test_case(4, 3, ValidRange::Inclusive, None)]
    #[test_case(-1, 3, ValidRange::Exclusive, None)]
    #[test_case(-1, 3, ValidRange::Inclusive, None)]
    #[test_case(0, 0, ValidRange::Exclusive, None)]
    #[test_case(0, 0, ValidRange::Inclusive, Some(0))]
    fn test_resolve(index: isize, len: usize, range: ValidRange, expected: Option<usize>) {
        assert_eq!(list_idx(index).resolve(len, range), expected);
    }

    #[test]
    fn test_try_resolve_reports_bad_index() {
        let result = list_idx(-1).try_resolve(5, ValidRange::Exclusive);
        assert_eq!(
            result,
            Err(ListError::BadIndex {
                index: -1,
                len: 5,
                valid_range: ValidRange::Exclusive,
            })
        );
    }

    #[test]
    fn test_usize_conversion_saturates() {
        assert_eq!(list_idx(usize::MAX), ListIndex(isize::MAX));
        assert_eq!(list_idx(usize::MAX).resolve(10, ValidRange::Inclusive), None);
    }
}
