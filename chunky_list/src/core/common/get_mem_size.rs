// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

/// Reports how many bytes a value occupies, including what it owns on the heap.
///
/// For the list types this counts reserved slots, not just the filled ones, since a
/// [`crate::BoundedSegment`] allocates its whole capacity up front.
pub trait GetMemSize {
    fn get_mem_size(&self) -> usize;
}

/// Calculates the total memory size of an iterator of items that implement
/// [`GetMemSize`].
#[must_use]
pub fn iter_size<'a, T: GetMemSize + 'a>(iter: impl Iterator<Item = &'a T>) -> usize {
    iter.map(GetMemSize::get_mem_size).sum::<usize>()
}

/// Memory size wrapper for display.
///
/// Shows the size in kilobytes with commas for readability, or "?" if the size is not
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorySize {
    inner: Option<usize>,
}

impl MemorySize {
    #[must_use]
    pub fn new(size: usize) -> Self { Self { inner: Some(size) } }

    #[must_use]
    pub fn unknown() -> Self { Self { inner: None } }

    #[must_use]
    pub fn size(&self) -> Option<usize> { self.inner }
}

impl Display for MemorySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner {
            Some(size) => write!(f, "{}", format_as_kilobytes_with_commas(size)),
            None => write!(f, "?"),
        }
    }
}

/// Format a byte count as kilobytes (1 decimal) with thousands separators, eg:
/// `1_234_567` -> `"1,205.6 KB"`.
#[must_use]
pub fn format_as_kilobytes_with_commas(bytes: usize) -> String {
    let tenths_of_kb = (bytes * 10 + 512) / 1024;
    let whole = tenths_of_kb / 10;
    let fraction = tenths_of_kb % 10;

    let digits = whole.to_string();
    let mut acc = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    for (count, ch) in digits.chars().enumerate() {
        if count > 0 && (digits.len() - count) % 3 == 0 {
            acc.push(',');
        }
        acc.push(ch);
    }
    format!("{acc}.{fraction} KB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_as_kilobytes_with_commas() {
        assert_eq!(format_as_kilobytes_with_commas(0), "0.0 KB");
        assert_eq!(format_as_kilobytes_with_commas(1024), "1.0 KB");
        assert_eq!(format_as_kilobytes_with_commas(1536), "1.5 KB");
        assert_eq!(format_as_kilobytes_with_commas(1_234_567), "1,205.6 KB");
    }

    #[test]
    fn test_memory_size_display() {
        assert_eq!(MemorySize::unknown().to_string(), "?");
        assert_eq!(MemorySize::new(2048).to_string(), "2.0 KB");
    }
}
