use core::fmt;
use core::iter::FusedIterator;

use super::ArrayBinaryHeap;

/// An iterator over the depths of an `ArrayBinaryHeap`'s tree.
///
/// Level `k` holds indices `2^k - 1 ..= 2^(k+1) - 2`; the last level yielded may be
/// partial.
///
/// This `struct` is created by [`ArrayBinaryHeap::levels()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct Levels<'a, T: 'a> {
    rest: &'a [T],
    width: usize,
}

impl<'a, T> Levels<'a, T> {
    pub(super) fn new(data: &'a [T]) -> Self {
        Levels { rest: data, width: 1 }
    }
}

impl<T> Clone for Levels<'_, T> {
    fn clone(&self) -> Self {
        Levels { rest: self.rest, width: self.width }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.rest.is_empty() {
            return None;
        }
        let (level, rest) = self.rest.split_at(self.width.min(self.rest.len()));
        self.rest = rest;
        self.width = self.width.saturating_mul(2);
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut remaining, mut width, mut count) = (self.rest.len(), self.width, 0);
        while remaining > 0 {
            remaining -= width.min(remaining);
            width = width.saturating_mul(2);
            count += 1;
        }
        (count, Some(count))
    }
}

impl<T> ExactSizeIterator for Levels<'_, T> {}

impl<T> FusedIterator for Levels<'_, T> {}

/// Renders the heap one tree level per line, each entry as `index:value` followed by
/// a space, under a `heap size N` header.
///
/// Only complete levels are terminated by a line break.
///
/// ```
/// use arrayheap::MaxHeap;
///
/// let heap = MaxHeap::from([1, 2, 3, 4, 5]);
/// assert_eq!(heap.to_string(), "heap size 5\n0:5 \n1:4 2:3 \n3:1 4:2 ");
///
/// let empty: MaxHeap<i32> = MaxHeap::default();
/// assert_eq!(empty.to_string(), "heap size 0\n");
/// ```
impl<T: fmt::Display, O> fmt::Display for ArrayBinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "heap size {}", self.len())?;

        let mut index = 0usize;
        for level in self.levels() {
            for item in level {
                write!(f, "{index}:{item} ")?;
                index += 1;
            }
            // a full level ends just before the next power of two
            if (index + 1).is_power_of_two() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
