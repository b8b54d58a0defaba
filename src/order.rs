//! Polarities that decide which element a heap keeps at its root.
//!
//! A [`HeapOrder`] compares two elements by *priority*: [`Ordering::Greater`] means the
//! first argument belongs nearer the root. Flipping the comparison is all that separates
//! a max-heap from a min-heap.

use core::cmp::Ordering;

/// A priority comparison over values of type `T`.
///
/// Implementations must be a total order over every value that is stored in a heap at
/// the same time. It is a logic error for the result of comparing two stored values to
/// change while they are in the heap; the heap will not exhibit undefined behavior, but
/// its methods may return elements out of order.
pub trait HeapOrder<T: ?Sized> {
    /// Compares `this` with `that` by priority.
    ///
    /// `Greater` means `this` must come out of the heap before `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Tests whether `this` has strictly lower priority than `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        matches!(self.cmp(this, that), Ordering::Less)
    }

    /// Tests whether `this` has lower or equal priority to `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        !matches!(self.cmp(this, that), Ordering::Greater)
    }

    /// Tests whether `this` has strictly higher priority than `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        matches!(self.cmp(this, that), Ordering::Greater)
    }

    /// Tests whether `this` has higher or equal priority to `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        !matches!(self.cmp(this, that), Ordering::Less)
    }
}

/// A zero-sized order that puts the greatest element, per [`Ord`], at the root.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MaxFirst;

/// A zero-sized order that puts the least element, per [`Ord`], at the root.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MinFirst;

// The comparison helpers below are overridden so that they go through `T`'s
// `PartialOrd` operators directly rather than through `Ord::cmp`. For lawful
// implementations this makes no difference.

impl<T: ?Sized + Ord> HeapOrder<T> for MaxFirst {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
}

impl<T: ?Sized + Ord> HeapOrder<T> for MinFirst {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        that.cmp(this)
    }

    fn lt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this <= that
    }
}

/// A polarity chosen at run time.
///
/// ```
/// use arrayheap::{ArrayBinaryHeap, Polarity};
///
/// let mut heap = ArrayBinaryHeap::new(Polarity::Min);
/// heap.extend([3, 1, 2]);
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(*heap.order(), Polarity::Min);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Polarity {
    /// Greatest element first, like [`MaxFirst`].
    #[default]
    Max,
    /// Least element first, like [`MinFirst`].
    Min,
}

impl Polarity {
    /// Returns the opposite polarity.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Polarity::Max => Polarity::Min,
            Polarity::Min => Polarity::Max,
        }
    }
}

impl From<MaxFirst> for Polarity {
    fn from(_: MaxFirst) -> Self {
        Polarity::Max
    }
}

impl From<MinFirst> for Polarity {
    fn from(_: MinFirst) -> Self {
        Polarity::Min
    }
}

impl<T: ?Sized + Ord> HeapOrder<T> for Polarity {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        match self {
            Polarity::Max => HeapOrder::cmp(&MaxFirst, this, that),
            Polarity::Min => HeapOrder::cmp(&MinFirst, this, that),
        }
    }
}
