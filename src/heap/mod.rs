//! A priority queue implemented with an array-backed binary heap.
//!
//! The heap is a complete binary tree laid out level by level in a [`Vec`]:
//!
//! ```text
//!              0
//!         1         2
//!       3   4     5   6
//!      7 8 9
//! ```
//!
//! The parent of index `i > 0` is `(i - 1) / 2` and the children of `i` are `2i + 1`
//! and `2i + 2`. Insertion appends at the end and sifts the new element up;
//! extraction moves the last element to the root and sifts it down. Both are
//! *O*(log(*n*)). Peeking at the root is *O*(1).
//!
//! Which element is the root is decided by the heap's [`HeapOrder`], so the same
//! code serves as a max-heap ([`MaxHeap`]) and a min-heap ([`MinHeap`]).

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::collections::TryReserveError;
use alloc::slice;
use alloc::vec::{self, Vec};
use cfg_if::cfg_if;

use crate::order::{HeapOrder, MaxFirst, MinFirst};

mod levels;
pub use levels::Levels;


/// A priority queue implemented with a binary heap stored in a growable array.
///
/// The element that compares greatest under `O` is always at the root. With the
/// default [`MaxFirst`] order this is a max-heap; with [`MinFirst`] it is a min-heap.
///
/// It is a logic error for an item to be modified in such a way that the item's
/// priority relative to any other item, as determined by `O`, changes while it is in
/// the heap. This is normally only possible through [`Cell`], [`RefCell`], global
/// state, I/O, or unsafe code. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `ArrayBinaryHeap` that observed the
/// logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use arrayheap::MaxHeap;
///
/// let mut heap = MaxHeap::default();
///
/// // There's nothing in there yet.
/// assert_eq!(heap.peek(), None);
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// // Popping returns items in priority order.
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// assert!(heap.is_empty());
/// ```
///
/// ## Min-heap
///
/// ```
/// use arrayheap::MinHeap;
///
/// let mut heap = MinHeap::from([1, 5, 2]);
///
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] |
/// |---------|---------------|--------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: ArrayBinaryHeap::push
/// [pop]: ArrayBinaryHeap::pop
/// [peek]: ArrayBinaryHeap::peek
pub struct ArrayBinaryHeap<T, O = MaxFirst> {
    data: Vec<T>,
    order: O,
}

/// A heap that yields its greatest element first.
pub type MaxHeap<T> = ArrayBinaryHeap<T, MaxFirst>;

/// A heap that yields its least element first.
pub type MinHeap<T> = ArrayBinaryHeap<T, MinFirst>;

impl<T: Clone, O: Clone> Clone for ArrayBinaryHeap<T, O> {
    fn clone(&self) -> Self {
        ArrayBinaryHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: HeapOrder<T> + Default> Default for ArrayBinaryHeap<T, O> {
    /// Creates an empty heap.
    #[inline]
    fn default() -> ArrayBinaryHeap<T, O> {
        ArrayBinaryHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for ArrayBinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

cfg_if! {
    if #[cfg(feature = "debug_invariants")] {
        #[inline]
        #[track_caller]
        fn check_invariants<T, O: HeapOrder<T>>(data: &[T], order: &O) {
            assert!(is_heap(data, order), "heap property violated");
        }
    } else {
        #[inline(always)]
        fn check_invariants<T, O: HeapOrder<T>>(_: &[T], _: &O) {}
    }
}

/// Returns whether every element of `data` has no higher priority than its parent.
#[cfg(any(test, feature = "debug_invariants"))]
pub(crate) fn is_heap<T, O: HeapOrder<T>>(data: &[T], order: &O) -> bool {
    (1..data.len()).all(|i| order.ge(&data[(i - 1) / 2], &data[i]))
}

impl<T, O: HeapOrder<T>> ArrayBinaryHeap<T, O> {
    /// Creates an empty heap ordered by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayheap::{ArrayBinaryHeap, MinFirst};
    ///
    /// let mut heap = ArrayBinaryHeap::new(MinFirst);
    /// heap.push(4);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn new(order: O) -> ArrayBinaryHeap<T, O> {
        ArrayBinaryHeap { data: Vec::new(), order }
    }

    /// Creates an empty heap with at least the specified capacity.
    ///
    /// The heap will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the heap will not allocate.
    ///
    /// ```
    /// use arrayheap::{ArrayBinaryHeap, MaxFirst};
    ///
    /// let mut heap = ArrayBinaryHeap::with_capacity(MaxFirst, 10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> ArrayBinaryHeap<T, O> {
        ArrayBinaryHeap { data: Vec::with_capacity(capacity), order }
    }

    /// Removes the root item from the heap and returns it, or `None` if it is empty.
    ///
    /// The last item takes the root's place and is then moved down, one level at a
    /// time, in exchange for whichever of its children has the higher priority (the
    /// right one when both are equal). It stops as soon as no child has strictly
    /// higher priority than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        let root = self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down(0) };
            }
            item
        });
        check_invariants(&self.data, &self.order);
        root
    }

    /// Pushes an item onto the heap.
    ///
    /// The item is appended after the last leaf and then moved up, one level at a
    /// time, for as long as it has strictly higher priority than its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of the
    /// elements being pushed, and over a sufficiently large number of pushes, is
    /// *O*(1). In the worst case, elements are pushed in increasing priority order
    /// and the cost per push is *O*(log(*n*)).
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*), when capacity
    /// is exhausted and the backing array must grow. The growth is amortized in the
    /// figures above.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
        check_invariants(&self.data, &self.order);
    }

    /// Pushes an item onto the heap, reporting allocation failure instead of
    /// aborting.
    ///
    /// Room for the item is reserved before anything is moved, so if growing the
    /// backing array fails the heap is left exactly as it was and `item` is dropped.
    ///
    /// ```
    /// use arrayheap::MinHeap;
    ///
    /// let mut heap = MinHeap::default();
    /// heap.try_push(7).expect("why is the test harness OOMing on 4 bytes?");
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    pub fn try_push(&mut self, item: T) -> Result<(), TryReserveError> {
        self.data.try_reserve(1)?;
        self.push(item);
        Ok(())
    }

    /// Consumes the heap and returns a vector in ascending priority order, so that
    /// the item `pop` would have returned first is last.
    ///
    /// For a [`MaxHeap`] this is ascending order; for a [`MinHeap`] it is descending.
    ///
    /// ```
    /// use arrayheap::{MaxHeap, MinHeap};
    ///
    /// let mut heap = MaxHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let heap = MinHeap::from([2, 3, 1]);
    /// assert_eq!(heap.into_sorted_vec(), [3, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.into_vec()
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // Moving the hole is equivalent to swapping the element with its parent or
    // child, with half as many moves.

    /// Moves the element at `pos` towards `start` while it has strictly higher
    /// priority than its parent, and returns its final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if self.order.le(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Takes the element at `pos` and moves it down the heap, considering only
    /// `data[..end]`, while its dominant child has strictly higher priority.
    ///
    /// The dominant child is the only child if there is one, or the higher priority
    /// of two, preferring the right child on a tie.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // pick the dominant of the two children
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe { self.order.le(hole.get(child), hole.get(child + 1)) } as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if self.order.ge(hole.element(), unsafe { hole.get(child) }) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // Only a left child remains to be considered.
        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1 && self.order.lt(hole.element(), unsafe { hole.get(child) }) {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Restores the heap property over the whole array, bottom-up, in *O*(*n*).
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
        check_invariants(&self.data, &self.order);
    }

    fn extend_desugared<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<T, O> ArrayBinaryHeap<T, O> {
    /// Returns the order that decides which element is at the root.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns an iterator visiting all values in the underlying array, in
    /// level order (root first, then each depth left to right).
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let heap = MaxHeap::from([1, 2, 3, 4]);
    /// assert_eq!(heap.iter().next(), Some(&4));
    /// assert_eq!(heap.iter().count(), 4);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns an iterator over the depths of the tree, each as a slice: the root
    /// alone, then its two children, then the four below them, and so on. The
    /// deepest level may be shorter than its full width.
    ///
    /// ```
    /// use arrayheap::MinHeap;
    ///
    /// let heap = MinHeap::from([1, 2, 3, 4, 5]);
    /// let widths: Vec<usize> = heap.levels().map(<[_]>::len).collect();
    /// assert_eq!(widths, [1, 2, 2]);
    /// ```
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::new(&self.data)
    }

    /// Returns the root item, or `None` if the heap is empty.
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::default();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more than
    /// the current length. Does nothing if the capacity is already sufficient.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length. The allocator may reserve more space to speculatively
    /// avoid frequent allocations.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` elements more than the
    /// current length.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned and the heap is unchanged.
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut heap: MaxHeap<u32> = MaxHeap::from([1, 2]);
    /// assert!(heap.try_reserve(usize::MAX).is_err());
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns a slice of all values in the underlying array, in level order.
    ///
    /// ```
    /// use arrayheap::MinHeap;
    ///
    /// let mut heap = MinHeap::default();
    /// heap.extend([3, 1, 2]);
    /// assert_eq!(heap.as_slice(), [1, 3, 2]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the heap and returns the underlying vector in level order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::default();
    /// assert!(heap.is_empty());
    ///
    /// heap.push(3);
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// arbitrary order. If the iterator is dropped before being fully
    /// consumed, it drops the remaining elements in arbitrary order.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.drain();
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of an `ArrayBinaryHeap`, in level order.
///
/// This `struct` is created by [`ArrayBinaryHeap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

// `#[derive(Clone)]` would needlessly require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of an `ArrayBinaryHeap`, in level order.
///
/// This `struct` is created by [`ArrayBinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of an `ArrayBinaryHeap`, in arbitrary
/// order.
///
/// This `struct` is created by [`ArrayBinaryHeap::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T, O: HeapOrder<T> + Default> From<Vec<T>> for ArrayBinaryHeap<T, O> {
    /// Converts a `Vec<T>` into a heap.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> ArrayBinaryHeap<T, O> {
        let mut heap = ArrayBinaryHeap { data: vec, order: O::default() };
        heap.rebuild();
        heap
    }
}

impl<T, O: HeapOrder<T> + Default, const N: usize> From<[T; N]> for ArrayBinaryHeap<T, O> {
    /// ```
    /// use arrayheap::MaxHeap;
    ///
    /// let mut h1 = MaxHeap::from([1, 4, 2, 3]);
    /// let mut h2: MaxHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<ArrayBinaryHeap<T, O>> for Vec<T> {
    /// Converts a heap into its backing `Vec<T>`, in level order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: ArrayBinaryHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for ArrayBinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ArrayBinaryHeap<T, O> {
        ArrayBinaryHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for ArrayBinaryHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the heap in level order. The heap cannot be used after calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a ArrayBinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for ArrayBinaryHeap<T, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_desugared(iter);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
