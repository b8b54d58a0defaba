//! Array-backed binary heaps whose polarity is chosen by a type parameter.
//!
//! [`ArrayBinaryHeap`] stores a complete binary tree in a flat [`Vec`]: the root lives
//! at index 0, the children of index `i` at `2i + 1` and `2i + 2`, and the parent of
//! index `i > 0` at `(i - 1) / 2`. Which element sits at the root is decided by a
//! [`HeapOrder`]:
//!
//! * [`MaxFirst`] keeps the greatest element at the root ([`MaxHeap`]);
//! * [`MinFirst`] keeps the least element at the root ([`MinHeap`]);
//! * [`Polarity`] picks one of the two when the heap is constructed.
//!
//! ```
//! use arrayheap::{MaxHeap, MinHeap};
//!
//! let mut max = MaxHeap::default();
//! let mut min = MinHeap::default();
//! for x in [2, 4, 6, 8, 10, 1, 3, 5, 7, 9] {
//!     max.push(x);
//!     min.push(x);
//! }
//!
//! assert_eq!(max.pop(), Some(10));
//! assert_eq!(min.pop(), Some(1));
//! ```
//!
//! [`Vec`]: alloc::vec::Vec
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::uninlined_format_args,
        clippy::useless_vec,
    )
)]

extern crate alloc;

pub mod heap;
pub mod order;

pub use alloc::collections::TryReserveError;
#[doc(no_inline)]
pub use heap::{ArrayBinaryHeap, MaxHeap, MinHeap};
pub use order::{HeapOrder, MaxFirst, MinFirst, Polarity};

#[cfg(test)]
mod testing;
