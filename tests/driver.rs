//! Replays the classic demonstration: build a heap from a fixed sequence, then drain
//! it one root at a time, rendering the heap after every call.

use arrayheap::{ArrayBinaryHeap, HeapOrder, MaxHeap, MinHeap, Polarity};
use std::fmt::Display;

const INPUT: [i32; 10] = [2, 4, 6, 8, 10, 1, 3, 5, 7, 9];

const MAX_FRAMES: &[&str] = &[
    "heap size 1\n0:2 \n",
    "heap size 2\n0:4 \n1:2 ",
    "heap size 3\n0:6 \n1:2 2:4 \n",
    "heap size 4\n0:8 \n1:6 2:4 \n3:2 ",
    "heap size 5\n0:10 \n1:8 2:4 \n3:2 4:6 ",
    "heap size 6\n0:10 \n1:8 2:4 \n3:2 4:6 5:1 ",
    "heap size 7\n0:10 \n1:8 2:4 \n3:2 4:6 5:1 6:3 \n",
    "heap size 8\n0:10 \n1:8 2:4 \n3:5 4:6 5:1 6:3 \n7:2 ",
    "heap size 9\n0:10 \n1:8 2:4 \n3:7 4:6 5:1 6:3 \n7:2 8:5 ",
    "heap size 10\n0:10 \n1:9 2:4 \n3:7 4:8 5:1 6:3 \n7:2 8:5 9:6 ",
    "removing 10...\nheap size 9\n0:9 \n1:8 2:4 \n3:7 4:6 5:1 6:3 \n7:2 8:5 ",
    "removing 9...\nheap size 8\n0:8 \n1:7 2:4 \n3:5 4:6 5:1 6:3 \n7:2 ",
    "removing 8...\nheap size 7\n0:7 \n1:6 2:4 \n3:5 4:2 5:1 6:3 \n",
    "removing 7...\nheap size 6\n0:6 \n1:5 2:4 \n3:3 4:2 5:1 ",
    "removing 6...\nheap size 5\n0:5 \n1:3 2:4 \n3:1 4:2 ",
    "removing 5...\nheap size 4\n0:4 \n1:3 2:2 \n3:1 ",
    "removing 4...\nheap size 3\n0:3 \n1:1 2:2 \n",
    "removing 3...\nheap size 2\n0:2 \n1:1 ",
    "removing 2...\nheap size 1\n0:1 \n",
    "removing 1...\nheap size 0\n",
    "removing nothing...\nheap size 0\n",
];

const MIN_FRAMES: &[&str] = &[
    "heap size 1\n0:2 \n",
    "heap size 2\n0:2 \n1:4 ",
    "heap size 3\n0:2 \n1:4 2:6 \n",
    "heap size 4\n0:2 \n1:4 2:6 \n3:8 ",
    "heap size 5\n0:2 \n1:4 2:6 \n3:8 4:10 ",
    "heap size 6\n0:1 \n1:4 2:2 \n3:8 4:10 5:6 ",
    "heap size 7\n0:1 \n1:4 2:2 \n3:8 4:10 5:6 6:3 \n",
    "heap size 8\n0:1 \n1:4 2:2 \n3:5 4:10 5:6 6:3 \n7:8 ",
    "heap size 9\n0:1 \n1:4 2:2 \n3:5 4:10 5:6 6:3 \n7:8 8:7 ",
    "heap size 10\n0:1 \n1:4 2:2 \n3:5 4:9 5:6 6:3 \n7:8 8:7 9:10 ",
    "removing 1...\nheap size 9\n0:2 \n1:4 2:3 \n3:5 4:9 5:6 6:10 \n7:8 8:7 ",
    "removing 2...\nheap size 8\n0:3 \n1:4 2:6 \n3:5 4:9 5:7 6:10 \n7:8 ",
    "removing 3...\nheap size 7\n0:4 \n1:5 2:6 \n3:8 4:9 5:7 6:10 \n",
    "removing 4...\nheap size 6\n0:5 \n1:8 2:6 \n3:10 4:9 5:7 ",
    "removing 5...\nheap size 5\n0:6 \n1:8 2:7 \n3:10 4:9 ",
    "removing 6...\nheap size 4\n0:7 \n1:8 2:9 \n3:10 ",
    "removing 7...\nheap size 3\n0:8 \n1:10 2:9 \n",
    "removing 8...\nheap size 2\n0:9 \n1:10 ",
    "removing 9...\nheap size 1\n0:10 \n",
    "removing 10...\nheap size 0\n",
    "removing nothing...\nheap size 0\n",
];

fn replay<T, O>(mut heap: ArrayBinaryHeap<T, O>, input: impl IntoIterator<Item = T>) -> Vec<String>
where
    T: Display,
    O: HeapOrder<T>,
{
    let mut frames = Vec::new();
    for x in input {
        heap.push(x);
        frames.push(heap.to_string());
    }
    for _ in 0..=heap.len() {
        let removed = match heap.pop() {
            Some(x) => x.to_string(),
            None => "nothing".to_string(),
        };
        frames.push(format!("removing {removed}...\n{heap}"));
    }
    frames
}

#[test]
fn max_heap_frames() {
    let frames = replay(MaxHeap::default(), INPUT);
    assert_eq!(frames, MAX_FRAMES);
}

#[test]
fn min_heap_frames() {
    let frames = replay(MinHeap::default(), INPUT);
    assert_eq!(frames, MIN_FRAMES);
}

#[test]
fn runtime_polarity_frames() {
    assert_eq!(replay(ArrayBinaryHeap::new(Polarity::Max), INPUT), MAX_FRAMES);
    assert_eq!(replay(ArrayBinaryHeap::new(Polarity::Min), INPUT), MIN_FRAMES);
}

#[test]
fn size_is_conserved() {
    let mut heap = MinHeap::default();
    for (i, x) in INPUT.into_iter().enumerate() {
        assert_eq!(heap.len(), i);
        heap.push(x);
        let _ = heap.peek();
        assert!(!heap.is_empty());
        assert_eq!(heap.len(), i + 1);
    }
    for i in (0..INPUT.len()).rev() {
        assert!(heap.pop().is_some());
        assert_eq!(heap.len(), i);
    }
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);
}
