//! Minimum-priority queue backed by a binary heap.
//!
//! Elements live in a dense array laid out as a complete binary tree: the
//! children of slot `i` are `2i + 1` and `2i + 2`. Priorities are compared
//! with a caller-supplied total order; the relative pop order of elements
//! with equal priority is unspecified.

use std::cmp::Ordering;
use std::fmt;

/// An element together with its priority.
#[derive(Debug, Clone)]
struct Entry<E, P> {
    element: E,
    priority: P,
}

/// Comparator used by [`PriorityQueue::new`]: the priority's natural order.
pub type NaturalOrder<P> = fn(&P, &P) -> Ordering;

/// A minimum-priority queue.
///
/// `pop` returns the element whose priority is lowest according to the
/// comparator. There is no decrease-key: callers that need to lower a
/// priority push the element again and skip the stale copy when it surfaces.
#[derive(Clone)]
pub struct PriorityQueue<E, P, F = NaturalOrder<P>> {
    heap: Vec<Entry<E, P>>,
    cmp: F,
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Create an empty queue ordered by `P`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(P::cmp)
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp: P::cmp,
        }
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P, F> PriorityQueue<E, P, F>
where
    F: Fn(&P, &P) -> Ordering,
{
    /// Create an empty queue ordered by `cmp`, which must be a total order.
    pub fn with_comparator(cmp: F) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
        }
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `element` with `priority`. O(log n).
    pub fn push(&mut self, element: E, priority: P) {
        self.heap.push(Entry { element, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the element with the minimum priority.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Use [`try_pop`](Self::try_pop) when
    /// emptiness is a normal condition.
    #[track_caller]
    pub fn pop(&mut self) -> E {
        match self.try_pop() {
            Some((element, _)) => element,
            None => panic!("pop called on an empty PriorityQueue"),
        }
    }

    /// Remove and return the minimum-priority element and its priority, or
    /// `None` if the queue is empty.
    pub fn try_pop(&mut self) -> Option<(E, P)> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let root = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((root.element, root.priority))
    }

    /// The element with the minimum priority, without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn peek(&self) -> &E {
        match self.try_peek() {
            Some((element, _)) => element,
            None => panic!("peek called on an empty PriorityQueue"),
        }
    }

    /// The minimum-priority element and its priority, or `None` if empty.
    pub fn try_peek(&self) -> Option<(&E, &P)> {
        self.heap.first().map(|e| (&e.element, &e.priority))
    }

    /// Remove all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    #[inline]
    fn is_lower(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.heap[i].priority, &self.heap[j].priority) == Ordering::Less
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.is_lower(child, parent) {
                break;
            }
            self.heap.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.is_lower(right, left) {
                right
            } else {
                left
            };
            if !self.is_lower(child, parent) {
                break;
            }
            self.heap.swap(parent, child);
            parent = child;
        }
    }
}

impl<E, P, F> fmt::Debug for PriorityQueue<E, P, F>
where
    E: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("heap", &self.heap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pops_in_priority_order() {
        let mut q = PriorityQueue::new();
        q.push("c", 3);
        q.push("a", 1);
        q.push("d", 4);
        q.push("b", 2);

        assert_eq!(q.len(), 4);
        assert_eq!(*q.peek(), "a");
        assert_eq!(q.pop(), "a");
        assert_eq!(q.pop(), "b");
        assert_eq!(q.pop(), "c");
        assert_eq!(q.pop(), "d");
        assert!(q.is_empty());
    }

    #[test]
    fn try_variants_on_empty() {
        let mut q = PriorityQueue::<u8, i32>::new();
        assert_eq!(q.try_peek(), None);
        assert_eq!(q.try_pop(), None);
        q.push(7, -2);
        assert_eq!(q.try_peek(), Some((&7, &-2)));
        assert_eq!(q.try_pop(), Some((7, -2)));
        assert_eq!(q.try_pop(), None);
    }

    #[test]
    #[should_panic(expected = "empty PriorityQueue")]
    fn pop_on_empty_panics() {
        let mut q = PriorityQueue::<(), u32>::new();
        q.pop();
    }

    #[test]
    #[should_panic(expected = "empty PriorityQueue")]
    fn peek_on_empty_panics() {
        let q = PriorityQueue::<(), u32>::new();
        q.peek();
    }

    #[test]
    fn custom_comparator_makes_max_queue() {
        let mut q = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for p in [5, 1, 9, 3] {
            q.push(p, p);
        }
        assert_eq!(q.pop(), 9);
        assert_eq!(q.pop(), 5);
        assert_eq!(q.pop(), 3);
        assert_eq!(q.pop(), 1);
    }

    #[test]
    fn duplicate_priorities_are_all_returned() {
        let mut q: PriorityQueue<char, u8> = PriorityQueue::new();
        for (element, priority) in [('x', 1), ('y', 1), ('z', 0), ('w', 1)] {
            q.push(element, priority);
        }
        assert_eq!(q.pop(), 'z');
        let mut rest = vec![q.pop(), q.pop(), q.pop()];
        rest.sort_unstable();
        assert_eq!(rest, vec!['w', 'x', 'y']);
    }

    #[test]
    fn clear_empties_and_queue_is_reusable() {
        let mut q = PriorityQueue::with_capacity(8);
        q.push(1, 10);
        q.push(2, 20);
        q.clear();
        assert_eq!(q.len(), 0);
        q.push(3, 5);
        assert_eq!(q.pop(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (-50i32..50).prop_map(Op::Push),
            2 => Just(Op::Pop),
        ]
    }

    proptest! {
        /// Random push/pop interleavings agree with a sorted-list oracle.
        #[test]
        fn matches_sorted_oracle(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut q = PriorityQueue::new();
            let mut oracle: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(p) => {
                        q.push(p, p);
                        oracle.push(p);
                        oracle.sort_unstable();
                    }
                    Op::Pop => {
                        let expected = if oracle.is_empty() { None } else { Some(oracle.remove(0)) };
                        prop_assert_eq!(q.try_pop().map(|(_, p)| p), expected);
                    }
                }
                prop_assert_eq!(q.len(), oracle.len());
                if let Some((_, &min)) = q.try_peek() {
                    prop_assert_eq!(Some(&min), oracle.first());
                }
            }
        }
    }
}
