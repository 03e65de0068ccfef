// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Indexed binary min-heap over node ids.

/// A binary heap of node ids ordered by their current cost.
///
/// Each node id `0..n` is contained at most once. The cost of a contained
/// node can be lowered with [`CostQueue::push_or_decrease`]. Costs only need
/// to be `PartialOrd`, so floating point costs can be used.
pub struct CostQueue<D> {
    /// The heap elements `(node, cost)`.
    heap: Vec<(usize, D)>,
    /// Position of each node on the heap, `None` if it is not on the heap.
    pos: Vec<Option<usize>>,
}

impl<D> CostQueue<D>
where
    D: Copy + PartialOrd,
{
    /// Create an empty queue for the node ids `0..n`.
    pub fn new(n: usize) -> Self {
        CostQueue {
            heap: Vec::with_capacity(n),
            pos: vec![None; n],
        }
    }

    /// Return `true` iff the queue contains no element.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Return the number of nodes on the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Return `true` if `node` is currently on the queue.
    pub fn contains(&self, node: usize) -> bool {
        self.pos[node].is_some()
    }

    /// Return the current cost of `node` if it is on the queue.
    pub fn cost(&self, node: usize) -> Option<D> {
        self.pos[node].map(|p| self.heap[p].1)
    }

    /// Push `node` with the given cost or lower its cost.
    ///
    /// If the node is already on the queue its cost is only changed if `cost`
    /// is smaller than the current one. Returns `true` if the node has been
    /// added or its cost has been decreased.
    pub fn push_or_decrease(&mut self, node: usize, cost: D) -> bool {
        match self.pos[node] {
            Some(p) => {
                if cost < self.heap[p].1 {
                    self.heap[p].1 = cost;
                    self.upheap(p);
                    true
                } else {
                    false
                }
            }
            None => {
                self.heap.push((node, cost));
                self.upheap(self.heap.len() - 1);
                true
            }
        }
    }

    /// Remove and return the node with the smallest cost or `None` if the
    /// queue is empty.
    pub fn pop_min(&mut self) -> Option<(usize, D)> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        self.pos[min.0] = None;
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }

    /// Remove all elements from the queue.
    pub fn clear(&mut self) {
        for &(u, _) in &self.heap {
            self.pos[u] = None;
        }
        self.heap.clear();
    }

    /// Move the element at position `cur` up until its parent does not have
    /// a larger cost.
    fn upheap(&mut self, mut cur: usize) {
        let item = self.heap[cur];
        while cur > 0 {
            let parent = (cur - 1) / 2;
            // Using > instead of >= moves the item as far up as possible, so
            // the last node touched with equal cost is handled next.
            if item.1 > self.heap[parent].1 {
                break;
            }
            self.heap[cur] = self.heap[parent];
            self.pos[self.heap[cur].0] = Some(cur);
            cur = parent;
        }
        self.heap[cur] = item;
        self.pos[item.0] = Some(cur);
    }

    /// Move the element at position `cur` down until none of its children
    /// has a smaller cost.
    fn downheap(&mut self, mut cur: usize) {
        let n = self.heap.len();
        let item = self.heap[cur];
        loop {
            let left = 2 * cur + 1;
            let right = left + 1;
            let next = if left >= n {
                break;
            } else if right >= n || self.heap[left].1 < self.heap[right].1 {
                left
            } else {
                right
            };

            if item.1 <= self.heap[next].1 {
                break;
            }

            self.heap[cur] = self.heap[next];
            self.pos[self.heap[cur].0] = Some(cur);
            cur = next;
        }
        self.heap[cur] = item;
        self.pos[item.0] = Some(cur);
    }
}

#[cfg(test)]
mod tests {
    use super::CostQueue;

    #[test]
    fn test_pop_order() {
        let costs = [7, 3, 9, 1, 4, 4, 0, 8];
        let mut q = CostQueue::new(costs.len());
        for (u, &c) in costs.iter().enumerate() {
            assert!(q.push_or_decrease(u, c));
        }
        assert_eq!(q.len(), costs.len());

        let mut popped = vec![];
        while let Some((_, c)) = q.pop_min() {
            popped.push(c);
        }
        assert_eq!(popped, vec![0, 1, 3, 4, 4, 7, 8, 9]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_decrease() {
        let mut q = CostQueue::new(4);
        q.push_or_decrease(0, 5.0);
        q.push_or_decrease(1, 3.0);
        q.push_or_decrease(2, 4.0);

        assert!(!q.push_or_decrease(0, 6.0));
        assert_eq!(q.cost(0), Some(5.0));
        assert!(q.push_or_decrease(0, 1.5));
        assert_eq!(q.cost(0), Some(1.5));
        assert!(!q.contains(3));

        assert_eq!(q.pop_min(), Some((0, 1.5)));
        assert!(!q.contains(0));
        assert_eq!(q.pop_min(), Some((1, 3.0)));

        // popped nodes may be pushed again
        assert!(q.push_or_decrease(0, 3.5));
        assert_eq!(q.pop_min(), Some((0, 3.5)));
        assert_eq!(q.pop_min(), Some((2, 4.0)));
        assert_eq!(q.pop_min(), None);
    }

    #[test]
    fn test_clear() {
        let mut q = CostQueue::new(3);
        q.push_or_decrease(2, 1);
        q.push_or_decrease(1, 2);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(1));
        assert!(!q.contains(2));
    }
}
