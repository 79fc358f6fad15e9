use std::collections::VecDeque;

use serde::Serialize;

/// Fixed-capacity list, most recent first. Pushing past capacity evicts the oldest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend `item`, returning whatever fell off the end.
    pub fn push_front(&mut self, item: T) -> Vec<T> {
        self.items.push_front(item);
        let mut evicted = Vec::new();
        while self.items.len() > self.capacity {
            if let Some(old) = self.items.pop_back() {
                evicted.push(old);
            }
        }
        evicted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<'a, T> IntoIterator for &'a RollingWindow<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_first() {
        let mut w = RollingWindow::new(3);
        for i in 0..3 {
            assert!(w.push_front(i).is_empty());
        }
        assert_eq!(w.iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(w.latest(), Some(&2));
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut w = RollingWindow::new(3);
        for i in 0..3 {
            w.push_front(i);
        }
        assert_eq!(w.push_front(3), vec![0]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut w = RollingWindow::new(0);
        assert_eq!(w.push_front('x'), vec!['x']);
        assert!(w.is_empty());
    }
}
