use core::iter::FusedIterator;

use super::{
    arena::Arena,
    list::DoublyLinkedList,
    node::{Node, NodeRef},
};

/// A borrowing iterator over the values of a list, head to tail.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        arena: &'a Arena<Node<T>>,
        front: Option<usize>,
        back: Option<usize>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// An owning iterator that pops values off the list.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: DoublyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_tail().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the node handles of a list, head to tail.
pub struct Nodes<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            front: list.head_index(),
            back: list.tail_index(),
            remaining: list.len(),
            list,
        }
    }
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.list.links(index).1;
        self.remaining -= 1;
        Some(self.list.handle_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<NodeRef> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.list.links(index).0;
        self.remaining -= 1;
        Some(self.list.handle_at(index))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> FusedIterator for Nodes<'_, T> {}
