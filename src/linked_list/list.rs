use core::fmt;

use tracing::{debug, trace};

use super::{
    arena::Arena,
    iter::{IntoIter, Iter, Nodes},
    node::{ListId, Node, NodeRef},
};
use crate::error::{ListError, ListResult};

/// A doubly linked list whose nodes live in an index arena.
///
/// Both ends are reachable in O(1), and a [`NodeRef`] obtained from a push,
/// an insert or a boundary accessor anchors O(1) insertion and removal in
/// the middle of the list.
pub struct DoublyLinkedList<T> {
    id: ListId,
    arena: Arena<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::next(),
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Pushes `value` in front of the current head.
    pub fn push_head(&mut self, value: T) -> NodeRef {
        let mut node = Node::new(value);
        node.next = self.head;
        let (index, generation) = self.arena.insert(node);

        match self.head {
            Some(head) => self.arena[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);

        trace!(index, len = self.len(), "pushed head");
        self.handle(index, generation)
    }

    /// Pushes `value` behind the current tail.
    pub fn push_tail(&mut self, value: T) -> NodeRef {
        let mut node = Node::new(value);
        node.prev = self.tail;
        let (index, generation) = self.arena.insert(node);

        match self.tail {
            Some(tail) => self.arena[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);

        trace!(index, len = self.len(), "pushed tail");
        self.handle(index, generation)
    }

    /// Removes the head node and returns its value.
    pub fn pop_head(&mut self) -> ListResult<T> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(self.unlink(head))
    }

    /// Removes the tail node and returns its value.
    pub fn pop_tail(&mut self) -> ListResult<T> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(self.unlink(tail))
    }

    pub fn peek_head(&self) -> ListResult<&T> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(&self.arena[head].value)
    }

    pub fn peek_tail(&self) -> ListResult<&T> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(&self.arena[tail].value)
    }

    pub fn peek_head_mut(&mut self) -> ListResult<&mut T> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(&mut self.arena[head].value)
    }

    pub fn peek_tail_mut(&mut self) -> ListResult<&mut T> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(&mut self.arena[tail].value)
    }

    /// Returns the value `n` steps after the head.
    ///
    /// # Panics
    ///
    /// Panics if the chain ends before `n` steps even though `n < len`, which
    /// means the links are corrupted.
    pub fn peek_head_at(&self, n: usize) -> ListResult<&T> {
        self.check_offset(n)?;
        let mut current = self.head.expect("non-empty list without a head");
        for _ in 0..n {
            current = self.arena[current]
                .next
                .expect("ran off the end of the list");
        }
        Ok(&self.arena[current].value)
    }

    /// Returns the value `n` steps before the tail.
    ///
    /// # Panics
    ///
    /// Panics if the chain ends before `n` steps even though `n < len`, which
    /// means the links are corrupted.
    pub fn peek_tail_at(&self, n: usize) -> ListResult<&T> {
        self.check_offset(n)?;
        let mut current = self.tail.expect("non-empty list without a tail");
        for _ in 0..n {
            current = self.arena[current]
                .prev
                .expect("ran off the start of the list");
        }
        Ok(&self.arena[current].value)
    }

    pub fn head_node(&self) -> Option<NodeRef> {
        self.head.map(|index| self.handle_at(index))
    }

    pub fn tail_node(&self) -> Option<NodeRef> {
        self.tail.map(|index| self.handle_at(index))
    }

    /// The node following `node`, or `None` at the tail or for a foreign node.
    pub fn next_node(&self, node: NodeRef) -> Option<NodeRef> {
        let index = self.resolve(node).ok()?;
        self.arena[index].next.map(|next| self.handle_at(next))
    }

    /// The node preceding `node`, or `None` at the head or for a foreign node.
    pub fn prev_node(&self, node: NodeRef) -> Option<NodeRef> {
        let index = self.resolve(node).ok()?;
        self.arena[index].prev.map(|prev| self.handle_at(prev))
    }

    pub fn get(&self, node: NodeRef) -> Option<&T> {
        let index = self.resolve(node).ok()?;
        Some(&self.arena[index].value)
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let index = self.resolve(node).ok()?;
        Some(&mut self.arena[index].value)
    }

    /// Splices `value` in directly after `anchor`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidNode`] if `anchor` is not a live node of this list.
    pub fn insert_after(&mut self, value: T, anchor: NodeRef) -> ListResult<NodeRef> {
        let anchor = self.resolve(anchor)?;
        let next = self.arena[anchor].next;

        let mut node = Node::new(value);
        node.prev = Some(anchor);
        node.next = next;
        let (index, generation) = self.arena.insert(node);

        self.arena[anchor].next = Some(index);
        match next {
            Some(next) => self.arena[next].prev = Some(index),
            None => self.tail = Some(index),
        }

        trace!(index, anchor, len = self.len(), "inserted after");
        Ok(self.handle(index, generation))
    }

    /// Splices `value` in directly before `anchor`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidNode`] if `anchor` is not a live node of this list.
    pub fn insert_before(&mut self, value: T, anchor: NodeRef) -> ListResult<NodeRef> {
        let anchor = self.resolve(anchor)?;
        let prev = self.arena[anchor].prev;

        let mut node = Node::new(value);
        node.prev = prev;
        node.next = Some(anchor);
        let (index, generation) = self.arena.insert(node);

        self.arena[anchor].prev = Some(index);
        match prev {
            Some(prev) => self.arena[prev].next = Some(index),
            None => self.head = Some(index),
        }

        trace!(index, anchor, len = self.len(), "inserted before");
        Ok(self.handle(index, generation))
    }

    /// Removes `node` from the list and returns its value.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidNode`] if `node` is not a live node of this list.
    pub fn remove(&mut self, node: NodeRef) -> ListResult<T> {
        let index = self.resolve(node)?;
        Ok(self.unlink(index))
    }

    /// Drops every node.
    ///
    /// The list takes a fresh identity, so handles issued before the clear are
    /// rejected afterwards even if their slots get reused.
    pub fn clear(&mut self) {
        trace!(len = self.len(), "clearing list");
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.id = ListId::next();
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.tail, self.len())
    }

    /// Iterates over node handles from head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    pub(crate) fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn tail_index(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn links(&self, index: usize) -> (Option<usize>, Option<usize>) {
        let node = &self.arena[index];
        (node.prev, node.next)
    }

    pub(crate) fn handle_at(&self, index: usize) -> NodeRef {
        self.handle(index, self.arena.generation(index))
    }

    fn handle(&self, index: usize, generation: u32) -> NodeRef {
        NodeRef {
            list: self.id,
            index,
            generation,
        }
    }

    /// Maps a handle to its slot index if it names a live node of this list.
    fn resolve(&self, node: NodeRef) -> ListResult<usize> {
        if node.list == self.id && self.arena.is_live(node.index, node.generation) {
            Ok(node.index)
        } else {
            debug!(
                index = node.index,
                generation = node.generation,
                "rejected node that is not part of this list"
            );
            Err(ListError::InvalidNode)
        }
    }

    fn check_offset(&self, n: usize) -> ListResult<()> {
        let len = self.len();
        if n >= len {
            return Err(ListError::IndexOutOfRange { index: n, len });
        }
        Ok(())
    }

    /// Splices out the live node at `index` and frees its slot.
    fn unlink(&mut self, index: usize) -> T {
        let node = self
            .arena
            .remove(index)
            .expect("unlinking a vacant slot");

        match node.prev {
            Some(prev) => self.arena[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        trace!(index, len = self.len(), "unlinked node");
        node.value
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_tail(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[1 <=> 2 <=> 3] (3 items)`.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <=> ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "] ({} items)", self.len())
    }
}
