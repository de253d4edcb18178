use core::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use super::list::DoublyLinkedList;
use crate::error::{ListError, ListResult};

/// A node stored in a list's arena.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }
}

/// Identity tag carried by every list and every handle it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    pub(crate) fn next() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A non-owning handle to a node of a [`DoublyLinkedList`].
///
/// Handles are returned by the push and insert operations and by
/// [`DoublyLinkedList::head_node`] / [`DoublyLinkedList::tail_node`]. They are
/// used to anchor insertions and removals.
///
/// A handle stays valid until its node is removed. After that (or when it is
/// presented to a different list, or to the same list after
/// [`DoublyLinkedList::clear`]) every operation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) list: ListId,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeRef {
    /// Detaches this node from `list` and returns its value.
    ///
    /// Neighbours are spliced together and the head/tail are moved when the
    /// node was a boundary node.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidNode`] if the node is not a live member of `list`.
    pub fn remove_from<T>(self, list: &mut DoublyLinkedList<T>) -> ListResult<T> {
        list.remove(self)
    }

    /// Zero-based offset of this node counted from the head of `list`.
    ///
    /// # Errors
    ///
    /// [`ListError::NodeNotFound`] if a walk from the head never meets the node.
    pub fn head_index_in<T>(self, list: &DoublyLinkedList<T>) -> ListResult<usize> {
        list.nodes().position(|node| node == self).ok_or_else(|| {
            debug!(index = self.index, generation = self.generation, "node not found from head");
            ListError::NodeNotFound
        })
    }

    /// Zero-based offset of this node counted from the tail of `list`.
    ///
    /// # Errors
    ///
    /// [`ListError::NodeNotFound`] if a walk from the tail never meets the node.
    pub fn tail_index_in<T>(self, list: &DoublyLinkedList<T>) -> ListResult<usize> {
        list.nodes().rev().position(|node| node == self).ok_or_else(|| {
            debug!(index = self.index, generation = self.generation, "node not found from tail");
            ListError::NodeNotFound
        })
    }
}
