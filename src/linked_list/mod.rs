//! An arena-backed doubly linked list.
//!
//! Nodes are stored in a slot arena owned by the list and linked by slot
//! index rather than by pointer. Callers hold [`NodeRef`] handles, which name
//! a node without owning it. A handle carries the identity of the list that
//! issued it and the generation of its slot, so a handle from another list,
//! or one whose node has been removed, is rejected instead of silently
//! touching the wrong node.
//!
//! ## Core Components
//!
//! - [`DoublyLinkedList`]: the list itself, with push/pop/peek at both ends,
//!   offset peeks and node-anchored insertion and removal.
//! - [`NodeRef`]: a copyable handle to one node, also offering removal and
//!   index queries against a list.
//! - [`Iter`], [`IntoIter`] and [`Nodes`]: double-ended iterators over
//!   values, owned values and node handles.
//!
//! # Examples
//!
//! ```
//! use arena_list::{DoublyLinkedList, ListError};
//!
//! let mut list = DoublyLinkedList::new();
//! for i in 1..=4 {
//!     list.push_tail(i);
//! }
//! assert_eq!(list.pop_head(), Ok(1));
//!
//! let two = list.head_node().unwrap();
//! list.insert_after(99, two).unwrap();
//! assert_eq!(list.to_string(), "[2 <=> 99 <=> 3 <=> 4] (4 items)");
//!
//! let removed = two.remove_from(&mut list).unwrap();
//! assert_eq!(removed, 2);
//! assert_eq!(two.remove_from(&mut list), Err(ListError::InvalidNode));
//! assert_eq!(list.len(), 3);
//! ```

mod arena;
mod iter;
mod list;
mod node;

#[cfg(test)]
mod tests;

pub use iter::{IntoIter, Iter, Nodes};
pub use list::DoublyLinkedList;
pub use node::NodeRef;
