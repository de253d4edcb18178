//! Generic collections for small programs.
//!
//! The crate is `no_std` and only needs `alloc`. See [`linked_list`] for the
//! arena-backed [`DoublyLinkedList`].
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{ListError, ListResult};
pub use linked_list::{DoublyLinkedList, NodeRef};
