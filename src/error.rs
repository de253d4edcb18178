use thiserror::Error;

/// Errors returned by fallible list operations.
///
/// A failed operation never modifies the list it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A pop or peek was attempted on a list with no nodes.
    #[error("list is empty")]
    EmptyCollection,

    /// An offset query reached past the end of the list.
    #[error("wanted item {index}; list only contains {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A node handle does not name a live node of this list.
    #[error("node is not part of this list")]
    InvalidNode,

    /// An index lookup walked the whole list without meeting the node.
    #[error("node not found in list")]
    NodeNotFound,
}

pub type ListResult<T> = Result<T, ListError>;
