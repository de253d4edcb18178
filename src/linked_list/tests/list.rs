extern crate std;

use alloc::{format, string::ToString};
use std::vec;
use std::vec::Vec;

use super::{assert_well_formed, values};
use crate::{DoublyLinkedList, ListError};

#[test]
fn test_push_tail_pop_head_is_fifo() {
    let mut list = DoublyLinkedList::new();
    assert!(list.is_empty());

    for i in 1..=4 {
        list.push_tail(i);
    }
    assert_eq!(list.len(), 4);
    assert_well_formed(&list);

    let mut popped = vec![];
    while let Ok(value) = list.pop_head() {
        popped.push(value);
        assert_well_formed(&list);
    }
    assert_eq!(popped, vec![1, 2, 3, 4]);
    assert!(list.is_empty());
}

#[test]
fn test_push_head_pop_head_is_lifo() {
    let mut list = DoublyLinkedList::new();
    for i in 1..=4 {
        list.push_head(i);
    }
    assert_eq!(values(&list), vec![4, 3, 2, 1]);

    let popped: Vec<_> = core::iter::from_fn(|| list.pop_head().ok()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1]);
}

#[test]
fn test_push_tail_pop_tail_is_lifo() {
    let mut list = DoublyLinkedList::new();
    for i in 1..=4 {
        list.push_tail(i);
    }

    let popped: Vec<_> = core::iter::from_fn(|| list.pop_tail().ok()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1]);
    assert_well_formed(&list);
}

#[test]
fn test_mixed_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_tail(2);
    list.push_head(1);
    list.push_tail(3);
    list.push_head(0);
    assert_eq!(values(&list), vec![0, 1, 2, 3]);
    assert_well_formed(&list);

    assert_eq!(list.pop_tail(), Ok(3));
    assert_eq!(list.pop_head(), Ok(0));
    assert_eq!(values(&list), vec![1, 2]);
    assert_well_formed(&list);
}

#[test]
fn test_single_element_round_trip() {
    let mut list = DoublyLinkedList::new();
    list.push_tail("v");
    assert_eq!(list.pop_head(), Ok("v"));
    assert!(list.is_empty());

    list.push_head("w");
    assert_eq!(list.pop_tail(), Ok("w"));
    assert!(list.is_empty());
    assert!(list.head_node().is_none());
    assert!(list.tail_node().is_none());
    assert_well_formed(&list);
}

#[test]
fn test_empty_list_errors() {
    let mut list = DoublyLinkedList::<i32>::new();
    assert_eq!(list.pop_head(), Err(ListError::EmptyCollection));
    assert_eq!(list.pop_tail(), Err(ListError::EmptyCollection));
    assert_eq!(list.peek_head(), Err(ListError::EmptyCollection));
    assert_eq!(list.peek_tail(), Err(ListError::EmptyCollection));
    assert_eq!(list.peek_head_mut(), Err(ListError::EmptyCollection));
    assert_eq!(
        list.peek_tail_at(0),
        Err(ListError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        list.peek_head_at(0),
        Err(ListError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(list.len(), 0);
}

#[test]
fn test_peek_does_not_remove() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.peek_head(), Ok(&1));
    assert_eq!(list.peek_tail(), Ok(&3));
    assert_eq!(list.len(), 3);

    *list.peek_head_mut().unwrap() = 10;
    *list.peek_tail_mut().unwrap() = 30;
    assert_eq!(values(&list), vec![10, 2, 30]);
}

#[test]
fn test_peek_at_offsets() {
    let list = DoublyLinkedList::from([10, 20, 30, 40, 50]);

    assert_eq!(list.peek_head_at(0), list.peek_head());
    assert_eq!(list.peek_tail_at(0), list.peek_tail());

    for (n, expected) in [10, 20, 30, 40, 50].iter().enumerate() {
        assert_eq!(list.peek_head_at(n), Ok(expected));
    }
    for (n, expected) in [50, 40, 30, 20, 10].iter().enumerate() {
        assert_eq!(list.peek_tail_at(n), Ok(expected));
    }

    for n in 5..8 {
        assert_eq!(
            list.peek_head_at(n),
            Err(ListError::IndexOutOfRange { index: n, len: 5 })
        );
        assert_eq!(
            list.peek_tail_at(n),
            Err(ListError::IndexOutOfRange { index: n, len: 5 })
        );
    }
}

#[test]
fn test_reusable_after_empty() {
    let mut list = DoublyLinkedList::new();
    let only = list.push_tail(7);
    assert_eq!(list.remove(only), Ok(7));
    assert_eq!(list.len(), 0);
    assert!(list.head_node().is_none());
    assert!(list.tail_node().is_none());
    assert_well_formed(&list);

    list.push_head(1);
    list.push_tail(2);
    assert_eq!(values(&list), vec![1, 2]);
    assert_well_formed(&list);
}

#[test]
fn test_clear() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    let stale = list.head_node().unwrap();
    list.clear();
    assert!(list.is_empty());
    assert_well_formed(&list);

    // The first push after a clear lands in the same slot index.
    let fresh = list.push_tail(4);
    assert_ne!(fresh, stale);
    assert_eq!(list.get(stale), None);
    assert_eq!(list.remove(stale), Err(ListError::InvalidNode));
    assert_eq!(values(&list), vec![4]);
}

#[test]
fn test_display() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.to_string(), "[] (0 items)");

    list.push_tail(1);
    assert_eq!(list.to_string(), "[1] (1 items)");

    list.push_tail(2);
    list.push_tail(3);
    assert_eq!(list.to_string(), "[1 <=> 2 <=> 3] (3 items)");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
}

#[test]
fn test_iterators() {
    let list: DoublyLinkedList<_> = (1..=5).collect();
    assert_eq!(list.iter().len(), 5);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut sum = 0;
    for value in &list {
        sum += value;
    }
    assert_eq!(sum, 15);

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(5));
    assert_eq!(owned.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_clone_eq_and_contains() {
    let list = DoublyLinkedList::from(["a".to_string(), "b".to_string()]);
    let mut copy = list.clone();
    assert_eq!(list, copy);
    assert!(copy.contains(&"b".to_string()));
    assert!(!copy.contains(&"c".to_string()));

    // Handles are tied to the list that issued them.
    let head = list.head_node().unwrap();
    assert_eq!(copy.remove(head), Err(ListError::InvalidNode));

    copy.push_tail("c".to_string());
    assert_ne!(list, copy);
}
