extern crate std;

use std::vec::Vec;

use super::DoublyLinkedList;

mod list;

/// Walks the chain both ways and checks it against `len` and the back links.
fn assert_well_formed<T>(list: &DoublyLinkedList<T>) {
    let len = list.len();
    assert_eq!(list.head_index().is_none(), len == 0);
    assert_eq!(list.tail_index().is_none(), len == 0);

    let mut forward = Vec::new();
    let mut prev = None;
    let mut current = list.head_index();
    while let Some(index) = current {
        assert!(forward.len() < len, "forward walk is longer than len");
        let (back, next) = list.links(index);
        assert_eq!(back, prev, "prev link of {index} does not point back");
        forward.push(index);
        prev = Some(index);
        current = next;
    }
    assert_eq!(prev, list.tail_index());
    assert_eq!(forward.len(), len);

    let mut backward = Vec::new();
    let mut current = list.tail_index();
    while let Some(index) = current {
        assert!(backward.len() < len, "backward walk is longer than len");
        backward.push(index);
        current = list.links(index).0;
    }
    backward.reverse();
    assert_eq!(forward, backward);
}

fn values<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}
