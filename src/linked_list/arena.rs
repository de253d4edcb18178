use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

enum Slot<T> {
    Vacant {
        generation: u32,
        next_free: Option<usize>,
    },
    Occupied {
        generation: u32,
        value: T,
    },
}

/// Slot storage with stable indices.
///
/// Removed slots are chained into a free list and reused by later inserts.
/// Every removal bumps the slot's generation, so an `(index, generation)`
/// pair taken before the removal no longer matches.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its `(index, generation)`.
    pub(crate) fn insert(&mut self, value: T) -> (usize, u32) {
        self.len += 1;
        match self.free {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied { generation, value };
                (index, generation)
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    value,
                });
                (index, 0)
            }
        }
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        let generation = match self.slots.get(index)? {
            Slot::Occupied { generation, .. } => generation.wrapping_add(1),
            Slot::Vacant { .. } => return None,
        };
        let slot = core::mem::replace(
            &mut self.slots[index],
            Slot::Vacant {
                generation,
                next_free: self.free,
            },
        );
        self.free = Some(index);
        self.len -= 1;
        match slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Returns true if `index` is occupied and was filled at `generation`.
    pub(crate) fn is_live(&self, index: usize, generation: u32) -> bool {
        matches!(
            self.slots.get(index),
            Some(Slot::Occupied { generation: g, .. }) if *g == generation
        )
    }

    pub(crate) fn generation(&self, index: usize) -> u32 {
        match &self.slots[index] {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("link points at a vacant slot")
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("link points at a vacant slot")
    }
}
