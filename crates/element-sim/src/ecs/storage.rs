//! Per-component tables, keyed by entity index.
//!
//! Tables know nothing about generations: the world only reaches a table
//! after checking the handle is live and the mask bit is set.

use std::collections::BTreeMap;

pub trait ComponentStorage<T>: Default {
    /// Insert or replace. Returns the previous value.
    fn insert(&mut self, index: u32, value: T) -> Option<T>;
    fn remove(&mut self, index: u32) -> Option<T>;
    fn get(&self, index: u32) -> Option<&T>;
    fn get_mut(&mut self, index: u32) -> Option<&mut T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense-packed table for components touched every frame. Values live
/// contiguously; removal swaps the last value into the hole.
#[derive(Debug)]
pub struct PackedStorage<T> {
    dense: Vec<T>,
    owners: Vec<u32>,
    slots: Vec<Option<u32>>,
}

impl<T> Default for PackedStorage<T> {
    fn default() -> Self {
        Self {
            dense: Vec::new(),
            owners: Vec::new(),
            slots: Vec::new(),
        }
    }
}

impl<T> PackedStorage<T> {
    fn slot(&self, index: u32) -> Option<usize> {
        self.slots
            .get(index as usize)
            .copied()
            .flatten()
            .map(|slot| slot as usize)
    }

    /// `(entity index, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.owners.iter().copied().zip(self.dense.iter())
    }
}

impl<T> ComponentStorage<T> for PackedStorage<T> {
    fn insert(&mut self, index: u32, value: T) -> Option<T> {
        if let Some(slot) = self.slot(index) {
            return Some(std::mem::replace(&mut self.dense[slot], value));
        }
        let i = index as usize;
        if self.slots.len() <= i {
            self.slots.resize(i + 1, None);
        }
        self.slots[i] = Some(self.dense.len() as u32);
        self.dense.push(value);
        self.owners.push(index);
        None
    }

    fn remove(&mut self, index: u32) -> Option<T> {
        let slot = self.slots.get_mut(index as usize)?.take()? as usize;
        let value = self.dense.swap_remove(slot);
        self.owners.swap_remove(slot);
        if let Some(&moved) = self.owners.get(slot) {
            self.slots[moved as usize] = Some(slot as u32);
        }
        Some(value)
    }

    fn get(&self, index: u32) -> Option<&T> {
        self.slot(index).map(|slot| &self.dense[slot])
    }

    fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slot(index).map(move |slot| &mut self.dense[slot])
    }

    fn len(&self) -> usize {
        self.dense.len()
    }
}

/// Ordered map for singletons and rarely attached components.
#[derive(Debug)]
pub struct SparseStorage<T> {
    values: BTreeMap<u32, T>,
}

impl<T> Default for SparseStorage<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> ComponentStorage<T> for SparseStorage<T> {
    fn insert(&mut self, index: u32, value: T) -> Option<T> {
        self.values.insert(index, value)
    }

    fn remove(&mut self, index: u32) -> Option<T> {
        self.values.remove(&index)
    }

    fn get(&self, index: u32) -> Option<&T> {
        self.values.get(&index)
    }

    fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.values.get_mut(&index)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_insert_replaces() {
        let mut table = PackedStorage::default();
        assert_eq!(table.insert(4, 'a'), None);
        assert_eq!(table.insert(4, 'b'), Some('a'));
        assert_eq!(table.get(4), Some(&'b'));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn packed_swap_remove_keeps_lookup_valid() {
        let mut table = PackedStorage::default();
        table.insert(0, 10);
        table.insert(5, 15);
        table.insert(2, 12);

        assert_eq!(table.remove(0), Some(10));
        assert_eq!(table.get(0), None);
        // index 2 was moved into the hole left by index 0
        assert_eq!(table.get(2), Some(&12));
        assert_eq!(table.get(5), Some(&15));
        assert_eq!(table.len(), 2);

        *table.get_mut(2).unwrap() += 1;
        let mut pairs: Vec<(u32, i32)> = table.iter().map(|(i, v)| (i, *v)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![(2, 13), (5, 15)]);
    }

    #[test]
    fn packed_remove_missing() {
        let mut table: PackedStorage<u8> = PackedStorage::default();
        assert_eq!(table.remove(100), None);
        table.insert(1, 1);
        assert_eq!(table.remove(1), Some(1));
        assert_eq!(table.remove(1), None);
        assert!(table.is_empty());
    }

    #[test]
    fn sparse_basic() {
        let mut table = SparseStorage::default();
        table.insert(9, "x");
        assert_eq!(table.get(9), Some(&"x"));
        assert_eq!(table.remove(9), Some("x"));
        assert!(table.is_empty());
    }
}
