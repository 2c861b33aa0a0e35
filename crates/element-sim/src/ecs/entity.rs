use std::collections::BTreeSet;

use element_core::types::EntityId;

/// Hands out entity ids. Freed indices are reused lowest-first; every
/// reuse bumps the index's generation so stale handles stop matching.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free_indices: BTreeSet<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        if let Some(index) = self.free_indices.pop_first() {
            let slot = index as usize;
            self.alive[slot] = true;
            EntityId::new(index, self.generations[slot])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.alive.push(true);
            EntityId::new(index, 0)
        }
    }

    /// Returns false if `id` was already dead or stale.
    pub fn deallocate(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let slot = id.index as usize;
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free_indices.insert(id.index);
        true
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        let slot = id.index as usize;
        self.alive.get(slot).copied().unwrap_or(false) && self.generations[slot] == id.generation
    }

    /// Live handle currently occupying `index`, if any.
    pub fn live_at(&self, index: u32) -> Option<EntityId> {
        let slot = index as usize;
        if self.alive.get(slot).copied().unwrap_or(false) {
            Some(EntityId::new(index, self.generations[slot]))
        } else {
            None
        }
    }

    /// One past the highest index ever handed out. Queries scan `0..capacity()`.
    pub fn capacity(&self) -> u32 {
        self.generations.len() as u32
    }

    pub fn live_count(&self) -> usize {
        self.generations.len() - self.free_indices.len()
    }
}
