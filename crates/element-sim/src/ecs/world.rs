use element_core::types::EntityId;

use super::component::{Bundle, Component, Tables};
use super::entity::EntityAllocator;
use super::mask::Mask;
use super::storage::ComponentStorage;
use crate::error::EcsError;

/// The entity-component store. Systems borrow it for the length of one call
/// and keep nothing but entity ids across frames.
#[derive(Default)]
pub struct World {
    entities: EntityAllocator,
    masks: Vec<Mask>,
    tables: Tables,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh or recycled id with no components.
    pub fn create(&mut self) -> EntityId {
        let id = self.entities.allocate();
        let slot = id.index as usize;
        if self.masks.len() <= slot {
            self.masks.resize(slot + 1, Mask::EMPTY);
        }
        debug_assert!(self.masks[slot].is_empty());
        id
    }

    /// Create an entity and attach `bundle` to it.
    pub fn spawn<B: Bundle>(&mut self, bundle: B) -> EntityId {
        let id = self.create();
        self.attach(id.index, bundle);
        id
    }

    /// Remove every component and release the id. Returns false for a
    /// dead or stale handle.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        if !self.entities.is_alive(id) {
            return false;
        }
        let slot = id.index as usize;
        let mask = std::mem::take(&mut self.masks[slot]);
        self.tables.remove_masked(id.index, mask);
        self.entities.deallocate(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.is_alive(id)
    }

    /// Attach components, replacing any of the same type already present.
    pub fn add<B: Bundle>(&mut self, id: EntityId, bundle: B) -> Result<(), EcsError> {
        if !self.entities.is_alive(id) {
            return Err(EcsError::DeadEntity(id));
        }
        self.attach(id.index, bundle);
        Ok(())
    }

    /// Attach a single component. Returns the value it replaced.
    pub fn insert<T: Component>(&mut self, id: EntityId, value: T) -> Result<Option<T>, EcsError> {
        if !self.entities.is_alive(id) {
            return Err(EcsError::DeadEntity(id));
        }
        let slot = id.index as usize;
        self.masks[slot] = self.masks[slot].with(T::BIT);
        Ok(T::table_mut(&mut self.tables).insert(id.index, value))
    }

    pub fn remove<T: Component>(&mut self, id: EntityId) -> Option<T> {
        if !self.has::<T>(id) {
            return None;
        }
        let slot = id.index as usize;
        self.masks[slot] = self.masks[slot].without(T::BIT);
        T::table_mut(&mut self.tables).remove(id.index)
    }

    pub fn get<T: Component>(&self, id: EntityId) -> Option<&T> {
        if !self.has::<T>(id) {
            return None;
        }
        T::table(&self.tables).get(id.index)
    }

    pub fn get_mut<T: Component>(&mut self, id: EntityId) -> Option<&mut T> {
        if !self.has::<T>(id) {
            return None;
        }
        T::table_mut(&mut self.tables).get_mut(id.index)
    }

    pub fn has<T: Component>(&self, id: EntityId) -> bool {
        self.mask(id).has(T::BIT)
    }

    /// Component mask of `id`; empty for dead or stale handles.
    pub fn mask(&self, id: EntityId) -> Mask {
        if self.entities.is_alive(id) {
            self.masks[id.index as usize]
        } else {
            Mask::EMPTY
        }
    }

    /// True if `id` is live and carries every component in `query`.
    pub fn matches(&self, id: EntityId, query: Mask) -> bool {
        self.mask(id).test(query)
    }

    /// Every live entity carrying all of `query`, in ascending index order.
    pub fn query(&self, query: Mask) -> Vec<EntityId> {
        (0..self.entities.capacity())
            .filter(|&index| self.masks[index as usize].test(query))
            .filter_map(|index| self.entities.live_at(index))
            .collect()
    }

    /// Lowest-index entity carrying all of `query`.
    pub fn find_first(&self, query: Mask) -> Option<EntityId> {
        (0..self.entities.capacity())
            .filter(|&index| self.masks[index as usize].test(query))
            .find_map(|index| self.entities.live_at(index))
    }

    /// Like `find_first`, for entities expected to exist at most once.
    pub fn singleton(&self, query: Mask) -> Option<EntityId> {
        debug_assert!(
            self.count(query) <= 1,
            "more than one entity matches singleton query {query:?}"
        );
        self.find_first(query)
    }

    pub fn count(&self, query: Mask) -> usize {
        (0..self.entities.capacity())
            .filter(|&index| {
                self.masks[index as usize].test(query) && self.entities.live_at(index).is_some()
            })
            .count()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.live_count()
    }

    /// Rows in the `T` table. Always equals the number of live entities
    /// whose mask carries `T`.
    pub fn table_len<T: Component>(&self) -> usize {
        T::table(&self.tables).len()
    }

    fn attach<B: Bundle>(&mut self, index: u32, bundle: B) {
        let slot = index as usize;
        self.masks[slot] = self.masks[slot].union(B::mask());
        bundle.insert_into(&mut self.tables, index);
    }
}

#[cfg(test)]
mod tests {
    use element_core::components::*;
    use glam::Vec2;

    use super::*;

    #[test]
    fn spawn_and_destroy() {
        let mut world = World::new();
        let e = world.spawn((Transform::default(), Creep));
        assert!(world.is_alive(e));
        assert_eq!(world.entity_count(), 1);

        assert!(world.destroy(e));
        assert!(!world.is_alive(e));
        assert_eq!(world.entity_count(), 0);
        assert!(!world.has::<Transform>(e));
        assert!(!world.has::<Creep>(e));
        assert_eq!(world.table_len::<Transform>(), 0);
        assert!(!world.destroy(e));
    }

    #[test]
    fn destroyed_id_reused_by_next_create() {
        let mut world = World::new();
        let a = world.create();
        let b = world.spawn((Hp::full(5),));
        let _c = world.create();

        world.destroy(b);
        let d = world.create();
        assert_eq!(d.index, b.index);
        assert_ne!(d, b, "generation distinguishes the recycled id");
        assert!(!world.has::<Hp>(d), "recycled id starts empty");
        assert!(world.get::<Hp>(b).is_none(), "stale handle resolves to nothing");
        assert!(world.is_alive(a));
    }

    #[test]
    fn add_replaces_existing_component() {
        let mut world = World::new();
        let e = world.spawn((Speed { value: 1.0 },));
        world
            .add(e, (Speed { value: 2.0 }, Range { radius: 9.0 }))
            .unwrap();
        assert_eq!(world.get::<Speed>(e).unwrap().value, 2.0);
        assert_eq!(world.get::<Range>(e).unwrap().radius, 9.0);
        assert_eq!(world.table_len::<Speed>(), 1);
    }

    #[test]
    fn add_to_dead_entity_fails() {
        let mut world = World::new();
        let e = world.create();
        world.destroy(e);
        assert!(matches!(
            world.add(e, (Creep,)),
            Err(EcsError::DeadEntity(id)) if id == e
        ));
        assert!(world.insert(e, Creep).is_err());
    }

    #[test]
    fn insert_and_remove_update_mask() {
        let mut world = World::new();
        let e = world.create();
        assert_eq!(world.insert(e, Damage { value: 6 }).unwrap(), None);
        assert!(world.matches(e, Mask::of::<(Damage,)>()));

        assert_eq!(world.remove::<Damage>(e), Some(Damage { value: 6 }));
        assert!(world.mask(e).is_empty());
        assert_eq!(world.remove::<Damage>(e), None);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut world = World::new();
        let e = world.spawn((Transform::at(Vec2::ZERO),));
        world.get_mut::<Transform>(e).unwrap().position.x = 4.0;
        assert_eq!(world.get::<Transform>(e).unwrap().position.x, 4.0);
    }

    #[test]
    fn query_filters_by_mask_in_index_order() {
        let mut world = World::new();
        let c1 = world.spawn((Creep, Transform::default()));
        let _tower = world.spawn((Transform::default(), Range { radius: 1.0 }));
        let c2 = world.spawn((Creep, Transform::default(), Hp::full(1)));

        let creeps = world.query(Mask::of::<(Creep, Transform)>());
        assert_eq!(creeps, vec![c1, c2]);
        assert_eq!(world.find_first(Mask::of::<(Hp,)>()), Some(c2));
        assert_eq!(world.count(Mask::of::<(Transform,)>()), 3);

        world.destroy(c1);
        assert_eq!(world.query(Mask::of::<(Creep,)>()), vec![c2]);
    }

    #[test]
    fn singleton_lookup() {
        let mut world = World::new();
        assert_eq!(world.singleton(Mask::of::<(Player,)>()), None);
        let p = world.spawn((Player, Hp::full(20), Gold { current: 100 }));
        assert_eq!(world.singleton(Mask::of::<(Player, Gold)>()), Some(p));
    }
}
