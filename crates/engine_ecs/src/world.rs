// crates/engine_ecs/src/world.rs

use std::any::TypeId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

#[derive(Default)]
pub struct World {
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
    alive: Vec<bool>,
    live_count: usize,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> Entity {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            self.alive.push(false);
            (self.generations.len() - 1) as u32
        };

        self.alive[index as usize] = true;
        self.live_count += 1;
        Entity::new(index, self.generations[index as usize])
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let index = entity.index();
        index < self.generations.len()
            && self.alive[index]
            && self.generations[index] == entity.generation()
    }

    /// Remove the entity and all of its components. Returns false for stale handles,
    /// so despawning twice is harmless.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        for storage in self.components.values_mut() {
            storage.remove_entity(entity);
        }

        let index = entity.index();
        self.alive[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_indices.push(index as u32);
        self.live_count -= 1;
        true
    }

    /// Despawn everything. Generations survive, so handles from before the clear stay dead.
    pub fn clear(&mut self) {
        for storage in self.components.values_mut() {
            storage.clear();
        }
        self.free_indices.clear();
        for (index, alive) in self.alive.iter_mut().enumerate() {
            if *alive {
                self.generations[index] = self.generations[index].wrapping_add(1);
                *alive = false;
            }
        }
        // Reuse low slots first.
        self.free_indices.extend((0..self.generations.len() as u32).rev());
        self.live_count = 0;
    }

    pub fn len(&self) -> usize {
        self.live_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Storage is created on first use.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) {
        if !self.is_alive(entity) {
            return;
        }

        match self.components.entry(TypeId::of::<T>()) {
            Entry::Occupied(mut occ) => {
                if let Some(set) = occ.get_mut().as_any_mut().downcast_mut::<SparseSet<T>>() {
                    set.insert(entity, component);
                }
            }
            Entry::Vacant(vac) => {
                let mut set = SparseSet::<T>::new();
                set.insert(entity, component);
                vac.insert(Box::new(set));
            }
        }
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.query::<T>()?.get(entity)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.query_mut::<T>()?.get_mut(entity)
    }

    /// Read-only access to the full storage of a component type.
    pub fn query<T: 'static>(&self) -> Option<&SparseSet<T>> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<SparseSet<T>>())
    }

    /// Mutable access to the full storage of a component type.
    pub fn query_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<SparseSet<T>>())
    }

    /// Number of live entities carrying a `T`.
    pub fn count<T: 'static>(&self) -> usize {
        self.query::<T>().map_or(0, SparseSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pos(i32);
    struct Tag;

    #[test]
    fn spawn_add_and_query() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        world.add_component(a, Pos(1));
        world.add_component(b, Pos(2));
        world.add_component(b, Tag);

        assert_eq!(world.len(), 2);
        assert_eq!(world.count::<Pos>(), 2);
        assert_eq!(world.count::<Tag>(), 1);
        assert_eq!(world.get_component::<Pos>(a), Some(&Pos(1)));
        assert!(world.get_component::<Tag>(a).is_none());
    }

    #[test]
    fn despawn_removes_components_and_invalidates_handle() {
        let mut world = World::new();
        let a = world.spawn();
        world.add_component(a, Pos(5));

        assert!(world.despawn(a));
        assert!(!world.despawn(a));
        assert!(!world.is_alive(a));
        assert_eq!(world.count::<Pos>(), 0);

        // Slot is recycled with a bumped generation.
        let b = world.spawn();
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert!(world.get_component::<Pos>(a).is_none());
    }

    #[test]
    fn components_on_dead_entities_are_ignored() {
        let mut world = World::new();
        let a = world.spawn();
        world.despawn(a);
        world.add_component(a, Pos(9));
        assert_eq!(world.count::<Pos>(), 0);
    }

    #[test]
    fn clear_kills_every_handle() {
        let mut world = World::new();
        let handles: Vec<_> = (0..4).map(|i| {
            let e = world.spawn();
            world.add_component(e, Pos(i));
            e
        }).collect();

        world.clear();
        assert!(world.is_empty());
        assert!(handles.iter().all(|e| !world.is_alive(*e)));
        assert_eq!(world.count::<Pos>(), 0);

        let fresh = world.spawn();
        assert_eq!(fresh.index(), 0);
        assert!(world.is_alive(fresh));
    }

    #[test]
    fn get_component_mut_writes_through() {
        let mut world = World::new();
        let a = world.spawn();
        world.add_component(a, Pos(0));
        if let Some(p) = world.get_component_mut::<Pos>(a) {
            p.0 = 42;
        }
        assert_eq!(world.get_component::<Pos>(a), Some(&Pos(42)));
        assert_eq!(world.count::<Pos>(), 1);
    }
}
