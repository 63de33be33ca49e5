// crates/engine_ecs/src/entity.rs
use std::fmt;

// Handle to a slot in the World arena.
// Bits 0-31: Index (The slot in the array)
// Bits 32-63: Generation (bumped every time the slot is freed)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: u64,
}

impl Entity {
    const INDEX_MASK: u64 = 0xFFFF_FFFF;
    const GENERATION_SHIFT: u64 = 32;

    pub fn new(index: u32, generation: u32) -> Self {
        let id = (index as u64) | ((generation as u64) << Self::GENERATION_SHIFT);
        Self { id }
    }

    pub fn index(&self) -> usize {
        (self.id & Self::INDEX_MASK) as usize
    }

    pub fn generation(&self) -> u32 {
        (self.id >> Self::GENERATION_SHIFT) as u32
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}:{})", self.index(), self.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_index_and_generation() {
        let e = Entity::new(7, 3);
        assert_eq!(e.index(), 7);
        assert_eq!(e.generation(), 3);
        assert_eq!(Entity::new(u32::MAX, 1).index(), u32::MAX as usize);
        assert_eq!(Entity::new(u32::MAX, 1).generation(), 1);
        assert_eq!(format!("{e:?}"), "Entity(7:3)");
    }

    #[test]
    fn same_slot_different_generation_is_a_different_entity() {
        assert_ne!(Entity::new(1, 0), Entity::new(1, 1));
    }
}
