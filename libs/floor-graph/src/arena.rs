//! # Node Arena
//!
//! Generation-tagged storage for graph nodes.
//!
//! Positional node indices shift on every deletion. Internally the graph
//! refers to nodes by [`NodeId`], a slot index paired with a generation
//! counter. Freeing a slot bumps its generation, so a stale handle never
//! matches a node that later reuses the slot.

use glam::DVec2;

/// Stable handle to a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index in the arena.
    pub fn slot(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeEntry {
    /// Position relative to the graph origin.
    pub position: DVec2,
    /// Current positional index in the graph's node order.
    pub order: usize,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entry: Option<NodeEntry>,
}

/// Slot storage with free-list reuse.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn insert(&mut self, position: DVec2, order: usize) -> NodeId {
        self.len += 1;
        let entry = Some(NodeEntry { position, order });

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = entry;
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entry,
            });
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    /// Frees a node's slot. Returns the removed entry if the handle was live.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeEntry> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(entry)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeEntry> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert(DVec2::new(1.0, 2.0), 0);
        let b = arena.insert(DVec2::new(3.0, 4.0), 1);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|e| e.position), Some(DVec2::new(1.0, 2.0)));
        assert_eq!(arena.get(b).map(|e| e.order), Some(1));
    }

    #[test]
    fn test_generation_prevents_reuse_collision() {
        let mut arena = NodeArena::new();
        let a = arena.insert(DVec2::ZERO, 0);
        assert!(arena.remove(a).is_some());

        let b = arena.insert(DVec2::ONE, 0);
        assert_eq!(b.slot(), a.slot());
        assert_ne!(b.generation(), a.generation());

        assert!(arena.get(a).is_none());
        assert!(arena.get(b).is_some());
    }

    #[test]
    fn test_double_remove_is_noop() {
        let mut arena = NodeArena::new();
        let a = arena.insert(DVec2::ZERO, 0);
        assert!(arena.remove(a).is_some());
        assert!(arena.remove(a).is_none());
        assert_eq!(arena.len(), 0);
    }
}
