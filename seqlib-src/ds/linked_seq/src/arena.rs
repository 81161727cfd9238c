use std::ops::{Index, IndexMut};

/// Generation-checked handle to a slot of an [`Arena`].
///
/// A slot's generation is bumped every time it is released, so a handle
/// to a released node never aliases the node that reuses the slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct NodeId {
    slot: usize,
    gen: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) val: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied { gen: u32, node: Node<T> },
    Vacant { gen: u32, next_free: Option<usize> },
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl NodeId {
    pub(crate) fn slot(self) -> usize { self.slot }
    pub(crate) fn gen(self) -> u32 { self.gen }
}

impl<T> Node<T> {
    pub(crate) fn new(val: T) -> Self { Self { val, prev: None, next: None } }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self { Self { slots: vec![], free: None, len: 0 } }
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self { slots: Vec::with_capacity(cap), free: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize { self.len }
    pub(crate) fn capacity(&self) -> usize { self.slots.capacity() }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        if let Some(slot) = self.free {
            let gen = match self.slots[slot] {
                Slot::Vacant { gen, next_free } => {
                    self.free = next_free;
                    gen
                }
                Slot::Occupied { .. } => unreachable!("free list is corrupted"),
            };
            self.slots[slot] = Slot::Occupied { gen, node };
            NodeId { slot, gen }
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot::Occupied { gen: 0, node });
            NodeId { slot, gen: 0 }
        }
    }

    /// Vacates the slot and hands the node back. The caller is expected
    /// to have detached it from its neighbors already.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            gen: id.gen.wrapping_add(1),
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.slot], vacant) {
            Slot::Occupied { gen, node } if gen == id.gen => {
                self.free = Some(id.slot);
                self.len -= 1;
                node
            }
            old => {
                self.slots[id.slot] = old;
                panic!("stale node id: {id:?}");
            }
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.slot)? {
            Slot::Occupied { gen, node } if *gen == id.gen => Some(node),
            _ => None,
        }
    }
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.slot)? {
            Slot::Occupied { gen, node } if *gen == id.gen => Some(node),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;
    fn index(&self, id: NodeId) -> &Node<T> {
        self.get(id).unwrap_or_else(|| panic!("stale node id: {id:?}"))
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).unwrap_or_else(|| panic!("stale node id: {id:?}"))
    }
}
