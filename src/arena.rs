//! Handle-based nodes for exercises where chains share nodes.
//!
//! A `Box` link has exactly one owner, so two lists meeting at a common tail or a list
//! looping back on itself can't be built from boxes. Here every node lives in a slot of a
//! `NodeArena` and links are `NodeId` handles, so any number of nodes may point at the same
//! successor.
//!
//! Released slots go on a free list and are handed out again by later allocations. Each slot
//! carries a generation that is bumped on release, so a handle to a released node reads as
//! `None` even after its slot has been reused.

use log::debug;

use crate::stack::Stack;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

struct Entry {
    val: i32,
    next: Option<NodeId>,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

#[derive(Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn alloc(&mut self, val: i32) -> NodeId {
        self.alloc_with_next(val, None)
    }

    pub fn alloc_with_next(&mut self, val: i32, next: Option<NodeId>) -> NodeId {
        let entry = Some(Entry { val, next });
        self.live += 1;
        match self.free_list.pop() {
            Some(index) => {
                debug!("reusing arena slot {}", index);
                let slot = &mut self.slots[index];
                slot.entry = entry;
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry,
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Frees the node and returns its value. Links from other nodes to it are left dangling
    /// and read as `None` from then on.
    pub fn release(&mut self, id: NodeId) -> Option<i32> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.live -= 1;
        Some(entry.val)
    }

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    pub fn val(&self, id: NodeId) -> Option<i32> {
        self.entry(id).map(|entry| entry.val)
    }

    /// Follows the link out of `id`. Links to released nodes read as `None`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let next = self.entry(id)?.next?;
        self.entry(next).map(|_| next)
    }

    /// Points `id` at `next`. Returns false if `id` is no longer live.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.next = next;
                true
            }
            None => false,
        }
    }

    /// Builds a chain holding `values` in order and returns its head.
    pub fn from_values(&mut self, values: &[i32]) -> Option<NodeId> {
        values
            .iter()
            .rev()
            .fold(None, |next, &val| Some(self.alloc_with_next(val, next)))
    }

    /// Walks the chain starting at `head`. The walk stops after `len()` nodes, so it ends
    /// even if the chain loops.
    pub fn chain(&self, head: Option<NodeId>) -> Chain<'_> {
        Chain {
            arena: self,
            next: head.filter(|&id| self.entry(id).is_some()),
            remaining: self.live,
        }
    }

    pub fn values(&self, head: Option<NodeId>) -> Vec<i32> {
        self.chain(head).filter_map(|id| self.val(id)).collect()
    }

    /// Last node of an acyclic chain.
    pub fn tail(&self, head: Option<NodeId>) -> Option<NodeId> {
        self.chain(head).last()
    }
}

pub struct Chain<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.arena.next(current);
        Some(current)
    }
}

/// Returns the node where the chain starting at `head` enters its cycle, or `None` if the
/// chain ends.
///
/// Floyd's tortoise and hare: the hare moves two links per step, the tortoise one. If they
/// meet, the distance from the head to the cycle entry equals the distance from the meeting
/// point forward to the entry, so walking one pointer from each place in lockstep lands both
/// on the entry.
pub fn detect_cycle(arena: &NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let head = head?;
    let mut slow = head;
    let mut fast = head;
    loop {
        fast = arena.next(arena.next(fast)?)?;
        slow = arena.next(slow)?;
        if slow == fast {
            break;
        }
    }

    let mut from_head = head;
    let mut from_meeting = fast;
    while from_head != from_meeting {
        from_head = arena.next(from_head)?;
        from_meeting = arena.next(from_meeting)?;
    }
    Some(from_head)
}

/// Returns the first node shared by both chains, compared by identity rather than value.
///
/// Both chains are pushed onto stacks. Shared nodes form a common suffix, so popping both
/// stacks in step yields equal handles until the chains diverge; the last equal handle is
/// the intersection.
pub fn get_intersection_node(
    arena: &NodeArena,
    head_a: Option<NodeId>,
    head_b: Option<NodeId>,
) -> Option<NodeId> {
    let mut stack_a = Stack::new();
    let mut stack_b = Stack::new();
    for id in arena.chain(head_a) {
        stack_a.push(id);
    }
    for id in arena.chain(head_b) {
        stack_b.push(id);
    }

    let mut intersection = None;
    while let (Some(a), Some(b)) = (stack_a.peek(), stack_b.peek()) {
        if a != b {
            break;
        }
        intersection = stack_a.pop();
        stack_b.pop();
    }
    intersection
}
