//! Handle-addressed actor storage.
//!
//! Actors are stored in insertion order and addressed by [`ActorId`]
//! handles that are never reused, so a stale handle simply stops
//! resolving after its actor is removed.

use crate::game::error::GameError;

/// Stable handle to an actor in an [`ActorArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u32);

impl ActorId {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ActorArena<T> {
    next_id: u32,
    slots: Vec<(ActorId, T)>,
}

impl<T> Default for ActorArena<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slots: Vec::new(),
        }
    }
}

impl<T> ActorArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: T) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, actor));
        id
    }

    fn position(&self, id: ActorId) -> Option<usize> {
        // Ids are handed out in increasing order and removal keeps order
        self.slots.binary_search_by_key(&id, |(slot_id, _)| *slot_id).ok()
    }

    pub fn get(&self, id: ActorId) -> Option<&T> {
        self.position(id).map(|i| &self.slots[i].1)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut T> {
        self.position(id).map(|i| &mut self.slots[i].1)
    }

    /// Like [`get`](Self::get) but reports a stale handle as an error.
    pub fn try_get(&self, id: ActorId) -> Result<&T, GameError> {
        self.get(id).ok_or(GameError::UnknownActor(id.raw()))
    }

    pub fn remove(&mut self, id: ActorId) -> Option<T> {
        self.position(id).map(|i| self.slots.remove(i).1)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &T)> {
        self.slots.iter().map(|(id, actor)| (*id, actor))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut T)> {
        self.slots.iter_mut().map(|(id, actor)| (*id, actor))
    }

    /// Keep only the actors for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(ActorId, &T) -> bool) {
        self.slots.retain(|(id, actor)| keep(*id, actor));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
