//! `CabinRegistry` — the flat, append-only collection of cabins.

use log::debug;

use lift_core::CabinId;

use crate::{Cabin, Elevator};

/// All cabins in the building, indexed by [`CabinId`] in registration order.
///
/// The registry is handed to the dispatcher at construction time; nothing
/// discovers it ambiently.  Cabins are never removed during a run.
pub struct CabinRegistry<E: Elevator = Cabin> {
    cabins: Vec<E>,
}

impl<E: Elevator> CabinRegistry<E> {
    pub fn new() -> Self {
        Self { cabins: Vec::new() }
    }

    /// Register `cabin` and return its id.
    ///
    /// Idempotent by label: if a cabin with the same [`Elevator::id`] is
    /// already registered, `cabin` is dropped and the existing id returned.
    pub fn register(&mut self, cabin: E) -> CabinId {
        if let Some(existing) = self.find(cabin.id()) {
            debug!("cabin {} already registered as {existing}", cabin.id());
            return existing;
        }
        let id = CabinId(self.cabins.len() as u32);
        debug!("registered cabin {} as {id}", cabin.id());
        self.cabins.push(cabin);
        id
    }

    /// Look up a cabin's id by label.
    pub fn find(&self, label: &str) -> Option<CabinId> {
        self.cabins
            .iter()
            .position(|c| c.id() == label)
            .map(|i| CabinId(i as u32))
    }

    #[inline]
    pub fn get(&self, id: CabinId) -> Option<&E> {
        self.cabins.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: CabinId) -> Option<&mut E> {
        self.cabins.get_mut(id.index())
    }

    /// Read-only view of every cabin in registration order.
    #[inline]
    pub fn cabins(&self) -> &[E] {
        &self.cabins
    }

    pub fn cabins_mut(&mut self) -> &mut [E] {
        &mut self.cabins
    }

    /// `(CabinId, &cabin)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CabinId, &E)> + '_ {
        self.cabins
            .iter()
            .enumerate()
            .map(|(i, c)| (CabinId(i as u32), c))
    }

    pub fn len(&self) -> usize {
        self.cabins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cabins.is_empty()
    }
}

impl<E: Elevator> Default for CabinRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
