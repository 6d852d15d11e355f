//! In-memory entity caches backing the dashboard views.
//!
//! Caches hold the last-fetched collections in fetch order. They are owned by
//! a single [`DashboardStore`] and passed by reference to the index builder
//! and filter engine, so there is no hidden module-level state.

use crate::models::{Classroom, Keyed, Student, Teacher};

/// Ticket issued before a full-collection fetch is sent. Completing a load
/// with a stale ticket (one issued before a later load already applied) is
/// a no-op, so out-of-order responses can never clobber newer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Cache of one entity collection, keyed by the server-assigned identifier.
///
/// Iteration order is the order of the last applied full fetch; `upsert` and
/// `remove` keep positions stable.
#[derive(Debug)]
pub struct EntityCache<T: Keyed> {
    items: Vec<T>,
    issued: u64,
    applied: u64,
}

impl<T: Keyed> Default for EntityCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            issued: 0,
            applied: 0,
        }
    }
}

impl<T: Keyed> EntityCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a full reload about to be requested.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply a fetched collection if no newer load has landed since the
    /// ticket was issued. Returns whether the collection was applied.
    pub fn complete_load(&mut self, ticket: LoadTicket, items: Vec<T>) -> bool {
        if ticket.0 <= self.applied {
            tracing::debug!(
                ticket = ticket.0,
                applied = self.applied,
                "discarding stale load response"
            );
            return false;
        }
        self.applied = ticket.0;
        self.items = items;
        true
    }

    /// Replace the whole collection unconditionally.
    pub fn set(&mut self, items: Vec<T>) {
        self.issued += 1;
        self.applied = self.issued;
        self.items = items;
    }

    /// Replace the entity sharing `entity`'s key. No-op if absent: creation
    /// goes through a full reload instead, so upsert never grows the cache.
    pub fn upsert(&mut self, entity: T) {
        if let Some(slot) = self.items.iter_mut().find(|e| e.key() == entity.key()) {
            *slot = entity;
        }
    }

    /// Delete the entity with the given key. No-op if absent.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|e| e.key() != id);
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|e| e.key() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The three entity caches a dashboard session works from.
#[derive(Debug, Default)]
pub struct DashboardStore {
    pub students: EntityCache<Student>,
    pub teachers: EntityCache<Teacher>,
    pub classrooms: EntityCache<Classroom>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }
}
