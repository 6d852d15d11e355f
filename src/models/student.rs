//! Student model and request payloads.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A student as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub is_enrolled: bool,
    /// Classroom the student belongs to. May reference a classroom that is
    /// not currently cached (paginated or stale data).
    pub classroom_id: i64,
}

impl Keyed for Student {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Request body for creating or updating a student (all fields minus `id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub is_enrolled: bool,
    pub classroom_id: i64,
}
