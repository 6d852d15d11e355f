//! Classroom model and request payloads.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A classroom as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub grade: i32,
    pub capacity: u32,
    /// Assigned teacher, absent when the classroom is unassigned.
    #[serde(default)]
    pub teacher_id: Option<i64>,
}

impl Keyed for Classroom {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Request body for creating or updating a classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassroom {
    pub name: String,
    pub grade: i32,
    pub capacity: u32,
    #[serde(default)]
    pub teacher_id: Option<i64>,
}
