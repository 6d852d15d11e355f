//! Teacher model and request payloads.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A teacher as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Linked login account, set once an admin approves the teacher.
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Keyed for Teacher {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Request body for creating or updating a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
}

/// Optional overrides when approving a teacher from a registered user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApproveTeacherRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
