//! Data models for the school management dashboard.
//!
//! Field names match the backend's JSON wire format exactly (snake_case).

mod classroom;
mod student;
mod teacher;
mod user;

pub use classroom::*;
pub use student::*;
pub use teacher::*;
pub use user::*;

/// Access to the server-assigned identifier, for cache keying.
pub trait Keyed {
    fn key(&self) -> i64;
}
