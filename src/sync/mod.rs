//! Sync operations: remote mutations plus local cache reconciliation.
//!
//! Mutations are never optimistic. The cache is only touched after the server
//! confirms, and always converges to server truth:
//! - create triggers a full reload of that kind, so server-assigned and
//!   server-normalized fields are picked up;
//! - update upserts the canonical entity the server returned;
//! - delete removes the entity locally.
//! Full reloads go through the cache's load tickets so a response overtaken
//! by a newer reload is discarded instead of applied.

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{
    Classroom, NewClassroom, NewStudent, NewTeacher, Student, Teacher,
};
use crate::store::DashboardStore;

/// Reload the student cache from the server.
pub async fn refresh_students(
    client: &ApiClient,
    store: &mut DashboardStore,
) -> Result<(), ApiError> {
    let ticket = store.students.begin_load();
    let students = client.list_students().await?;
    store.students.complete_load(ticket, students);
    Ok(())
}

/// Reload the teacher cache from the server.
pub async fn refresh_teachers(
    client: &ApiClient,
    store: &mut DashboardStore,
) -> Result<(), ApiError> {
    let ticket = store.teachers.begin_load();
    let teachers = client.list_teachers().await?;
    store.teachers.complete_load(ticket, teachers);
    Ok(())
}

/// Reload the classroom cache from the server.
pub async fn refresh_classrooms(
    client: &ApiClient,
    store: &mut DashboardStore,
) -> Result<(), ApiError> {
    let ticket = store.classrooms.begin_load();
    let classrooms = client.list_classrooms().await?;
    store.classrooms.complete_load(ticket, classrooms);
    Ok(())
}

/// Load all three collections sequentially. The classroom-dependent counts
/// are only meaningful once every cache is populated.
pub async fn refresh_all(client: &ApiClient, store: &mut DashboardStore) -> Result<(), ApiError> {
    refresh_students(client, store).await?;
    refresh_teachers(client, store).await?;
    refresh_classrooms(client, store).await?;
    tracing::debug!(
        students = store.students.len(),
        teachers = store.teachers.len(),
        classrooms = store.classrooms.len(),
        "caches loaded"
    );
    Ok(())
}

// ---- students ----

pub async fn create_student(
    client: &ApiClient,
    store: &mut DashboardStore,
    student: &NewStudent,
) -> Result<Student, ApiError> {
    let created = client.create_student(student).await?;
    refresh_students(client, store).await?;
    Ok(created)
}

pub async fn update_student(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
    student: &NewStudent,
) -> Result<Student, ApiError> {
    let updated = client.update_student(id, student).await?;
    store.students.upsert(updated.clone());
    Ok(updated)
}

pub async fn delete_student(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
) -> Result<(), ApiError> {
    client.delete_student(id).await?;
    store.students.remove(id);
    Ok(())
}

// ---- teachers ----

pub async fn create_teacher(
    client: &ApiClient,
    store: &mut DashboardStore,
    teacher: &NewTeacher,
) -> Result<Teacher, ApiError> {
    let created = client.create_teacher(teacher).await?;
    refresh_teachers(client, store).await?;
    Ok(created)
}

pub async fn update_teacher(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
    teacher: &NewTeacher,
) -> Result<Teacher, ApiError> {
    let updated = client.update_teacher(id, teacher).await?;
    store.teachers.upsert(updated.clone());
    Ok(updated)
}

pub async fn delete_teacher(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
) -> Result<(), ApiError> {
    client.delete_teacher(id).await?;
    store.teachers.remove(id);
    Ok(())
}

// ---- classrooms ----

pub async fn create_classroom(
    client: &ApiClient,
    store: &mut DashboardStore,
    classroom: &NewClassroom,
) -> Result<Classroom, ApiError> {
    let created = client.create_classroom(classroom).await?;
    refresh_classrooms(client, store).await?;
    Ok(created)
}

pub async fn update_classroom(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
    classroom: &NewClassroom,
) -> Result<Classroom, ApiError> {
    let updated = client.update_classroom(id, classroom).await?;
    store.classrooms.upsert(updated.clone());
    Ok(updated)
}

pub async fn delete_classroom(
    client: &ApiClient,
    store: &mut DashboardStore,
    id: i64,
) -> Result<(), ApiError> {
    client.delete_classroom(id).await?;
    store.classrooms.remove(id);
    Ok(())
}
