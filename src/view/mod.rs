//! Rendering of filtered views as text.
//!
//! One rendering strategy parameterized by [`RenderStyle`] instead of two
//! near-identical dashboards. These functions are pure string builders; all
//! I/O stays in `main`.

use crate::filter::Occupancy;
use crate::index::DashboardIndex;
use crate::models::{Classroom, Student, Teacher};

/// How a section is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// One line per entity, like the list dashboard.
    List,
    /// Header row plus aligned columns.
    Table,
}

fn join_rows(header: Option<String>, rows: Vec<String>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{empty}\n");
    }
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(&header);
        out.push('\n');
    }
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Render a filtered student view.
pub fn render_students(students: &[&Student], style: RenderStyle) -> String {
    match style {
        RenderStyle::List => join_rows(
            None,
            students
                .iter()
                .map(|s| {
                    format!(
                        "#{} {} (age {}) classroom_id={} enrolled={}",
                        s.id, s.name, s.age, s.classroom_id, s.is_enrolled
                    )
                })
                .collect(),
            "No students yet.",
        ),
        RenderStyle::Table => join_rows(
            Some(format!(
                "{:<6} {:<24} {:>4} {:>10} {:>9}",
                "id", "name", "age", "classroom", "enrolled"
            )),
            students
                .iter()
                .map(|s| {
                    format!(
                        "{:<6} {:<24} {:>4} {:>10} {:>9}",
                        s.id, s.name, s.age, s.classroom_id, s.is_enrolled
                    )
                })
                .collect(),
            "No students yet.",
        ),
    }
}

fn teacher_badge(index: &DashboardIndex, teacher_id: i64) -> String {
    let count = index.classroom_count(teacher_id);
    if count > 0 {
        format!("assigned({count})")
    } else {
        "unassigned".to_string()
    }
}

/// Render a filtered teacher view with an assignment badge per row.
pub fn render_teachers(teachers: &[&Teacher], index: &DashboardIndex, style: RenderStyle) -> String {
    match style {
        RenderStyle::List => join_rows(
            None,
            teachers
                .iter()
                .map(|t| {
                    format!(
                        "#{} {} ({}) {}",
                        t.id,
                        t.name,
                        t.email,
                        teacher_badge(index, t.id)
                    )
                })
                .collect(),
            "No teachers yet.",
        ),
        RenderStyle::Table => join_rows(
            Some(format!(
                "{:<6} {:<24} {:<28} {:<12}",
                "id", "name", "email", "status"
            )),
            teachers
                .iter()
                .map(|t| {
                    format!(
                        "{:<6} {:<24} {:<28} {:<12}",
                        t.id,
                        t.name,
                        t.email,
                        teacher_badge(index, t.id)
                    )
                })
                .collect(),
            "No teachers yet.",
        ),
    }
}

/// Render a filtered classroom view with student count and occupancy status.
pub fn render_classrooms(
    classrooms: &[&Classroom],
    index: &DashboardIndex,
    style: RenderStyle,
) -> String {
    match style {
        RenderStyle::List => join_rows(
            None,
            classrooms
                .iter()
                .map(|c| {
                    let count = index.student_count(c.id);
                    format!(
                        "#{} {} grade={} capacity={} teacher_id={} students={} -> {}",
                        c.id,
                        c.name,
                        c.grade,
                        c.capacity,
                        c.teacher_id.map_or("none".to_string(), |t| t.to_string()),
                        count,
                        Occupancy::of(count, c.capacity).label()
                    )
                })
                .collect(),
            "No classrooms yet.",
        ),
        RenderStyle::Table => join_rows(
            Some(format!(
                "{:<6} {:<18} {:>5} {:>8} {:>8} {:>8}  {:<12}",
                "id", "name", "grade", "capacity", "teacher", "students", "status"
            )),
            classrooms
                .iter()
                .map(|c| {
                    let count = index.student_count(c.id);
                    format!(
                        "{:<6} {:<18} {:>5} {:>8} {:>8} {:>8}  {:<12}",
                        c.id,
                        c.name,
                        c.grade,
                        c.capacity,
                        c.teacher_id.map_or("none".to_string(), |t| t.to_string()),
                        count,
                        Occupancy::of(count, c.capacity).label()
                    )
                })
                .collect(),
            "No classrooms yet.",
        ),
    }
}
