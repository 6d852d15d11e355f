//! Derived aggregate counts over the entity caches.
//!
//! Indexes are a pure function of the current cache contents and are rebuilt
//! from scratch on every call. At dashboard scale (tens to low thousands of
//! rows) the O(n) pass is cheaper than getting incremental maintenance right.

use std::collections::HashMap;

use crate::store::DashboardStore;

/// Aggregate counts derived from the caches.
///
/// Counts attribute to whatever identifier an entity references, even if that
/// identifier is absent from the current cache; no referential integrity is
/// enforced client-side.
#[derive(Debug, Default)]
pub struct DashboardIndex {
    /// Number of students referencing each classroom id.
    pub students_per_classroom: HashMap<i64, u32>,
    /// Number of classrooms referencing each teacher id.
    pub classrooms_per_teacher: HashMap<i64, u32>,
}

impl DashboardIndex {
    /// Recompute both indexes from the store's current contents.
    pub fn build(store: &DashboardStore) -> Self {
        let mut students_per_classroom: HashMap<i64, u32> = HashMap::new();
        for s in store.students.iter() {
            *students_per_classroom.entry(s.classroom_id).or_default() += 1;
        }

        let mut classrooms_per_teacher: HashMap<i64, u32> = HashMap::new();
        for c in store.classrooms.iter() {
            if let Some(teacher_id) = c.teacher_id {
                *classrooms_per_teacher.entry(teacher_id).or_default() += 1;
            }
        }

        Self {
            students_per_classroom,
            classrooms_per_teacher,
        }
    }

    /// Students counted for a classroom id, zero when none.
    pub fn student_count(&self, classroom_id: i64) -> u32 {
        self.students_per_classroom
            .get(&classroom_id)
            .copied()
            .unwrap_or(0)
    }

    /// Classrooms counted for a teacher id, zero when none.
    pub fn classroom_count(&self, teacher_id: i64) -> u32 {
        self.classrooms_per_teacher
            .get(&teacher_id)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Student};

    fn student(id: i64, classroom_id: i64) -> Student {
        Student {
            id,
            name: format!("Student {id}"),
            age: 10,
            is_enrolled: true,
            classroom_id,
        }
    }

    fn classroom(id: i64, teacher_id: Option<i64>) -> Classroom {
        Classroom {
            id,
            name: format!("Room {id}"),
            grade: 5,
            capacity: 20,
            teacher_id,
        }
    }

    #[test]
    fn counts_students_per_classroom() {
        let mut store = DashboardStore::new();
        store
            .students
            .set(vec![student(1, 1), student(2, 1), student(3, 2)]);

        let idx = DashboardIndex::build(&store);
        assert_eq!(idx.student_count(1), 2);
        assert_eq!(idx.student_count(2), 1);
        assert_eq!(idx.student_count(3), 0);
    }

    #[test]
    fn counts_classrooms_per_teacher() {
        let mut store = DashboardStore::new();
        store.classrooms.set(vec![
            classroom(1, Some(5)),
            classroom(2, Some(5)),
            classroom(3, None),
        ]);

        let idx = DashboardIndex::build(&store);
        assert_eq!(idx.classroom_count(5), 2);
        assert_eq!(idx.classroom_count(6), 0);
        // unassigned classrooms contribute to no teacher
        assert_eq!(idx.classrooms_per_teacher.len(), 1);
    }

    #[test]
    fn counts_attribute_to_uncached_references() {
        // classroom 77 is not in the classroom cache, the count still lands
        let mut store = DashboardStore::new();
        store.students.set(vec![student(1, 77)]);

        let idx = DashboardIndex::build(&store);
        assert_eq!(idx.student_count(77), 1);
    }

    #[test]
    fn empty_store_yields_empty_indexes() {
        let idx = DashboardIndex::build(&DashboardStore::new());
        assert!(idx.students_per_classroom.is_empty());
        assert!(idx.classrooms_per_teacher.is_empty());
    }

    #[test]
    fn rebuild_reflects_cache_changes() {
        let mut store = DashboardStore::new();
        store.students.set(vec![student(1, 1)]);
        let idx = DashboardIndex::build(&store);
        assert_eq!(idx.student_count(1), 1);

        store.students.remove(1);
        let idx = DashboardIndex::build(&store);
        assert_eq!(idx.student_count(1), 0);
    }
}
