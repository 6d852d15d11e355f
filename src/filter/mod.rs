//! Filter engine deriving display views from the caches.
//!
//! Filters borrow from the cache and preserve its iteration order; they never
//! mutate it. Selector strings come from a constrained UI control, so an
//! unknown value falls back to showing everything rather than erroring.

use crate::index::DashboardIndex;
use crate::models::{Classroom, Student, Teacher};
use crate::store::EntityCache;

/// Student view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentFilter {
    #[default]
    All,
    Enrolled,
    NotEnrolled,
}

impl StudentFilter {
    pub fn from_selector(s: &str) -> Self {
        match s {
            "enrolled" => Self::Enrolled,
            "not_enrolled" => Self::NotEnrolled,
            _ => Self::All,
        }
    }
}

/// Teacher view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeacherFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

impl TeacherFilter {
    pub fn from_selector(s: &str) -> Self {
        match s {
            "assigned" => Self::Assigned,
            "unassigned" => Self::Unassigned,
            _ => Self::All,
        }
    }
}

/// Classroom view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassroomFilter {
    #[default]
    All,
    Full,
    Almost,
    Available,
}

impl ClassroomFilter {
    pub fn from_selector(s: &str) -> Self {
        match s {
            "full" => Self::Full,
            "almost" => Self::Almost,
            "available" => Self::Available,
            _ => Self::All,
        }
    }
}

/// Occupancy status of a classroom given its current student count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Full,
    AlmostFull,
    Available,
}

impl Occupancy {
    /// Full at or above capacity, almost-full from 80% of capacity up, else
    /// available. Computed in integers: `count >= 0.8 * capacity` is
    /// `5 * count >= 4 * capacity`.
    pub fn of(count: u32, capacity: u32) -> Self {
        if count >= capacity {
            Self::Full
        } else if 5 * count as u64 >= 4 * capacity as u64 {
            Self::AlmostFull
        } else {
            Self::Available
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::AlmostFull => "ALMOST FULL",
            Self::Available => "AVAILABLE",
        }
    }
}

/// Students matching the selector, in cache order.
pub fn filter_students(cache: &EntityCache<Student>, filter: StudentFilter) -> Vec<&Student> {
    cache
        .iter()
        .filter(|s| match filter {
            StudentFilter::All => true,
            StudentFilter::Enrolled => s.is_enrolled,
            StudentFilter::NotEnrolled => !s.is_enrolled,
        })
        .collect()
}

/// Teachers matching the selector, in cache order. A teacher is assigned when
/// at least one cached classroom references them.
pub fn filter_teachers<'a>(
    cache: &'a EntityCache<Teacher>,
    index: &DashboardIndex,
    filter: TeacherFilter,
) -> Vec<&'a Teacher> {
    cache
        .iter()
        .filter(|t| match filter {
            TeacherFilter::All => true,
            TeacherFilter::Assigned => index.classroom_count(t.id) > 0,
            TeacherFilter::Unassigned => index.classroom_count(t.id) == 0,
        })
        .collect()
}

/// Classrooms matching the selector, in cache order.
pub fn filter_classrooms<'a>(
    cache: &'a EntityCache<Classroom>,
    index: &DashboardIndex,
    filter: ClassroomFilter,
) -> Vec<&'a Classroom> {
    cache
        .iter()
        .filter(|c| {
            let status = Occupancy::of(index.student_count(c.id), c.capacity);
            match filter {
                ClassroomFilter::All => true,
                ClassroomFilter::Full => status == Occupancy::Full,
                ClassroomFilter::Almost => status == Occupancy::AlmostFull,
                ClassroomFilter::Available => status == Occupancy::Available,
            }
        })
        .collect()
}
