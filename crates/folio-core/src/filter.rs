//! Category filter
//!
//! Stable filtering of the project list by a single label.

use crate::types::{Project, ALL_CATEGORY};

/// Projects listed under `label`, in repository order.
///
/// "All" returns the input unchanged; any other label returns every
/// project whose normalized category set contains it.
pub fn filter_by_category<'a>(projects: &'a [Project], label: &str) -> Vec<&'a Project> {
    if label == ALL_CATEGORY {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.categories.contains(label))
        .collect()
}

/// Whether the project with `id` is listed under `label`.
pub fn is_listed(projects: &[Project], label: &str, id: &crate::types::ProjectId) -> bool {
    projects.iter().any(|p| &p.id == id && p.matches(label))
}
