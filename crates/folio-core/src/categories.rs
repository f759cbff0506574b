//! Category index derivation
//!
//! Flattens every project's category set into the ordered list of filter
//! labels, "All" first, then each distinct label in first-appearance order.

use std::collections::HashSet;

use crate::types::{Project, ALL_CATEGORY};

/// Ordered, deduplicated filter labels, always starting with "All".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    labels: Vec<String>,
    counts: Vec<usize>,
}

impl CategoryIndex {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Number of projects listed under `label` ("All" counts every project).
    pub fn count(&self, label: &str) -> usize {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.counts[i])
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true: "All" is always present.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Derive the category index from the full project list.
pub fn derive_categories(projects: &[Project]) -> CategoryIndex {
    let mut labels = vec![ALL_CATEGORY.to_string()];
    let mut counts = vec![projects.len()];
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_CATEGORY);

    for label in projects.iter().flat_map(|p| p.categories.iter()) {
        if seen.insert(label) {
            labels.push(label.to_string());
            counts.push(1);
        } else if let Some(i) = labels.iter().position(|l| l == label) {
            counts[i] += 1;
        }
    }

    CategoryIndex { labels, counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: impl Into<crate::types::CategoryField>) -> Project {
        Project::new(id, "title", "description", category, "image.png")
    }

    #[test]
    fn test_all_first_then_first_appearance_order() {
        let projects = vec![
            project("1", "Mobile"),
            project("2", ["Mobile", "Web Development"]),
            project("3", "Design"),
        ];
        let index = derive_categories(&projects);
        assert_eq!(index.labels(), &["All", "Mobile", "Web Development", "Design"]);
    }

    #[test]
    fn test_empty_repository_yields_only_all() {
        let index = derive_categories(&[]);
        assert_eq!(index.labels(), &["All"]);
        assert_eq!(index.count("All"), 0);
    }

    #[test]
    fn test_counts_per_label() {
        let projects = vec![
            project("1", "Mobile"),
            project("2", ["Mobile", "Web Development"]),
            project("3", "Design"),
        ];
        let index = derive_categories(&projects);
        assert_eq!(index.count("All"), 3);
        assert_eq!(index.count("Mobile"), 2);
        assert_eq!(index.count("Web Development"), 1);
        assert_eq!(index.count("Nope"), 0);
    }

    #[test]
    fn test_explicit_all_label_not_duplicated() {
        let projects = vec![project("1", ["All", "Design"])];
        let index = derive_categories(&projects);
        assert_eq!(index.labels(), &["All", "Design"]);
    }

    #[test]
    fn test_malformed_project_contributes_no_labels() {
        let projects = vec![
            project("1", crate::types::CategoryField::default()),
            project("2", "Design"),
        ];
        let index = derive_categories(&projects);
        assert_eq!(index.labels(), &["All", "Design"]);
        assert_eq!(index.count("All"), 2);
    }
}
