//! Project repository
//!
//! An ordered, immutable collection of projects. Built once at load time
//! from caller-supplied data, or from the built-in default set.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{FolioError, FolioResult};
use crate::types::{Project, ProjectId, ProjectRecord};

/// Ordered sequence of projects with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRepository {
    projects: Vec<Project>,
}

impl ProjectRepository {
    /// Build a repository, rejecting duplicate ids.
    pub fn new(projects: Vec<Project>) -> FolioResult<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.clone()) {
                return Err(FolioError::DuplicateProject(project.id.to_string()));
            }
        }
        Ok(Self { projects })
    }

    /// Validate raw records, failing on the first invalid or duplicate one.
    pub fn from_records(records: Vec<ProjectRecord>) -> FolioResult<Self> {
        let projects = records
            .into_iter()
            .map(Project::try_from)
            .collect::<FolioResult<Vec<_>>>()?;
        Self::new(projects)
    }

    /// Validate raw records, skipping the ones that fail.
    pub fn from_records_lossy(records: Vec<ProjectRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(records.len());

        for record in records {
            match Project::try_from(record) {
                Ok(project) => {
                    if seen.insert(project.id.clone()) {
                        projects.push(project);
                    } else {
                        tracing::warn!(project = %project.id, "Skipping duplicate project id");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid project record");
                }
            }
        }

        Self { projects }
    }

    /// Parse a JSON array of project records (lossy validation).
    ///
    /// Only a malformed document or a non-array top level is an error;
    /// records of the wrong shape are skipped like invalid ones.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let records = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                match serde_json::from_value::<ProjectRecord>(value) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Skipping malformed project record");
                        None
                    }
                }
            })
            .collect();
        Ok(Self::from_records_lossy(records))
    }

    /// Load a JSON array of project records from disk.
    pub fn load_json(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let repo = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), count = repo.len(), "Loaded projects");
        Ok(repo)
    }

    /// Use the supplied projects, or the built-in set when none are supplied.
    pub fn supplied_or_default(supplied: Option<Self>) -> Self {
        match supplied {
            Some(repo) if !repo.is_empty() => repo,
            _ => Self::default(),
        }
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectRepository {
    fn default() -> Self {
        Self {
            projects: default_projects(),
        }
    }
}

impl<'a> IntoIterator for &'a ProjectRepository {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

const UNSPLASH: &str = "https://images.unsplash.com";

/// Built-in projects shown when no data is supplied.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "1",
            "E-Commerce Website",
            "A fully responsive e-commerce platform built with React and Node.js",
            "Web Development",
            format!("{UNSPLASH}/photo-1661956602116-aa6865609028?w=800&q=80"),
        )
        .with_alternate_image(format!("{UNSPLASH}/photo-1556742049-0cfed4f6a45d?w=400&q=80"))
        .with_technologies(["React", "Node.js", "Tailwind"])
        .with_demo_link("https://example.com")
        .with_code_link("https://github.com")
        .featured(),
        Project::new(
            "2",
            "Mobile Banking App",
            "A secure and intuitive banking application for iOS and Android",
            ["Mobile", "Web Development"],
            format!("{UNSPLASH}/photo-1563986768609-322da13575f3?w=800&q=80"),
        )
        .with_alternate_image(format!("{UNSPLASH}/photo-1512941937669-90a1b58e7e9c?w=400&q=80"))
        .with_technologies(["React Native", "TypeScript"])
        .with_demo_link("https://example.com")
        .with_code_link("https://github.com"),
        Project::new(
            "3",
            "Portfolio Design System",
            "A comprehensive design system with reusable components",
            "Design",
            format!("{UNSPLASH}/photo-1634942537034-2531766767d1?w=800&q=80"),
        )
        .with_technologies(["Figma", "Storybook"])
        .with_code_link("https://github.com"),
        Project::new(
            "4",
            "Task Management Dashboard",
            "A productivity tool for teams to manage projects and tasks",
            "Web Development",
            format!("{UNSPLASH}/photo-1531403009284-440f080d1e12?w=800&q=80"),
        )
        .with_technologies(["Next.js", "PostgreSQL"])
        .with_demo_link("https://example.com")
        .with_code_link("https://github.com"),
        Project::new(
            "5",
            "Fitness Tracking App",
            "A mobile application to track workouts and nutrition",
            "Mobile",
            format!("{UNSPLASH}/photo-1576678927484-cc907957088c?w=800&q=80"),
        )
        .with_alternate_image(format!("{UNSPLASH}/photo-1576678927484-cc907957088c?w=400&q=80"))
        .with_technologies(["Flutter"])
        .with_demo_link("https://example.com"),
        Project::new(
            "6",
            "Brand Identity Package",
            "A complete brand identity design for a startup company",
            "Design",
            format!("{UNSPLASH}/photo-1634942537034-2531766767d1?w=800&q=80"),
        )
        .with_technologies(["Illustrator", "Figma"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_has_unique_ids() {
        let repo = ProjectRepository::default();
        assert_eq!(repo.len(), 6);
        assert!(ProjectRepository::new(default_projects()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let projects = vec![
            Project::new("1", "a", "d", "Web", "a.png"),
            Project::new("1", "b", "d", "Web", "b.png"),
        ];
        let err = ProjectRepository::new(projects).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateProject(id) if id == "1"));
    }

    #[test]
    fn test_lossy_json_skips_bad_records() {
        let json = r#"[
            {"id":"1","title":"Shop","description":"d","category":"Web","image":"a.png"},
            {"id":"2","title":"","description":"d","category":"Web","image":"b.png"},
            {"id":"1","title":"Again","description":"d","category":"Web","image":"c.png"},
            {"id":"3","title":"Odd","description":"d","category":{"x":1},"image":"d.png"},
            {"id":"4","title":"Loud","description":"d","category":"Web","image":"e.png","featured":"yes"},
            {"id":5,"title":"Numbered","description":"d","category":"Web","image":"f.png"},
            {"id":"6","title":"Stack","description":"d","category":"Web","image":"g.png","technologies":"React"}
        ]"#;
        let repo = ProjectRepository::from_json_str(json).unwrap();
        let ids: Vec<_> = repo.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(repo.get(&ProjectId::from("3")).unwrap().categories.is_empty());
    }

    #[test]
    fn test_strict_records_fail_on_invalid() {
        let records: Vec<ProjectRecord> = serde_json::from_str(
            r#"[{"id":"1","title":"","description":"d","category":"Web","image":"a.png"}]"#,
        )
        .unwrap();
        assert!(ProjectRepository::from_records(records).is_err());
    }

    #[test]
    fn test_wrong_typed_record_keeps_valid_ones() {
        let json = r#"[
            {"id":"1","title":"Shop","description":"d","category":"Web","image":"a.png"},
            {"id":"2","title":"Blog","description":"d","category":"Web","image":"b.png","featured":"yes"}
        ]"#;
        let repo = ProjectRepository::from_json_str(json).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.contains(&ProjectId::from("1")));
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        let err = ProjectRepository::from_json_str(r#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = ProjectRepository::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn test_supplied_or_default() {
        let empty = ProjectRepository::new(Vec::new()).unwrap();
        assert_eq!(ProjectRepository::supplied_or_default(Some(empty)).len(), 6);
        assert_eq!(ProjectRepository::supplied_or_default(None).len(), 6);

        let one = ProjectRepository::new(vec![Project::new("x", "t", "d", "Web", "a.png")]).unwrap();
        assert_eq!(ProjectRepository::supplied_or_default(Some(one)).len(), 1);
    }

    #[test]
    fn test_load_json_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"id":"1","title":"Shop","description":"d","category":["Web","Mobile"],"image":"a.png"}]"#,
        )
        .unwrap();

        let repo = ProjectRepository::load_json(&path).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(ProjectRepository::load_json(dir.path().join("missing.json")).is_err());
    }
}
