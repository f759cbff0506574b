//! Core types for Folio

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Sentinel filter label that matches every project.
pub const ALL_CATEGORY: &str = "All";

/// Unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The `category` field as it appears in supplied project data.
///
/// Data may carry a single label or a list of labels. Anything else
/// (numbers, objects, a missing field) lands in `Other` and normalizes
/// to an empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Single(String),
    Many(Vec<String>),
    Other(serde_json::Value),
}

impl Default for CategoryField {
    fn default() -> Self {
        CategoryField::Other(serde_json::Value::Null)
    }
}

impl From<&str> for CategoryField {
    fn from(label: &str) -> Self {
        CategoryField::Single(label.to_string())
    }
}

impl From<String> for CategoryField {
    fn from(label: String) -> Self {
        CategoryField::Single(label)
    }
}

impl From<Vec<String>> for CategoryField {
    fn from(labels: Vec<String>) -> Self {
        CategoryField::Many(labels)
    }
}

impl From<Vec<&str>> for CategoryField {
    fn from(labels: Vec<&str>) -> Self {
        CategoryField::Many(labels.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CategoryField {
    fn from(labels: [&str; N]) -> Self {
        CategoryField::Many(labels.iter().map(|l| l.to_string()).collect())
    }
}

/// Ordered set of unique category labels for one project.
///
/// Labels are trimmed, empty labels and the "All" sentinel are dropped,
/// and duplicates keep their first position. A well-formed project always
/// has at least one label; an empty set marks malformed category data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Build a set from raw labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || label == ALL_CATEGORY {
                continue;
            }
            if !out.iter().any(|l| l == label) {
                out.push(label.to_string());
            }
        }
        Self(out)
    }

    /// Normalize a raw category field.
    pub fn normalize(field: &CategoryField) -> Self {
        match field {
            CategoryField::Single(label) => Self::from_labels([label]),
            CategoryField::Many(labels) => Self::from_labels(labels),
            CategoryField::Other(_) => Self::default(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A project record as supplied from JSON, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: CategoryField,
    #[serde(default, alias = "primaryImage")]
    pub image: String,
    #[serde(default, alias = "alternateImage")]
    pub mobile_image: Option<String>,
    #[serde(default, alias = "codeLink")]
    pub github_url: Option<String>,
    #[serde(default, alias = "demoLink")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A validated, immutable project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub categories: CategorySet,
    /// Default (desktop) visual
    pub primary_image: String,
    /// Platform-alternate (mobile) visual
    pub alternate_image: Option<String>,
    pub code_link: Option<String>,
    pub demo_link: Option<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
}

impl Project {
    /// Create a project with the required fields.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<CategoryField>,
        primary_image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            categories: CategorySet::normalize(&category.into()),
            primary_image: primary_image.into(),
            alternate_image: None,
            code_link: None,
            demo_link: None,
            technologies: Vec::new(),
            featured: false,
        }
    }

    pub fn with_alternate_image(mut self, image: impl Into<String>) -> Self {
        self.alternate_image = Some(image.into());
        self
    }

    pub fn with_code_link(mut self, link: impl Into<String>) -> Self {
        self.code_link = Some(link.into());
        self
    }

    pub fn with_demo_link(mut self, link: impl Into<String>) -> Self {
        self.demo_link = Some(link.into());
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// True iff an alternate image is present and differs from the primary one.
    pub fn has_alternate(&self) -> bool {
        self.alternate_image
            .as_deref()
            .is_some_and(|alt| alt != self.primary_image)
    }

    /// Image to show for the given platform flag.
    ///
    /// Falls back to the primary image when there is no distinct alternate.
    pub fn image_for(&self, showing_alternate: bool) -> &str {
        match self.alternate_image.as_deref() {
            Some(alt) if showing_alternate && self.has_alternate() => alt,
            _ => &self.primary_image,
        }
    }

    /// Whether this project is listed under the given filter label.
    pub fn matches(&self, label: &str) -> bool {
        label == ALL_CATEGORY || self.categories.contains(label)
    }
}

fn required(id: &str, field: &str, value: String) -> FolioResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FolioError::InvalidProject {
            id: id.to_string(),
            reason: format!("{} must not be empty", field),
        });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<ProjectRecord> for Project {
    type Error = FolioError;

    fn try_from(record: ProjectRecord) -> FolioResult<Self> {
        let id = required(&record.id, "id", record.id.clone())?;
        let title = required(&id, "title", record.title)?;
        let description = required(&id, "description", record.description)?;
        let primary_image = required(&id, "image", record.image)?;

        let categories = CategorySet::normalize(&record.category);
        if categories.is_empty() {
            tracing::warn!(
                project = %id,
                category = ?record.category,
                "Malformed category, project will only appear under \"All\""
            );
        }

        Ok(Self {
            id: ProjectId(id),
            title,
            description,
            categories,
            primary_image,
            alternate_image: optional(record.mobile_image),
            code_link: optional(record.github_url),
            demo_link: optional(record.demo_url),
            technologies: record
                .technologies
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            featured: record.featured,
        })
    }
}
