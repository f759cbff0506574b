//! Render instructions
//!
//! Flat, owned snapshots of what the presentation layer should draw for
//! the current showcase state. Controls that do not apply (a toggle for a
//! project without an alternate image, a missing link) are `None` rather
//! than disabled.

use crate::categories::CategoryIndex;
use crate::repository::ProjectRepository;
use crate::showcase::ShowcaseState;
use crate::types::{Project, ProjectId};

/// Which image a card or the detail view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Alternate,
}

impl Platform {
    pub fn from_flag(showing_alternate: bool) -> Self {
        if showing_alternate {
            Platform::Alternate
        } else {
            Platform::Desktop
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Desktop => "Desktop",
            Platform::Alternate => "Mobile",
        }
    }

    /// The platform the toggle switches to.
    pub fn other(&self) -> Self {
        match self {
            Platform::Desktop => Platform::Alternate,
            Platform::Alternate => Platform::Desktop,
        }
    }
}

/// One filter pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Platform toggle control, present only for projects with an alternate image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    pub showing: Platform,
}

impl ToggleControl {
    fn for_project(project: &Project, showing_alternate: bool) -> Option<Self> {
        project.has_alternate().then(|| ToggleControl {
            showing: Platform::from_flag(showing_alternate),
        })
    }
}

/// External links of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkControls {
    pub code: Option<String>,
    pub demo: Option<String>,
}

impl LinkControls {
    fn for_project(project: &Project) -> Self {
        Self {
            code: project.code_link.clone(),
            demo: project.demo_link.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.demo.is_none()
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub image: String,
    pub hovered: bool,
    pub toggle: Option<ToggleControl>,
    pub links: LinkControls,
}

/// The open project's detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub image: String,
    pub toggle: Option<ToggleControl>,
    pub links: LinkControls,
}

/// Everything the presentation layer draws for the showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseView {
    pub filters: Vec<FilterControl>,
    pub cards: Vec<CardView>,
    pub detail: Option<DetailView>,
}

impl ShowcaseView {
    pub fn build(
        repo: &ProjectRepository,
        categories: &CategoryIndex,
        state: &ShowcaseState,
    ) -> Self {
        let filters = categories
            .iter()
            .map(|label| FilterControl {
                label: label.to_string(),
                count: categories.count(label),
                selected: label == state.selected_category(),
            })
            .collect();

        let cards = state
            .visible(repo)
            .into_iter()
            .map(|project| {
                let slot = state.cards().get(&project.id);
                CardView {
                    id: project.id.clone(),
                    title: project.title.clone(),
                    description: project.description.clone(),
                    categories: project.categories.labels().to_vec(),
                    technologies: project.technologies.clone(),
                    featured: project.featured,
                    image: project.image_for(slot.showing_alternate).to_string(),
                    hovered: slot.hovered,
                    toggle: ToggleControl::for_project(project, slot.showing_alternate),
                    links: LinkControls::for_project(project),
                }
            })
            .collect();

        let detail = state.open_project(repo).map(|project| {
            let alt = state.detail_showing_alternate();
            DetailView {
                id: project.id.clone(),
                title: project.title.clone(),
                description: project.description.clone(),
                categories: project.categories.labels().to_vec(),
                technologies: project.technologies.clone(),
                image: project.image_for(alt).to_string(),
                toggle: ToggleControl::for_project(project, alt),
                links: LinkControls::for_project(project),
            }
        });

        Self {
            filters,
            cards,
            detail,
        }
    }

    pub fn card(&self, id: &ProjectId) -> Option<&CardView> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn selected_filter(&self) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.selected)
            .map(|f| f.label.as_str())
    }
}
