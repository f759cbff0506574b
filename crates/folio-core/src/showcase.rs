//! Showcase state container
//!
//! One record holds every piece of mutable showcase state: the selected
//! filter label, the selection controller and the per-card slots. It is
//! changed only through [`ShowcaseState::apply`], one event at a time, so
//! the whole lifecycle can be driven without any UI.

use crate::categories::{derive_categories, CategoryIndex};
use crate::error::{FolioError, FolioResult};
use crate::filter::{filter_by_category, is_listed};
use crate::interaction::CardStates;
use crate::repository::ProjectRepository;
use crate::selection::{Selection, SelectionController};
use crate::types::{Project, ProjectId, ALL_CATEGORY};
use crate::view::ShowcaseView;

/// A single user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    /// Filter control clicked
    SelectCategory(String),
    /// Card clicked
    Activate(ProjectId),
    /// Overlay background or close control clicked
    Close,
    /// Platform toggle on a card clicked
    ToggleCardAlternate(ProjectId),
    /// Platform toggle inside the detail view clicked
    ToggleDetailAlternate,
    PointerEnter(ProjectId),
    PointerLeave(ProjectId),
}

impl ShowcaseEvent {
    fn name(&self) -> &'static str {
        match self {
            ShowcaseEvent::SelectCategory(_) => "select_category",
            ShowcaseEvent::Activate(_) => "activate",
            ShowcaseEvent::Close => "close",
            ShowcaseEvent::ToggleCardAlternate(_) => "toggle_card_alternate",
            ShowcaseEvent::ToggleDetailAlternate => "toggle_detail_alternate",
            ShowcaseEvent::PointerEnter(_) => "pointer_enter",
            ShowcaseEvent::PointerLeave(_) => "pointer_leave",
        }
    }
}

/// All mutable showcase state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseState {
    selected_category: String,
    selection: SelectionController,
    cards: CardStates,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORY.to_string(),
            selection: SelectionController::default(),
            cards: CardStates::default(),
        }
    }
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn detail_showing_alternate(&self) -> bool {
        self.selection.detail_showing_alternate()
    }

    pub fn cards(&self) -> &CardStates {
        &self.cards
    }

    /// Projects rendered under the current filter.
    pub fn visible<'a>(&self, repo: &'a ProjectRepository) -> Vec<&'a Project> {
        filter_by_category(repo.projects(), &self.selected_category)
    }

    /// The project open in the detail view.
    pub fn open_project<'a>(&self, repo: &'a ProjectRepository) -> Option<&'a Project> {
        self.selection.open_project(repo)
    }

    /// Apply one event in place.
    ///
    /// On `Err` the state is exactly what it was before the call.
    pub fn apply(
        &mut self,
        repo: &ProjectRepository,
        categories: &CategoryIndex,
        event: &ShowcaseEvent,
    ) -> FolioResult<()> {
        match event {
            ShowcaseEvent::SelectCategory(label) => {
                if !categories.contains(label) {
                    return Err(FolioError::UnknownCategory(label.clone()));
                }
                if *label != self.selected_category {
                    self.selected_category = label.clone();
                    self.cards.clear();
                    tracing::debug!(label = %label, "Category selected");
                }
                Ok(())
            }
            ShowcaseEvent::Activate(id) => self.selection.activate(repo, id),
            ShowcaseEvent::Close => self.selection.close(),
            ShowcaseEvent::ToggleCardAlternate(id) => {
                let project = self.rendered_card(repo, id)?;
                if !project.has_alternate() {
                    return Err(FolioError::NoAlternateImage(id.to_string()));
                }
                self.cards.toggle_alternate(id);
                Ok(())
            }
            ShowcaseEvent::ToggleDetailAlternate => {
                self.selection.toggle_detail_alternate(repo).map(|_| ())
            }
            ShowcaseEvent::PointerEnter(id) => {
                self.rendered_card(repo, id)?;
                self.cards.pointer_enter(id);
                Ok(())
            }
            ShowcaseEvent::PointerLeave(id) => {
                self.rendered_card(repo, id)?;
                self.cards.pointer_leave(id);
                Ok(())
            }
        }
    }

    /// Pure transition: the state after `event`.
    ///
    /// Rejected events are logged and yield an unchanged copy.
    pub fn next(
        &self,
        repo: &ProjectRepository,
        categories: &CategoryIndex,
        event: &ShowcaseEvent,
    ) -> ShowcaseState {
        let mut next = self.clone();
        if let Err(e) = next.apply(repo, categories, event) {
            tracing::warn!(event = event.name(), error = %e, "Ignoring showcase event");
            return self.clone();
        }
        next
    }

    fn rendered_card<'a>(
        &self,
        repo: &'a ProjectRepository,
        id: &ProjectId,
    ) -> FolioResult<&'a Project> {
        let project = repo
            .get(id)
            .ok_or_else(|| FolioError::ProjectNotFound(id.to_string()))?;
        if !is_listed(repo.projects(), &self.selected_category, id) {
            return Err(FolioError::CardNotRendered(id.to_string()));
        }
        Ok(project)
    }
}

/// Repository, derived category index and state in one place.
///
/// The index is derived once, when the repository is handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    repository: ProjectRepository,
    categories: CategoryIndex,
    state: ShowcaseState,
}

impl Showcase {
    pub fn new(repository: ProjectRepository) -> Self {
        let categories = derive_categories(repository.projects());
        tracing::info!(
            projects = repository.len(),
            categories = categories.len(),
            "Showcase ready"
        );
        Self {
            repository,
            categories,
            state: ShowcaseState::default(),
        }
    }

    pub fn repository(&self) -> &ProjectRepository {
        &self.repository
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    /// Apply one event; on `Err` nothing changes.
    pub fn dispatch(&mut self, event: ShowcaseEvent) -> FolioResult<()> {
        self.state.apply(&self.repository, &self.categories, &event)
    }

    /// Render instructions for the current state.
    pub fn view(&self) -> ShowcaseView {
        ShowcaseView::build(&self.repository, &self.categories, &self.state)
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(ProjectRepository::default())
    }
}
