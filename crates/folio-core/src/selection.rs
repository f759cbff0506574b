//! Selection controller
//!
//! Tracks which single project is open in the detail view and owns the
//! detail view's alternate-platform flag.
//!
//! ```text
//! Closed --activate(p)--> Open(p)
//! Open(p1) --activate(p2)--> Open(p2)
//! Open(p) --close()--> Closed
//! ```
//!
//! Every `activate` resets the detail flag to the desktop image, so a
//! toggle made while viewing one project never leaks into the next.

use crate::error::{FolioError, FolioResult};
use crate::repository::ProjectRepository;
use crate::types::{Project, ProjectId};

/// Which project, if any, is open in the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(ProjectId),
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        match self {
            Selection::Open(id) => Some(id),
            Selection::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selection: Selection,
    detail_showing_alternate: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub fn detail_showing_alternate(&self) -> bool {
        self.detail_showing_alternate
    }

    /// Open `id` in the detail view, replacing any open project.
    ///
    /// Ids absent from the repository are rejected and leave the state
    /// untouched.
    pub fn activate(&mut self, repo: &ProjectRepository, id: &ProjectId) -> FolioResult<()> {
        if !repo.contains(id) {
            return Err(FolioError::ProjectNotFound(id.to_string()));
        }
        self.selection = Selection::Open(id.clone());
        self.detail_showing_alternate = false;
        tracing::debug!(project = %id, "Opened project detail");
        Ok(())
    }

    /// Dismiss the detail view.
    pub fn close(&mut self) -> FolioResult<()> {
        if !self.is_open() {
            return Err(FolioError::NothingOpen);
        }
        self.selection = Selection::Closed;
        self.detail_showing_alternate = false;
        tracing::debug!("Closed project detail");
        Ok(())
    }

    /// Flip the detail view's platform flag, returning the new value.
    pub fn toggle_detail_alternate(&mut self, repo: &ProjectRepository) -> FolioResult<bool> {
        let project = self.open_project(repo).ok_or(FolioError::NothingOpen)?;
        if !project.has_alternate() {
            return Err(FolioError::NoAlternateImage(project.id.to_string()));
        }
        self.detail_showing_alternate = !self.detail_showing_alternate;
        Ok(self.detail_showing_alternate)
    }

    /// The open project, looked up in `repo`.
    pub fn open_project<'a>(&self, repo: &'a ProjectRepository) -> Option<&'a Project> {
        self.selection.project_id().and_then(|id| repo.get(id))
    }
}
