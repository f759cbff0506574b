//! Folio Core Library
//!
//! The logic behind a portfolio project showcase: project records, the
//! category index, category filtering, the detail-view selection lifecycle
//! and per-card hover and platform-toggle state.
//!
//! ## Overview
//!
//! ```text
//! ProjectRepository ──> derive_categories ──> filter controls
//!        │
//!        └──(+ selected label)──> filter_by_category ──> cards
//!                                                          │
//!                                  card click ──> SelectionController ──> detail view
//! ```
//!
//! All mutable state lives in [`ShowcaseState`] and changes only through
//! [`ShowcaseEvent`]s, so the full lifecycle is testable without a UI.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{ProjectRepository, Showcase, ShowcaseEvent};
//!
//! let mut showcase = Showcase::new(ProjectRepository::default());
//! showcase.dispatch(ShowcaseEvent::SelectCategory("Mobile".into())).unwrap();
//! showcase.dispatch(ShowcaseEvent::Activate("2".into())).unwrap();
//!
//! let view = showcase.view();
//! assert_eq!(view.detail.unwrap().title, "Mobile Banking App");
//! ```

pub mod categories;
pub mod error;
pub mod filter;
pub mod interaction;
pub mod logging;
pub mod repository;
pub mod selection;
pub mod showcase;
pub mod types;
pub mod view;

// Re-exports
pub use categories::{derive_categories, CategoryIndex};
pub use error::{FolioError, FolioResult};
pub use filter::filter_by_category;
pub use interaction::{CardInteraction, CardStates};
pub use repository::{default_projects, ProjectRepository};
pub use selection::{Selection, SelectionController};
pub use showcase::{Showcase, ShowcaseEvent, ShowcaseState};
pub use types::*;
pub use view::{
    CardView, DetailView, FilterControl, LinkControls, Platform, ShowcaseView, ToggleControl,
};
