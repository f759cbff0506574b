//! Showcase context provider for Folio.
//!
//! The root component owns a single `Signal<Showcase>`; every showcase
//! component reads render instructions from it and sends gestures back
//! through [`dispatch`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut showcase = use_showcase();
//! let view = showcase.read().view();
//!
//! // In an event handler
//! dispatch(&mut showcase, ShowcaseEvent::Close);
//! ```

use dioxus::prelude::*;
use folio_core::{ProjectRepository, Showcase, ShowcaseEvent};

/// Get the projects loaded at startup.
pub fn get_projects() -> ProjectRepository {
    crate::get_projects()
}

/// Hook to access the showcase from context.
pub fn use_showcase() -> Signal<Showcase> {
    use_context::<Signal<Showcase>>()
}

/// Apply one gesture to the showcase.
///
/// Rejected gestures leave the showcase untouched and are only logged.
pub fn dispatch(showcase: &mut Signal<Showcase>, event: ShowcaseEvent) {
    tracing::trace!(?event, "Showcase event");
    if let Err(e) = showcase.write().dispatch(event) {
        tracing::warn!("Ignoring showcase event: {}", e);
    }
}
