//! Project Grid Component
//!
//! Category filter row above a grid of project cards, plus the detail
//! view when a project is open.

use dioxus::prelude::*;
use folio_core::ShowcaseEvent;
use folio_ui::CategoryPills;

use super::{ProjectCard, ProjectDetail};
use crate::context::{dispatch, use_showcase};

/// Whole showcase section.
///
/// Reads the view from context on every render; each gesture is a single
/// `dispatch`, so a render always reflects exactly one transition.
#[component]
pub fn ProjectShowcase() -> Element {
    let mut showcase = use_showcase();
    let view = showcase.read().view();

    let on_event = EventHandler::new(move |event: ShowcaseEvent| dispatch(&mut showcase, event));

    rsx! {
        div { class: "project-showcase",
            CategoryPills {
                filters: view.filters.clone(),
                show_counts: true,
                on_select: move |label: String| on_event.call(ShowcaseEvent::SelectCategory(label)),
            }

            if view.cards.is_empty() {
                div { class: "showcase-empty", "No projects in this category yet." }
            } else {
                div { class: "project-grid",
                    for card in view.cards.iter() {
                        ProjectCard {
                            key: "{card.id}",
                            card: card.clone(),
                            on_event: on_event,
                        }
                    }
                }
            }

            if let Some(detail) = view.detail.clone() {
                ProjectDetail {
                    detail: detail,
                    on_event: on_event,
                }
            }
        }
    }
}
