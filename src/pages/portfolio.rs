//! Portfolio page - the project showcase section.

use dioxus::prelude::*;

use crate::components::ProjectShowcase;

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        main { class: "portfolio",
            section { id: "projects", class: "projects-section",
                header { class: "section-header",
                    h2 { class: "section-title", "My Projects" }
                    p { class: "section-subtitle",
                        "Explore my recent work across web development, mobile applications, and design systems."
                    }
                }
                ProjectShowcase {}
            }
        }
    }
}
