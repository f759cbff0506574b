//! Project Detail Component
//!
//! Modal view of the open project. Clicking the backdrop or the close
//! button dismisses it, as does Escape; clicks inside the content stay
//! inside. The dialog takes focus when it opens.

use dioxus::prelude::*;
use folio_core::{DetailView, ShowcaseEvent};
use folio_ui::{ButtonVariant, CloseButton, LinkButton, PlatformToggle};

#[component]
pub fn ProjectDetail(detail: DetailView, on_event: EventHandler<ShowcaseEvent>) -> Element {
    let close = move |_| on_event.call(ShowcaseEvent::Close);
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            on_event.call(ShowcaseEvent::Close);
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: close,
            onkeydown: on_keydown,

            div {
                class: "project-detail",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "project-detail-title",
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!(error = ?e, "Could not focus project detail");
                    }
                },
                onclick: move |e| e.stop_propagation(),

                div { class: "project-detail__header",
                    h2 { id: "project-detail-title", class: "modal-title", "{detail.title}" }
                    CloseButton { onclick: move |_| on_event.call(ShowcaseEvent::Close) }
                }

                div { class: "project-detail__media",
                    img {
                        class: "project-detail__image",
                        src: "{detail.image}",
                        alt: "{detail.title}",
                    }
                    if let Some(control) = detail.toggle {
                        PlatformToggle {
                            control: control,
                            on_toggle: move |_| on_event.call(ShowcaseEvent::ToggleDetailAlternate),
                        }
                    }
                }

                div { class: "project-detail__categories",
                    for label in detail.categories.iter() {
                        span { key: "{label}", class: "badge", "{label}" }
                    }
                }

                p { class: "project-detail__description", "{detail.description}" }

                if !detail.technologies.is_empty() {
                    div { class: "project-detail__tech",
                        for tech in detail.technologies.iter() {
                            span { key: "{tech}", class: "badge badge--outline", "{tech}" }
                        }
                    }
                }

                if !detail.links.is_empty() {
                    div { class: "modal-actions",
                        if let Some(demo) = detail.links.demo.clone() {
                            LinkButton { href: demo, variant: ButtonVariant::Primary, "Live Demo" }
                        }
                        if let Some(code) = detail.links.code.clone() {
                            LinkButton { href: code, variant: ButtonVariant::Outline, "Code" }
                        }
                    }
                }
            }
        }
    }
}
