//! Project Card Component
//!
//! One project in the grid. Hovering reveals an overlay with the external
//! links; the platform toggle switches the card image between desktop and
//! mobile without opening the detail view.

use dioxus::prelude::*;
use folio_core::{CardView, ShowcaseEvent};
use folio_ui::{is_activation_key, ButtonVariant, LinkButton, PlatformToggle};

/// Project card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         card: view.cards[0].clone(),
///         on_event: move |event| dispatch(&mut showcase, event),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Render instructions for this card
    card: CardView,
    /// Receives every gesture made on the card
    on_event: EventHandler<ShowcaseEvent>,
) -> Element {
    let id = card.id.clone();
    let activate = {
        let id = id.clone();
        move |_| on_event.call(ShowcaseEvent::Activate(id.clone()))
    };
    let on_keydown = {
        let id = id.clone();
        move |evt: KeyboardEvent| {
            if is_activation_key(&evt.key()) {
                evt.prevent_default();
                on_event.call(ShowcaseEvent::Activate(id.clone()));
            }
        }
    };
    let enter = {
        let id = id.clone();
        move |_| on_event.call(ShowcaseEvent::PointerEnter(id.clone()))
    };
    let leave = {
        let id = id.clone();
        move |_| on_event.call(ShowcaseEvent::PointerLeave(id.clone()))
    };

    let hover_class = if card.hovered { "hovered" } else { "" };

    rsx! {
        article {
            class: "project-card {hover_class}",
            tabindex: "0",
            role: "button",
            "aria-label": "Open {card.title}",
            onclick: activate,
            onkeydown: on_keydown,
            onmouseenter: enter,
            onmouseleave: leave,

            div { class: "project-card__media",
                img {
                    class: "project-card__image",
                    src: "{card.image}",
                    alt: "{card.title}",
                }

                if card.featured {
                    span { class: "badge badge--featured", "Featured" }
                }

                if let Some(control) = card.toggle {
                    PlatformToggle {
                        control: control,
                        class: "project-card__toggle".to_string(),
                        on_toggle: move |_| on_event.call(ShowcaseEvent::ToggleCardAlternate(id.clone())),
                    }
                }

                if !card.links.is_empty() {
                    div { class: "project-card__overlay",
                        if let Some(demo) = card.links.demo.clone() {
                            LinkButton { href: demo, variant: ButtonVariant::Primary, "Demo" }
                        }
                        if let Some(code) = card.links.code.clone() {
                            LinkButton { href: code, variant: ButtonVariant::Outline, "Code" }
                        }
                    }
                }
            }

            div { class: "project-card__content",
                div { class: "project-card__heading",
                    h3 { class: "project-card__title", "{card.title}" }
                    div { class: "project-card__categories",
                        for label in card.categories.iter() {
                            span { key: "{label}", class: "badge", "{label}" }
                        }
                    }
                }
                p { class: "project-card__description", "{card.description}" }
                if !card.technologies.is_empty() {
                    div { class: "project-card__tech",
                        for tech in card.technologies.iter() {
                            span { key: "{tech}", class: "badge badge--outline", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
