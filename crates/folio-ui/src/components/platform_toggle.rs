//! Platform Toggle Component
//!
//! Switches a card or the detail view between the desktop image and the
//! alternate (mobile) image. Only rendered for projects that have a
//! distinct alternate image.

use dioxus::prelude::*;
use folio_core::{Platform, ToggleControl};

use super::keys::contain_activation_key;

/// Properties for the PlatformToggle component
#[derive(Clone, PartialEq, Props)]
pub struct PlatformToggleProps {
    pub control: ToggleControl,
    /// Handler called when the toggle is clicked
    pub on_toggle: EventHandler<()>,
    #[props(default)]
    pub class: Option<String>,
}

/// Two-state platform switch
///
/// The click and activation keys are stopped here so they never reach an
/// enclosing card's activation handler.
#[component]
pub fn PlatformToggle(props: PlatformToggleProps) -> Element {
    let showing = props.control.showing;
    let extra = props.class.clone().unwrap_or_default();
    let label = toggle_label(showing);
    let desktop = Platform::Desktop.label();
    let alternate = Platform::Alternate.label();

    rsx! {
        button {
            class: "platform-toggle {extra}",
            r#type: "button",
            "aria-pressed": if showing == Platform::Alternate { "true" } else { "false" },
            "aria-label": "{label}",
            title: "{label}",
            onclick: move |e| {
                e.stop_propagation();
                props.on_toggle.call(());
            },
            onkeydown: move |e| contain_activation_key(&e),
            span {
                class: if showing == Platform::Desktop { "platform-option active" } else { "platform-option" },
                "{desktop}"
            }
            span {
                class: if showing == Platform::Alternate { "platform-option active" } else { "platform-option" },
                "{alternate}"
            }
        }
    }
}

/// Accessible label describing what a click will do
pub fn toggle_label(showing: Platform) -> String {
    format!("Show {} view", showing.other().label().to_lowercase())
}
