//! Button Components
//!
//! - LinkButton: external link styled as a button (Primary or Outline)
//! - IconButton / CloseButton: compact actions

use dioxus::prelude::*;

use super::keys::contain_activation_key;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// External link rendered as a button, opened in a new browsing context
#[component]
pub fn LinkButton(
    href: String,
    #[props(default)] variant: ButtonVariant,
    children: Element,
) -> Element {
    let full_class = join_class(variant.class(), Some("btn-link"));

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |e| e.stop_propagation(),
            onkeydown: move |e| contain_activation_key(&e),
            {children}
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            onkeydown: move |e| contain_activation_key(&e),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
