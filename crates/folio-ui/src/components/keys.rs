//! Keyboard helpers shared by clickable surfaces and the controls nested in
//! them.

use dioxus::prelude::*;

/// Keys that activate a focused button-like element.
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Keep an activation key pressed on a nested control from also reaching
/// the enclosing card. Other keys (Escape) still bubble.
pub fn contain_activation_key(evt: &KeyboardEvent) {
    if is_activation_key(&evt.key()) {
        evt.stop_propagation();
    }
}
