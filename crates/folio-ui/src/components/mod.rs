//! Reusable UI components
//!
//! Controls stop click and activation-key propagation where they sit
//! inside a clickable surface, so using a control never doubles as a card
//! activation.

mod button;
mod category_pills;
mod keys;
mod platform_toggle;

pub use button::*;
pub use category_pills::*;
pub use keys::*;
pub use platform_toggle::*;
