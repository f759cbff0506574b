//! Folio UI Components
//!
//! Dioxus primitives for the portfolio showcase: link and icon buttons,
//! filter pills, the platform toggle and keyboard helpers. Components take plain props and emit events; all
//! state lives in `folio-core`.
//!
//! ## Palette
//!
//! - **Ink (#111827)**: text and filled controls
//! - **Accent (#6366f1)**: selected pill, focus ring, links
//! - **Muted (#6b7280)**: secondary text, counts
//! - **Surface (#ffffff)**: cards and the detail view

pub mod components;

pub use components::*;
