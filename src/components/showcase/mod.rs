//! Project showcase
//!
//! Filter pills, the card grid and the detail view, all driven by the
//! render instructions of the shared `Showcase`.

mod project_card;
mod project_detail;
mod project_grid;

pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use project_grid::ProjectShowcase;
