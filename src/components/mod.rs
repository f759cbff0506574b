//! UI Components for Folio.

pub mod showcase;

pub use showcase::ProjectShowcase;
