//! JSONL session logging.
//!
//! Every event emitted through `tracing` can be mirrored to a per-session
//! JSONL file, one self-contained JSON object per line:
//!
//! ```text
//! logs/
//! └── raw/
//!     ├── 2026-10-19_desktop.jsonl
//!     └── 2026-10-19_cli.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::JsonlLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let jsonl = JsonlLayer::new("./logs", "desktop")?;
//! tracing_subscriber::registry()
//!     .with(jsonl)
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//! ```
//!
//! Showcase events can then be inspected with jq:
//!
//! ```bash
//! jq 'select(.target == "folio_core::selection")' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::JsonlLayer;
pub use writer::{read_entries, SessionLogWriter};
