//! # Snapshot Testing Support
//!
//! Utilities for testing the parsers via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`render`**: deterministic indented text renderings of outline and span
//!   trees for `insta` inline snapshots
//! - **`invariants`**: runtime checks for parser correctness (locations in
//!   bounds, children contained in parents, levels strictly increasing)

pub mod invariants;
pub mod render;

pub use invariants::{check_outline, check_span};
pub use render::{render_outline, render_span};
