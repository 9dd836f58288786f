//! # Leaf Grammars
//!
//! Small fixed grammars assembled from the combinators: LaTeX fragments and
//! bracket links. Each returns a position-annotated node or a `Failure`.

pub mod equation;
pub mod link;

pub use equation::{Equation, equation};
pub use link::{Link, link};
