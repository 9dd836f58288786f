pub mod lines;
pub mod position;
pub mod slice;

pub use lines::{Line, segment, segment_with};
pub use position::{Loc, Position};
pub use slice::{preview, slice};
