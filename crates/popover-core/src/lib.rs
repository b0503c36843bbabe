#![forbid(unsafe_code)]

//! Core: geometry vocabulary, layout direction, and logging for popup placement.

pub mod direction;
pub mod error;
pub mod geometry;
pub mod logging;

pub use direction::LayoutDirection;
pub use error::ParseError;
pub use geometry::{Offset, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, trace_span, warn};
