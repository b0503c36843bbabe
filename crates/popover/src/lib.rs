#![forbid(unsafe_code)]

//! Popover public facade crate.
//!
//! Re-exports the geometry vocabulary from `popover-core` and the placement
//! strategies from `popover-position`, plus a prelude for day-to-day use.
//!
//! ```
//! use popover::prelude::*;
//!
//! let anchor = Rect::new(10, 20, 110, 70);
//! let menu = PopupPositioner::dropdown(EdgeAlignment::Start, Offset::new(5, 0));
//! let at = menu.calculate_position(anchor, LayoutDirection::RightToLeft, Size::new(40, 10));
//! assert_eq!(at, Offset::new(65, 70));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use popover_core::{LayoutDirection, Offset, ParseError, Rect, Size};

#[cfg(feature = "tracing-json")]
pub use popover_core::logging::init_json as init_json_logging;

// --- Position re-exports ---------------------------------------------------

pub use popover_position::{
    Alignment, AnchorAlignmentPositionProvider, EdgeAlignment, EdgeDropPositionProvider,
    PopupPositionProperties, PopupPositioner, PositionProvider,
};

/// Standard result type for popover APIs.
pub type Result<T> = std::result::Result<T, ParseError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, EdgeAlignment, LayoutDirection, Offset, PopupPositionProperties,
        PopupPositioner, PositionProvider, Rect, Result, Size,
    };
}
