#![forbid(unsafe_code)]

//! Popup position providers.
//!
//! This crate decides where a floating popup is drawn relative to its anchor:
//!
//! - [`PositionProvider`] - the placement contract
//! - [`AnchorAlignmentPositionProvider`] - match an [`Alignment`] point of the
//!   popup with the same point of the anchor
//! - [`EdgeDropPositionProvider`] - drop the popup below the anchor, snapped
//!   to its start or end edge
//! - [`PopupPositioner`] - either of the above, selected by value
//! - [`PopupPositionProperties`] - the latest inputs a host has measured
//!
//! Every calculation is a pure function of the anchor bounds, the layout
//! direction, and the popup size. Results are not clamped to the screen.
//!
//! ```
//! use popover_position::{Alignment, PopupPositioner, PositionProvider};
//! use popover_position::{LayoutDirection, Offset, Rect, Size};
//!
//! let anchor = Rect::new(10, 20, 110, 70);
//! let centered = PopupPositioner::aligned(Alignment::Center, Offset::ZERO);
//! let at = centered.calculate_position(anchor, LayoutDirection::LeftToRight, Size::new(40, 10));
//! assert_eq!(at, Offset::new(40, 40));
//! ```

pub mod alignment;
pub mod anchor_alignment;
pub mod edge_drop;
pub mod positioner;
pub mod properties;
pub mod provider;

pub use alignment::Alignment;
pub use anchor_alignment::AnchorAlignmentPositionProvider;
pub use edge_drop::{EdgeAlignment, EdgeDropPositionProvider};
pub use popover_core::{LayoutDirection, Offset, ParseError, Rect, Size};
pub use positioner::PopupPositioner;
pub use properties::PopupPositionProperties;
pub use provider::PositionProvider;
