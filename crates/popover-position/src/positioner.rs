#![forbid(unsafe_code)]

//! Closed set of built-in placement strategies.

use popover_core::{LayoutDirection, Offset, Rect, Size};

use crate::alignment::Alignment;
use crate::anchor_alignment::AnchorAlignmentPositionProvider;
use crate::edge_drop::{EdgeAlignment, EdgeDropPositionProvider};
use crate::provider::PositionProvider;

/// A built-in provider chosen at construction time.
///
/// Hosts that only need the stock placements can store this by value instead
/// of a trait object. With the `serde` feature it doubles as the on-disk form
/// of a placement, e.g. `{"kind": "dropdown", "edge": "end"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum PopupPositioner {
    /// Popup aligned against its anchor by a box alignment point.
    Aligned(AnchorAlignmentPositionProvider),
    /// Popup dropped below its anchor, snapped to an edge.
    Dropdown(EdgeDropPositionProvider),
}

impl PopupPositioner {
    pub const fn aligned(alignment: Alignment, offset: Offset) -> Self {
        Self::Aligned(AnchorAlignmentPositionProvider::new(alignment, offset))
    }

    pub const fn dropdown(edge: EdgeAlignment, offset: Offset) -> Self {
        Self::Dropdown(EdgeDropPositionProvider::new(edge, offset))
    }

    /// The user offset, whichever strategy is selected.
    pub const fn offset(&self) -> Offset {
        match self {
            Self::Aligned(provider) => provider.offset,
            Self::Dropdown(provider) => provider.offset,
        }
    }

    /// Replace the user offset, keeping the strategy.
    #[must_use]
    pub const fn with_offset(self, offset: Offset) -> Self {
        match self {
            Self::Aligned(provider) => Self::aligned(provider.alignment, offset),
            Self::Dropdown(provider) => Self::dropdown(provider.edge, offset),
        }
    }
}

impl Default for PopupPositioner {
    /// Top-start alignment with no offset.
    fn default() -> Self {
        Self::aligned(Alignment::TopStart, Offset::ZERO)
    }
}

impl From<AnchorAlignmentPositionProvider> for PopupPositioner {
    fn from(provider: AnchorAlignmentPositionProvider) -> Self {
        Self::Aligned(provider)
    }
}

impl From<EdgeDropPositionProvider> for PopupPositioner {
    fn from(provider: EdgeDropPositionProvider) -> Self {
        Self::Dropdown(provider)
    }
}

impl PositionProvider for PopupPositioner {
    #[inline]
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset {
        match self {
            Self::Aligned(provider) => {
                provider.calculate_position(anchor_bounds, direction, overlay_size)
            }
            Self::Dropdown(provider) => {
                provider.calculate_position(anchor_bounds, direction, overlay_size)
            }
        }
    }
}
