#![forbid(unsafe_code)]

//! Dropdown placement: directly below the anchor, snapped to one of its edges.

use popover_core::{LayoutDirection, Offset, ParseError, Rect, Size};

use crate::provider::PositionProvider;

/// Which horizontal edge of the anchor a dropdown is attached to.
///
/// Resolved against the layout direction: `Start` is the left edge in
/// left-to-right layout and the right edge in right-to-left layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EdgeAlignment {
    /// Popup's leading edge lines up with the anchor's leading edge.
    #[default]
    Start,
    /// Popup begins just past the anchor's trailing edge.
    End,
}

impl EdgeAlignment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl std::str::FromStr for EdgeAlignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(ParseError::EdgeAlignment(s.to_string())),
        }
    }
}

impl std::fmt::Display for EdgeAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Places the popup directly below its anchor.
///
/// | Edge    | Direction | x relative to anchor left |
/// |---------|-----------|---------------------------|
/// | `Start` | LTR       | `0`                       |
/// | `Start` | RTL       | `anchor.width - popup.width` |
/// | `End`   | LTR       | `anchor.width`            |
/// | `End`   | RTL       | `-popup.width`            |
///
/// The top of the popup is always the anchor's bottom edge; there is no
/// flipping above the anchor when space runs out below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeDropPositionProvider {
    pub edge: EdgeAlignment,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Offset,
}

impl EdgeDropPositionProvider {
    pub const fn new(edge: EdgeAlignment, offset: Offset) -> Self {
        Self { edge, offset }
    }
}

impl PositionProvider for EdgeDropPositionProvider {
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset {
        let x = match (self.edge, direction) {
            (EdgeAlignment::Start, LayoutDirection::LeftToRight) => 0,
            (EdgeAlignment::Start, LayoutDirection::RightToLeft) => {
                anchor_bounds.width() - overlay_size.width
            }
            (EdgeAlignment::End, LayoutDirection::LeftToRight) => anchor_bounds.width(),
            (EdgeAlignment::End, LayoutDirection::RightToLeft) => -overlay_size.width,
        };
        let below = Offset::new(x, anchor_bounds.height());

        let position = anchor_bounds.origin() + below + direction.resolve_offset(self.offset);

        popover_core::trace!(
            provider = "edge_drop",
            edge = self.edge.as_str(),
            direction = direction.as_str(),
            x = position.x,
            y = position.y,
            "popup positioned"
        );

        position
    }
}
