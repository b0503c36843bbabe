#![forbid(unsafe_code)]

//! Align a point of the popup with the same point of its anchor.

use popover_core::{LayoutDirection, Offset, Rect, Size};

use crate::alignment::Alignment;
use crate::provider::PositionProvider;

/// Places the popup so that its [`Alignment`] point lands on the anchor's.
///
/// `Center` centers the popup over the anchor, `TopStart` puts both top-start
/// corners together, and so on. The user `offset` is applied afterwards in
/// reading order: a positive `x` moves the popup towards the end edge in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorAlignmentPositionProvider {
    pub alignment: Alignment,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Offset,
}

impl AnchorAlignmentPositionProvider {
    pub const fn new(alignment: Alignment, offset: Offset) -> Self {
        Self { alignment, offset }
    }
}

impl PositionProvider for AnchorAlignmentPositionProvider {
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset {
        // Both points are relative to their own box's top-left corner.
        let anchor_point = self.alignment.align(anchor_bounds.size(), direction);
        let overlay_point = self.alignment.align(overlay_size, direction);

        let position = anchor_bounds.origin() + anchor_point - overlay_point
            + direction.resolve_offset(self.offset);

        popover_core::trace!(
            provider = "anchor_alignment",
            alignment = self.alignment.as_str(),
            direction = direction.as_str(),
            x = position.x,
            y = position.y,
            "popup positioned"
        );

        position
    }
}
