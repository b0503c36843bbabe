#![forbid(unsafe_code)]

//! Latest placement inputs, as tracked by a popup host between layout passes.

use popover_core::{LayoutDirection, Offset, Rect, Size};

use crate::provider::PositionProvider;

/// The inputs a host feeds into a [`PositionProvider`].
///
/// The host updates these as the anchor moves, the popup is re-measured, or
/// the ambient direction changes. Every setter reports whether the stored
/// value changed so the host knows when a new layout pass is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupPositionProperties {
    anchor_bounds: Rect,
    overlay_size: Size,
    direction: LayoutDirection,
}

impl PopupPositionProperties {
    pub const fn new(anchor_bounds: Rect, direction: LayoutDirection, overlay_size: Size) -> Self {
        Self {
            anchor_bounds,
            overlay_size,
            direction,
        }
    }

    #[inline]
    pub const fn anchor_bounds(&self) -> Rect {
        self.anchor_bounds
    }

    #[inline]
    pub const fn overlay_size(&self) -> Size {
        self.overlay_size
    }

    #[inline]
    pub const fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Returns `true` if the bounds changed.
    pub fn set_anchor_bounds(&mut self, anchor_bounds: Rect) -> bool {
        replace_if_changed(&mut self.anchor_bounds, anchor_bounds)
    }

    /// Returns `true` if the size changed.
    pub fn set_overlay_size(&mut self, overlay_size: Size) -> bool {
        replace_if_changed(&mut self.overlay_size, overlay_size)
    }

    /// Returns `true` if the direction changed.
    pub fn set_direction(&mut self, direction: LayoutDirection) -> bool {
        replace_if_changed(&mut self.direction, direction)
    }

    /// Run `provider` against the stored inputs.
    pub fn position_with<P: PositionProvider + ?Sized>(&self, provider: &P) -> Offset {
        provider.calculate_position(self.anchor_bounds, self.direction, self.overlay_size)
    }

    /// Bounds the popup would occupy when placed by `provider`.
    ///
    /// Not clamped; compare against the screen with [`Rect::contains_rect`]
    /// to detect overflow.
    pub fn overlay_bounds_with<P: PositionProvider + ?Sized>(&self, provider: &P) -> Rect {
        Rect::from_origin_size(self.position_with(provider), self.overlay_size)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
