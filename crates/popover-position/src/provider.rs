#![forbid(unsafe_code)]

//! The placement contract shared by every popup positioning strategy.

use popover_core::{LayoutDirection, Offset, Rect, Size};

/// Computes where a popup should be drawn.
///
/// Implementations are pure: the result depends only on the arguments and
/// on values fixed at construction. No clamping to any screen or window is
/// applied, so the returned position may leave the overlay partly or fully
/// off-screen. Callers that need screen-fit check the placed bounds and
/// choose another provider or direction.
pub trait PositionProvider {
    /// Top-left corner of the overlay, in the coordinate space of `anchor_bounds`.
    ///
    /// * `anchor_bounds` - bounds of the element the popup is attached to
    /// * `direction` - layout direction of the anchor's content
    /// * `overlay_size` - measured size of the popup
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    #[inline]
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset {
        (**self).calculate_position(anchor_bounds, direction, overlay_size)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Box<P> {
    #[inline]
    fn calculate_position(
        &self,
        anchor_bounds: Rect,
        direction: LayoutDirection,
        overlay_size: Size,
    ) -> Offset {
        (**self).calculate_position(anchor_bounds, direction, overlay_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Places the overlay at a fixed point regardless of input.
    struct Pinned(Offset);

    impl PositionProvider for Pinned {
        fn calculate_position(&self, _: Rect, _: LayoutDirection, _: Size) -> Offset {
            self.0
        }
    }

    fn place<P: PositionProvider>(provider: P) -> Offset {
        provider.calculate_position(Rect::default(), LayoutDirection::default(), Size::ZERO)
    }

    #[test]
    fn references_and_boxes_delegate() {
        let pinned = Pinned(Offset::new(3, 4));
        assert_eq!(place(&pinned), Offset::new(3, 4));

        let boxed: Box<dyn PositionProvider> = Box::new(Pinned(Offset::new(-1, 2)));
        assert_eq!(place(boxed), Offset::new(-1, 2));
    }
}
