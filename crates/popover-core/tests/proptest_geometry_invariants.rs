//! Property-based invariant tests for geometry primitives (Rect, Size, Offset).
//!
//! These tests verify algebraic and structural invariants that must hold for
//! any valid inputs:
//!
//! 1. Offset addition and subtraction are inverse.
//! 2. Offset negation equals subtraction from zero.
//! 3. Rect width/height agree with its edges.
//! 4. Translation preserves size and moves the origin.
//! 5. Intersection is commutative and fits within both inputs.
//! 6. Contains agrees with intersection against a 1x1 rect.
//! 7. Direction resolution is an involution on the horizontal axis.

use popover_core::geometry::{Offset, Rect, Size};
use popover_core::LayoutDirection;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const COORD: std::ops::RangeInclusive<i32> = -10_000..=10_000;
const EXTENT: std::ops::RangeInclusive<i32> = 0..=5_000;

fn offset_strategy() -> impl Strategy<Value = Offset> {
    (COORD, COORD).prop_map(|(x, y)| Offset::new(x, y))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (EXTENT, EXTENT).prop_map(|(w, h)| Size::new(w, h))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (offset_strategy(), size_strategy())
        .prop_map(|(origin, size)| Rect::from_origin_size(origin, size))
}

fn direction_strategy() -> impl Strategy<Value = LayoutDirection> {
    prop_oneof![
        Just(LayoutDirection::LeftToRight),
        Just(LayoutDirection::RightToLeft),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Offset addition and subtraction are inverse
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_add_sub_inverse(a in offset_strategy(), b in offset_strategy()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a + b, b + a, "addition is not commutative: a={:?}, b={:?}", a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Negation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_neg_is_zero_minus(a in offset_strategy()) {
        prop_assert_eq!(-a, Offset::ZERO - a);
        prop_assert_eq!(a + (-a), Offset::ZERO);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Width/height agree with edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rect_extent_matches_edges(origin in offset_strategy(), size in size_strategy()) {
        let rect = Rect::from_origin_size(origin, size);
        prop_assert_eq!(rect.width(), rect.right - rect.left);
        prop_assert_eq!(rect.height(), rect.bottom - rect.top);
        prop_assert_eq!(rect.size(), size);
        prop_assert_eq!(rect.origin(), origin);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_size(rect in rect_strategy(), by in offset_strategy()) {
        let moved = rect.translate(by);
        prop_assert_eq!(moved.size(), rect.size());
        prop_assert_eq!(moved.origin(), rect.origin() + by);
        prop_assert_eq!(moved.translate(-by), rect);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersection_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(
            a.intersection_opt(&b),
            b.intersection_opt(&a),
            "intersection is not commutative: a={:?}, b={:?}",
            a, b
        );
    }

    #[test]
    fn intersection_fits_within_both(a in rect_strategy(), b in rect_strategy()) {
        if let Some(inter) = a.intersection_opt(&b) {
            prop_assert!(!inter.is_empty());
            prop_assert!(a.contains_rect(&inter));
            prop_assert!(b.contains_rect(&inter));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Contains agrees with intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_agrees_with_intersection(
        a in rect_strategy(),
        px in COORD,
        py in COORD,
    ) {
        let point_rect = Rect::new(px, py, px + 1, py + 1);
        prop_assert_eq!(
            a.contains(px, py),
            a.intersection_opt(&point_rect).is_some(),
            "contains({},{}) disagrees with intersection for {:?}",
            px, py, a
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Direction resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_offset_twice_is_identity(dir in direction_strategy(), o in offset_strategy()) {
        prop_assert_eq!(dir.resolve_offset(dir.resolve_offset(o)), o);
        prop_assert_eq!(dir.resolve_offset(o).y, o.y, "vertical axis must not flip");
    }

    #[test]
    fn mirrored_direction_flips_x(dir in direction_strategy(), o in offset_strategy()) {
        prop_assert_eq!(dir.mirrored().resolve_offset(o).x, -dir.resolve_offset(o).x);
    }
}
