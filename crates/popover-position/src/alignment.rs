#![forbid(unsafe_code)]

//! Box alignment: the nine standard points of a rectangle.
//!
//! An [`Alignment`] maps a box size and a [`LayoutDirection`] to the position
//! of one designated point inside that box, measured from the box's top-left
//! corner. "Start" and "End" are reading-order relative, so the horizontal
//! axis is mirrored under right-to-left layout.
//!
//! Each variant carries a bias of -1, 0 or 1 per axis. Along an axis of
//! extent `n` the point sits at `n / 2 * (1 + bias)` rounded half up, which
//! is `0`, `ceil(n / 2)` or `n`. A zero extent always yields 0.

use popover_core::{LayoutDirection, Offset, ParseError, Size};

/// One of the nine standard alignment points of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alignment {
    #[default]
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl Alignment {
    /// Every alignment, row by row from top-start to bottom-end.
    pub const ALL: [Alignment; 9] = [
        Self::TopStart,
        Self::TopCenter,
        Self::TopEnd,
        Self::CenterStart,
        Self::Center,
        Self::CenterEnd,
        Self::BottomStart,
        Self::BottomCenter,
        Self::BottomEnd,
    ];

    /// Horizontal bias in reading order: -1 start, 0 center, 1 end.
    pub const fn horizontal_bias(&self) -> i32 {
        match self {
            Self::TopStart | Self::CenterStart | Self::BottomStart => -1,
            Self::TopCenter | Self::Center | Self::BottomCenter => 0,
            Self::TopEnd | Self::CenterEnd | Self::BottomEnd => 1,
        }
    }

    /// Vertical bias: -1 top, 0 center, 1 bottom.
    pub const fn vertical_bias(&self) -> i32 {
        match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => -1,
            Self::CenterStart | Self::Center | Self::CenterEnd => 0,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => 1,
        }
    }

    /// Swap start and end, keeping the vertical position.
    pub const fn mirrored(&self) -> Self {
        match self {
            Self::TopStart => Self::TopEnd,
            Self::TopEnd => Self::TopStart,
            Self::CenterStart => Self::CenterEnd,
            Self::CenterEnd => Self::CenterStart,
            Self::BottomStart => Self::BottomEnd,
            Self::BottomEnd => Self::BottomStart,
            Self::TopCenter | Self::Center | Self::BottomCenter => *self,
        }
    }

    /// True when the alignment point does not move under mirroring.
    pub const fn is_horizontally_symmetric(&self) -> bool {
        self.horizontal_bias() == 0
    }

    /// Position of the alignment point inside a box of `size`.
    #[inline]
    pub const fn align(&self, size: Size, direction: LayoutDirection) -> Offset {
        let horizontal = if direction.is_rtl() {
            -self.horizontal_bias()
        } else {
            self.horizontal_bias()
        };
        Offset::new(
            point_along(size.width, horizontal),
            point_along(size.height, self.vertical_bias()),
        )
    }

    /// Kebab-case name, e.g. `bottom-end`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::TopCenter => "top-center",
            Self::TopEnd => "top-end",
            Self::CenterStart => "center-start",
            Self::Center => "center",
            Self::CenterEnd => "center-end",
            Self::BottomStart => "bottom-start",
            Self::BottomCenter => "bottom-center",
            Self::BottomEnd => "bottom-end",
        }
    }
}

/// Rounded-half-up `extent / 2 * (1 + bias)` for `bias` in {-1, 0, 1}.
#[inline]
const fn point_along(extent: i32, bias: i32) -> i32 {
    match bias {
        ..=-1 => 0,
        0 => extent - extent / 2,
        _ => extent,
    }
}

impl std::str::FromStr for Alignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.as_str() == name)
            .ok_or_else(|| ParseError::Alignment(s.to_string()))
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
