#![forbid(unsafe_code)]

//! Layout (reading) direction.

use crate::error::ParseError;
use crate::geometry::Offset;

/// Horizontal reading order of the content hosting a popup.
///
/// Passed explicitly to every placement call; nothing here reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Short lowercase name (`ltr` / `rtl`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }

    #[inline]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// The opposite direction.
    #[inline]
    pub const fn mirrored(&self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }

    /// Resolve a user nudge so positive `x` always moves forward in reading order.
    ///
    /// `x` is negated under [`RightToLeft`](Self::RightToLeft); `y` is untouched.
    #[inline]
    pub const fn resolve_offset(&self, offset: Offset) -> Offset {
        match self {
            Self::LeftToRight => offset,
            Self::RightToLeft => Offset::new(-offset.x, offset.y),
        }
    }
}

impl std::str::FromStr for LayoutDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ltr" | "left-to-right" => Ok(Self::LeftToRight),
            "rtl" | "right-to-left" => Ok(Self::RightToLeft),
            _ => Err(ParseError::LayoutDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
