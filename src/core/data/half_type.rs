use crate::core::data::point::Point;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which part of the completed curve a caller wants.
///
/// The selection predicate, the fill behaviour and the framing rule all hang
/// off this variant so they cannot drift apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfType {
    Complete,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalfTypeParseError {
    Unknown { input: String },
}

impl fmt::Display for HalfTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { input } => {
                write!(
                    f,
                    "unknown half type '{}', expected complete, top, bottom, left or right",
                    input
                )
            }
        }
    }
}

impl Error for HalfTypeParseError {}

impl HalfType {
    pub const ALL: [Self; 5] = [
        Self::Complete,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Whether a point of the complete curve survives this selection.
    ///
    /// Midline comparisons are inclusive, so points exactly on a midline
    /// belong to both adjacent halves.
    #[must_use]
    pub fn keeps(&self, point: Point, mid_x: f64, mid_y: f64) -> bool {
        match self {
            Self::Complete => true,
            Self::Top => point.y >= mid_y,
            Self::Bottom => point.y <= mid_y,
            Self::Left => point.x <= mid_x,
            Self::Right => point.x >= mid_x,
        }
    }

    /// Only the complete snowflake gets an interior fill; a half is an open
    /// curve with no well-defined inside.
    #[must_use]
    pub fn fills(&self) -> bool {
        matches!(self, Self::Complete)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for HalfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HalfType {
    type Err = HalfTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(HalfTypeParseError::Unknown {
                input: s.to_string(),
            }),
        }
    }
}
