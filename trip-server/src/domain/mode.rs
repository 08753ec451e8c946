//! Transport mode types.
//!
//! `Mode` is the closed set of modes a search can request; `LegMode` is the
//! open set a plan response can put on an individual leg. The distinction
//! matters: a TRAM request may well come back as WALK-TRAM-WALK legs, and an
//! upstream leg tagged with a mode we don't know must be kept, not dropped.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown requested mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownModeName(pub String);

/// A requested transport mode. One search runs once per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Walk,
    Tram,
    Bus,
    Car,
}

impl Mode {
    /// All modes, in result-slot order.
    pub const ALL: [Mode; 4] = [Mode::Walk, Mode::Tram, Mode::Bus, Mode::Car];

    /// The upstream enumerant for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Walk => "WALK",
            Mode::Tram => "TRAM",
            Mode::Bus => "BUS",
            Mode::Car => "CAR",
        }
    }

    /// Fixed position of this mode in a result set.
    pub fn index(&self) -> usize {
        match self {
            Mode::Walk => 0,
            Mode::Tram => 1,
            Mode::Bus => 2,
            Mode::Car => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownModeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WALK" => Ok(Mode::Walk),
            "TRAM" => Ok(Mode::Tram),
            "BUS" => Ok(Mode::Bus),
            "CAR" => Ok(Mode::Car),
            other => Err(UnknownModeName(other.to_string())),
        }
    }
}

/// The transport mode of a single leg, as reported by the planner.
///
/// Unrecognised tags are retained verbatim in `Other` so that no leg
/// silently disappears from a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegMode {
    Walk,
    Tram,
    Bus,
    Car,
    Other(String),
}

impl LegMode {
    /// Parse a leg's transport tag. Never fails: unknown tags become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "WALK" => LegMode::Walk,
            "TRAM" => LegMode::Tram,
            "BUS" => LegMode::Bus,
            "CAR" => LegMode::Car,
            other => LegMode::Other(other.to_string()),
        }
    }

    /// The tag for this mode, as the planner spells it.
    pub fn as_str(&self) -> &str {
        match self {
            LegMode::Walk => "WALK",
            LegMode::Tram => "TRAM",
            LegMode::Bus => "BUS",
            LegMode::Car => "CAR",
            LegMode::Other(tag) => tag,
        }
    }

    /// How to draw this leg on a map.
    pub fn line_style(&self) -> LineStyle {
        match self {
            LegMode::Walk => LineStyle {
                color: "blue",
                width: 3.0,
                dashed: true,
            },
            LegMode::Tram => LineStyle {
                color: "blue",
                width: 3.0,
                dashed: false,
            },
            LegMode::Bus => LineStyle {
                color: "blue",
                width: 3.0,
                dashed: false,
            },
            LegMode::Car => LineStyle {
                color: "blue",
                width: 3.0,
                dashed: false,
            },
            LegMode::Other(_) => LineStyle {
                color: "gray",
                width: 3.0,
                dashed: false,
            },
        }
    }
}

impl fmt::Display for LegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Mode> for LegMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Walk => LegMode::Walk,
            Mode::Tram => LegMode::Tram,
            Mode::Bus => LegMode::Bus,
            Mode::Car => LegMode::Car,
        }
    }
}

/// Presentation attributes for drawing a leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Named stroke color.
    pub color: &'static str,
    /// Stroke width in points.
    pub width: f32,
    /// Whether the stroke is dashed (walking legs).
    pub dashed: bool,
}
