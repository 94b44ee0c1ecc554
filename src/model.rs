//! Data model for numeral systems, digit chunks and glyph geometry.
//!
//! These structures are plain values: the engine builds them per request
//! and never mutates them afterwards.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, NumeralResult};
use crate::renderer::{basingstoke, cistercian};

/// Identifier of a supported numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemId {
    /// Cistercian monastic numerals, 0–9999 in four quadrants.
    Cistercian,
    /// Matthew Paris' Basingstoke centesimal numerals, 0–99 on two sides.
    Basingstoke,
}

impl SystemId {
    pub const ALL: [SystemId; 2] = [SystemId::Cistercian, SystemId::Basingstoke];

    /// The tag used by callers to select this system.
    pub fn as_str(self) -> &'static str {
        match self {
            SystemId::Cistercian => "cistercian",
            SystemId::Basingstoke => "basingstoke",
        }
    }

    /// Static configuration record for this system.
    pub fn system(self) -> &'static NumeralSystem {
        match self {
            SystemId::Cistercian => &CISTERCIAN,
            SystemId::Basingstoke => &BASINGSTOKE,
        }
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemId {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cistercian" => Ok(SystemId::Cistercian),
            "basingstoke" => Ok(SystemId::Basingstoke),
            other => Err(NumeralError::UnknownSystem(other.to_string())),
        }
    }
}

/// Fixed description of a numeral system.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumeralSystem {
    pub id: SystemId,
    /// Maximum number of decimal digits one glyph can encode
    pub max_digit_width: usize,
    /// Largest encodable value (`10^max_digit_width - 1`)
    pub max_value: u32,
    /// SVG canvas size in user units
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Prefix of the SVG `<title>` text
    pub title_label: &'static str,
    /// Glyph encoder; only called with values already checked against `max_value`
    #[serde(skip)]
    pub encode: fn(u32) -> Glyph,
}

pub static CISTERCIAN: NumeralSystem = NumeralSystem {
    id: SystemId::Cistercian,
    max_digit_width: 4,
    max_value: 9999,
    canvas_width: cistercian::WIDTH,
    canvas_height: cistercian::HEIGHT,
    title_label: "Cistercian numeral",
    encode: cistercian::encode,
};

pub static BASINGSTOKE: NumeralSystem = NumeralSystem {
    id: SystemId::Basingstoke,
    max_digit_width: 2,
    max_value: 99,
    canvas_width: basingstoke::WIDTH,
    canvas_height: basingstoke::HEIGHT,
    title_label: "Basingstoke centesimal",
    encode: basingstoke::encode,
};

impl NumeralSystem {
    pub fn value_range(&self) -> RangeInclusive<u32> {
        0..=self.max_value
    }

    pub fn contains(&self, value: i64) -> bool {
        (0..=i64::from(self.max_value)).contains(&value)
    }

    /// Encode `value` into a glyph, rejecting values outside the system's range.
    pub fn glyph(&self, value: i64) -> NumeralResult<Glyph> {
        if !self.contains(value) {
            return Err(NumeralError::OutOfRange {
                system: self.id,
                value,
                max: self.max_value,
            });
        }
        // In range, so the cast cannot truncate.
        Ok((self.encode)(value as u32))
    }
}

/// How a chunk came about in the digit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkOrigin {
    /// A single `0` digit, which always stands alone as a separator numeral
    Zero,
    /// A group that starts with a non-zero digit
    Significant,
}

/// One bounded integer cut from the input, destined for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub value: u32,
    pub origin: ChunkOrigin,
    /// Byte offset of the first digit in the source text
    pub start: usize,
    /// Byte offset one past the last digit
    pub end: usize,
}

impl Chunk {
    pub fn is_zero_separator(&self) -> bool {
        self.origin == ChunkOrigin::Zero
    }

    /// The digits this chunk was read from, or `None` if `text` is not
    /// the string it was chunked from.
    pub fn source<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// A straight stroke in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// The strokes representing one numeral value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub system: SystemId,
    pub value: u32,
    /// Vertical baseline, present for every value
    pub stem: LineSegment,
    /// Digit strokes; empty for 0
    pub segments: Vec<LineSegment>,
}

impl Glyph {
    /// All strokes, stem first.
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        std::iter::once(&self.stem).chain(self.segments.iter())
    }
}

/// A chunk together with its rendered SVG.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedNumeral {
    pub chunk: Chunk,
    pub svg: String,
}
