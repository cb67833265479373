use crate::error::JapanMeshError;
use crate::index::constants::{GRID_SPECS, GridSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six standard mesh granularities, coarsest first.
///
/// Each level is identified by the length of its mesh codes and serializes as
/// its conventional label (`"1"`, `"2"`, `"3"`, `"1/2"`, `"1/4"`, `"1/8"`).
///
/// # Example
///
/// ```
/// use japanmesh_rs::GridLevel;
///
/// let level: GridLevel = "1/2".parse().unwrap();
/// assert_eq!(level, GridLevel::Half);
/// assert_eq!(level.digit_count(), 9);
/// assert_eq!(level.coarser(), Some(GridLevel::Level3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridLevel {
    /// 第1次地域区画 (primary mesh), 4 digits.
    #[serde(rename = "1")]
    Level1,
    /// 第2次地域区画 (secondary mesh), 6 digits.
    #[serde(rename = "2")]
    Level2,
    /// 基準地域メッシュ (tertiary mesh), 8 digits.
    #[serde(rename = "3")]
    Level3,
    /// 2分の1地域メッシュ, 9 digits.
    #[serde(rename = "1/2")]
    Half,
    /// 4分の1地域メッシュ, 10 digits.
    #[serde(rename = "1/4")]
    Quarter,
    /// 8分の1地域メッシュ, 11 digits.
    #[serde(rename = "1/8")]
    OneEighth,
}

impl GridLevel {
    /// All levels ordered from coarsest to finest.
    pub const ALL: [GridLevel; 6] = [
        GridLevel::Level1,
        GridLevel::Level2,
        GridLevel::Level3,
        GridLevel::Half,
        GridLevel::Quarter,
        GridLevel::OneEighth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GridLevel::Level1 => "1",
            GridLevel::Level2 => "2",
            GridLevel::Level3 => "3",
            GridLevel::Half => "1/2",
            GridLevel::Quarter => "1/4",
            GridLevel::OneEighth => "1/8",
        }
    }

    pub(crate) fn spec(self) -> &'static GridSpec {
        &GRID_SPECS[self as usize]
    }

    /// Length of a mesh code at this level.
    pub fn digit_count(self) -> usize {
        self.spec().digits
    }

    /// Cell height in degrees.
    pub fn lat_span(self) -> f64 {
        self.spec().lat_span
    }

    /// Cell width in degrees.
    pub fn lng_span(self) -> f64 {
        self.spec().lng_span
    }

    /// Returns `(columns, rows)` the parent cell is split into to produce this level.
    pub fn division(self) -> (u8, u8) {
        let spec = self.spec();
        (spec.division_x, spec.division_y)
    }

    /// The next finer level, or `None` for the 1/8 mesh.
    pub fn finer(self) -> Option<GridLevel> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// The next coarser level, or `None` for the primary mesh.
    pub fn coarser(self) -> Option<GridLevel> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Looks up the level whose codes have exactly `digits` characters.
    pub fn from_digit_count(digits: usize) -> Option<GridLevel> {
        Self::ALL.into_iter().find(|level| level.digit_count() == digits)
    }
}

impl fmt::Display for GridLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GridLevel {
    type Err = JapanMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| JapanMeshError::InvalidGridLevel(s.to_string()))
    }
}
