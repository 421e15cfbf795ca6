//! Sector addressing: 16×16 world grid, one record file per cell.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Grid side length; sector indices run `0..=255`.
pub const GRID_SIZE: u8 = 16;

#[derive(Error, Debug)]
#[error("Invalid sector '{0}': expected an index 0-255 or a grid cell 'x,y' with x,y in 0-15")]
pub struct InvalidSector(String);

/// One cell of the 16×16 sector grid.
///
/// `index = y * 16 + x`; the backing file is `sd<index>.csdat` (decimal, no
/// leading zeros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectorIndex(u8);

impl SectorIndex {
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn from_grid(x: u8, y: u8) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self(y * GRID_SIZE + x))
        } else {
            None
        }
    }

    /// All 256 sectors in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.0 % GRID_SIZE
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.0 / GRID_SIZE
    }

    /// File name of the backing record, e.g. `sd37.csdat`.
    pub fn file_name(self) -> String {
        format!("sd{}.csdat", self.0)
    }
}

impl fmt::Display for SectorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SectorIndex {
    type Err = InvalidSector;

    /// Accepts a decimal index (`"37"`) or a grid cell (`"5,2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidSector(s.to_owned());
        if let Some((xs, ys)) = s.split_once(',') {
            let x: u8 = xs.trim().parse().map_err(|_| bad())?;
            let y: u8 = ys.trim().parse().map_err(|_| bad())?;
            Self::from_grid(x, y).ok_or_else(bad)
        } else {
            s.trim().parse::<u8>().map(Self).map_err(|_| bad())
        }
    }
}
