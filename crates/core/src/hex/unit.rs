//! This sub-module contains the basic coordinate types of the hex grid. See
//! the parent module documentation for more info on the coordinate system.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A trait representing any value in the axial hex coordinate system. Any
/// struct with a q/r/s that is part of the hex coordinate system should
/// implement this trait. This lets layout conversions accept both whole tiles
/// and fractional positions.
pub trait HexCoordinate: Copy + Debug {
    /// The primitive type of each component. Must be convertible to `f64` so
    /// it can be mathematically converted to pixel space
    type Component: Into<f64>;

    /// The `q` component of the coordinate
    fn q(&self) -> Self::Component;

    /// The `r` component of the coordinate
    fn r(&self) -> Self::Component;

    /// The `s` component of the coordinate. For all values in the system,
    /// `q + r + s = 0`.
    fn s(&self) -> Self::Component;
}

/// A point in the hex coordinate system that refers to a whole tile. See
/// module-level documentation for a description of the coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for all tiles, this struct only stores `q` and `r`
/// and derives `s` as needed.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct HexPoint {
    q: i32,
    r: i32,
}

impl HexPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new hex point with the given q and r. Since q+r+s=0 for all
    /// points, we can derive s from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl HexCoordinate for HexPoint {
    type Component = i32;

    fn q(&self) -> i32 {
        self.q
    }

    fn r(&self) -> i32 {
        self.r
    }

    fn s(&self) -> i32 {
        -self.q - self.r
    }
}

/// A real-valued position in the hex coordinate system. This is what you get
/// when converting an arbitrary pixel back into hex space, since most pixels
/// don't land exactly on a tile center.
///
/// All three components are stored, but `s` is always derived from `q` and `r`
/// at construction so that `q + r + s = 0` holds (up to float precision).
///
/// No rounding to a whole tile is provided. If you need the tile containing a
/// fractional position, you'll have to bring your own cube rounding.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Construct a new fractional hex with the given q and r. s is derived
    /// from the other two.
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }
}

impl HexCoordinate for FractionalHex {
    type Component = f64;

    fn q(&self) -> f64 {
        self.q
    }

    fn r(&self) -> f64 {
        self.r
    }

    fn s(&self) -> f64 {
        self.s
    }
}

impl From<HexPoint> for FractionalHex {
    fn from(other: HexPoint) -> Self {
        Self::new(other.q.into(), other.r.into())
    }
}
