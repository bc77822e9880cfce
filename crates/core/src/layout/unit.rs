use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. See module-level docs in [crate::hex] for a
/// description of what pixel space means.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap this point to the integer pixel grid, for drawing contexts that
    /// only deal in whole pixels. Each axis is rounded independently, with
    /// halves rounded away from zero.
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(other: Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for Vector2<f64> {
    fn from(other: Point2) -> Self {
        Vector2::new(other.x, other.y)
    }
}

/// A point on the integer pixel grid. The only way to get one of these from
/// the layout math is [Point2::to_pixel].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}
