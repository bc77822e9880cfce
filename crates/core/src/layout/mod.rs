pub mod config;
pub mod unit;

use crate::{
    hex::{FractionalHex, HexCoordinate},
    layout::{config::LayoutConfig, unit::Point2},
};
use anyhow::anyhow;
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// `sqrt(3)`, which shows up all over regular hexagon geometry.
/// `f64::consts::SQRT_3` isn't stable yet.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The linear transform that defines how tiles are laid out in pixel space.
///
/// An orientation is made of two 2x2 matrices and a start angle:
///
/// - The **forward** matrix `[f0 f1; f2 f3]` converts axial `(q, r)` into a
///   pixel offset for a unit-sized tile
/// - The **backward** matrix `[b0 b1; b2 b3]` converts back. It must be the
///   inverse of the forward matrix, otherwise round trips through a [Layout]
///   won't come back to where they started
/// - The **start angle** is the angle of corner 0, in sixths of a full turn
///
/// There are two standard orientations, [Self::POINTY] and [Self::FLAT]. You
/// can build your own with [Self::new] or [Self::from_forward_matrix], but
/// you'll rarely need to.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    forward: [f64; 4],
    backward: [f64; 4],
    start_angle: f64,
}

impl Orientation {
    /// Tiles with a vertex pointing straight up. Rows of tiles line up
    /// horizontally.
    pub const POINTY: Self = Self::new(
        [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
        [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        0.5,
    );
    /// Tiles with a flat side on top. Columns of tiles line up vertically.
    pub const FLAT: Self = Self::new(
        [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        0.0,
    );

    /// Define an orientation from raw coefficients. Both matrices are given in
    /// row-major order. No checking is done here, so it's on you to make sure
    /// `backward` is actually the inverse of `forward`.
    pub const fn new(
        forward: [f64; 4],
        backward: [f64; 4],
        start_angle: f64,
    ) -> Self {
        Self {
            forward,
            backward,
            start_angle,
        }
    }

    /// Define an orientation from just its forward matrix. The backward matrix
    /// is computed by inverting the forward one. Returns an error if the
    /// matrix isn't invertible, since there would be no way to get from pixel
    /// space back to hex space.
    pub fn from_forward_matrix(
        forward: Matrix2<f64>,
        start_angle: f64,
    ) -> anyhow::Result<Self> {
        let backward = forward.try_inverse().ok_or_else(|| {
            anyhow!("Forward matrix {} is not invertible", forward)
        })?;
        Ok(Self::new(
            [forward.m11, forward.m12, forward.m21, forward.m22],
            [backward.m11, backward.m12, backward.m21, backward.m22],
            start_angle,
        ))
    }

    /// The hex-to-pixel matrix, `[f0 f1; f2 f3]`
    pub fn forward_matrix(&self) -> Matrix2<f64> {
        let [f0, f1, f2, f3] = self.forward;
        Matrix2::new(f0, f1, f2, f3)
    }

    /// The pixel-to-hex matrix, `[b0 b1; b2 b3]`
    pub fn backward_matrix(&self) -> Matrix2<f64> {
        let [b0, b1, b2, b3] = self.backward;
        Matrix2::new(b0, b1, b2, b3)
    }

    /// Angle of corner 0, in sixths of a full turn
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// A named choice between the two standard orientations. This is what configs
/// and the CLI use to pick an orientation, since raw coefficients are not a
/// pleasant thing to type out.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// See [Orientation::POINTY]
    Pointy,
    /// See [Orientation::FLAT]
    Flat,
}

impl OrientationKind {
    /// Get the orientation constant that this kind refers to
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Pointy => Orientation::POINTY,
            Self::Flat => Orientation::FLAT,
        }
    }
}

impl From<OrientationKind> for Orientation {
    fn from(kind: OrientationKind) -> Self {
        kind.orientation()
    }
}

/// A layout maps a hex grid onto pixel space. It's defined by three things:
///
/// - An [Orientation], which determines which way the tiles point
/// - A scale, which stretches the canonical hexagon (all vertices on the unit
///   circle) independently along each axis
/// - An origin, which is the pixel location of the center of tile `(0, 0)`
///
/// Layouts can't be changed after creation, but they're just a handful of
/// floats so if you need a different one, just create a new one. None of the
/// conversion functions check their inputs. A zero scale is perfectly legal to
/// construct, you'll just get infinities and NaNs back out of
/// [Self::point_to_hex].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: Orientation,
    scale: Point2,
    origin: Point2,
}

impl Layout {
    /// Initialize a new layout. This can't fail; any values are accepted.
    pub fn new(
        orientation: Orientation,
        scale_x: f64,
        scale_y: f64,
        origin: Point2,
    ) -> Self {
        Self {
            orientation,
            scale: Point2::new(scale_x, scale_y),
            origin,
        }
    }

    /// Build a layout from a deserialized config. Returns an error if the
    /// config is invalid.
    pub fn from_config(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let layout = Self::new(
            config.orientation.orientation(),
            config.scale.x,
            config.scale.y,
            config.origin,
        );
        debug!(
            "Built {} layout with scale {} and origin {}",
            config.orientation, layout.scale, layout.origin
        );
        Ok(layout)
    }

    /// Get the orientation of tiles in this layout
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Get the per-axis scale factor applied to the canonical hexagon
    pub fn scale(&self) -> Point2 {
        self.scale
    }

    /// Get the pixel location of the center of tile `(0, 0)`
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Convert a hex coordinate to the pixel at its center. This accepts any
    /// hex coordinate, so you can pass either a whole tile ([crate::HexPoint])
    /// or a [FractionalHex].
    pub fn hex_to_point<T: Into<f64>>(
        &self,
        hex: impl HexCoordinate<Component = T>,
    ) -> Point2 {
        let axial: Vector2<f64> = Vector2::new(hex.q().into(), hex.r().into());
        let unscaled = self.orientation.forward_matrix() * axial;
        // Stretch each axis separately, then move to the origin
        let scaled = unscaled.component_mul(&Vector2::from(self.scale));
        Point2::from(scaled) + self.origin
    }

    /// Convert a pixel to a position in hex space. The result generally won't
    /// be a whole tile, so no rounding is done; the output is fractional.
    pub fn point_to_hex(&self, point: Point2) -> FractionalHex {
        // Undo the translation then the scaling. A zero scale component will
        // spit out inf/NaN here, which we intentionally let through.
        let unscaled = Vector2::from(point - self.origin)
            .component_div(&Vector2::from(self.scale));
        let axial = self.orientation.backward_matrix() * unscaled;
        FractionalHex::new(axial.x, axial.y)
    }

    /// Get the offset from the center of any tile to one of its corners, in
    /// this layout's scale. The origin is not applied.
    ///
    /// Corners are numbered starting from the orientation's start angle, and
    /// the index isn't range-checked: any integer gives a point on the tile's
    /// circumscribed ellipse, so `6` is the same corner as `0`.
    pub fn hex_corner_offset(&self, corner: i32) -> Point2 {
        let angle = 2.0
            * std::f64::consts::PI
            * (self.orientation.start_angle - f64::from(corner))
            / 6.0;
        Point2::new(self.scale.x * angle.cos(), self.scale.y * angle.sin())
    }

    /// Get all 6 corners of a tile, in pixel space. Corners are listed in
    /// order of index, 0 through 5, so the returned list traces the boundary
    /// of the hexagon.
    pub fn hexagon_corners<T: Into<f64>>(
        &self,
        hex: impl HexCoordinate<Component = T>,
    ) -> [Point2; 6] {
        let center = self.hex_to_point(hex);
        std::array::from_fn(|i| center + self.hex_corner_offset(i as i32))
    }
}
