use crate::{layout::OrientationKind, Point2};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a [Layout](crate::Layout). This is the
/// serializable counterpart to [Layout::new](crate::Layout::new), for when the
/// layout comes from a file or some other external source. Use
/// [Layout::from_config](crate::Layout::from_config) to turn it into a layout.
///
/// Any field left out of the serialized form falls back to its default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which way the tiles point. See [OrientationKind].
    pub orientation: OrientationKind,

    /// Scale factor applied to the canonical hexagon (vertices on the unit
    /// circle), independently along each axis. This is also the distance from
    /// a tile's center to its corners along that axis.
    ///
    /// Zero and negative values are allowed. Negative values mirror the grid,
    /// zero collapses it, which makes pixel-to-hex conversion produce
    /// infinities/NaNs. Both components must be finite though.
    #[validate(custom = "validate_finite")]
    pub scale: Point2,

    /// The pixel location of the center of tile `(0, 0)`. Both components must
    /// be finite.
    #[validate(custom = "validate_finite")]
    pub origin: Point2,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            scale: Point2::new(1.0, 1.0),
            origin: Point2::ORIGIN,
        }
    }
}

fn validate_finite(point: &Point2) -> Result<(), ValidationError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
