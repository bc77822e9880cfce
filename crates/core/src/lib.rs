//! hexlayout maps hexagon tile grids onto pixel space. Given a [Layout], you
//! can find the pixel at the center of any tile, the six corners of that
//! tile, or which (fractional) tile position a pixel falls on. Drawing,
//! storing tiles, and hex arithmetic are all left to you.
//!
//! ```
//! use hexlayout::{HexCoordinate, HexPoint, Layout, Orientation, Point2};
//!
//! let layout = Layout::new(Orientation::FLAT, 10.0, 10.0, Point2::ORIGIN);
//! let center = layout.hex_to_point(HexPoint::new(2, -1));
//! let corners = layout.hexagon_corners(HexPoint::new(2, -1));
//! println!("{} {:?}", center, corners);
//!
//! // And back the other way
//! let hex = layout.point_to_hex(center);
//! assert!((hex.q() - 2.0).abs() < 1e-9);
//! ```
//!
//! See [crate::hex] for details on the coordinate systems involved.

pub mod hex;
mod layout;

pub use crate::{
    hex::{FractionalHex, HexCoordinate, HexPoint},
    layout::{
        config::LayoutConfig,
        unit::{PixelPoint, Point2},
        Layout, Orientation, OrientationKind,
    },
};
