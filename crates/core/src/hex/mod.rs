//! This module holds the basic coordinate types of the hexagon grid.
//!
//! ## Coordinate Systems
//!
//! hexlayout deals with two different coordinate systems:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify tiles on an infinite hexagon grid. We use the
//! [axial coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! which is a projection of the cube coordinate system.
//!
//! Each tile is addressed by two components, `q` and `r`. The cube system has
//! a third component `s`, but **for every hex coordinate `q + r + s = 0`**,
//! so `s` can always be derived and is never stored on [HexPoint].
//!
//! Tile coordinates are integers. Converting a pixel back into hex space
//! generally lands somewhere _inside_ a tile rather than on its center, so
//! that conversion produces a [FractionalHex] with real-valued components.
//! Those components still satisfy `q + r + s = 0`. Snapping a fractional hex
//! to the tile that contains it is left to the caller.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates (see [crate::Point2]) are plain 2D cartesian points.
//! Converting between the two systems is the job of a [crate::Layout], which
//! fixes the orientation of the tiles, their size along each axis, and where
//! the tile `(0, 0)` sits in pixel space.
//!
//! #### Calculation
//!
//! Converting from hex coordinates to pixel coordinates is a single linear
//! transform:
//!
//! 1. Multiply `(q, r)` by the orientation's 2x2 forward matrix
//! 2. Scale each axis independently by the layout's scale
//! 3. Translate by the layout's origin
//!
//! The reverse conversion undoes each step in reverse order, using the
//! orientation's backward matrix (the inverse of the forward one).

mod unit;

pub use self::unit::*;
