//! Affine transforms and Bézier path geometry for canvas-backed 2D
//! rendering.
//!
//! This crate is the geometry core of a 2D graphics compatibility shim: it
//! reimplements a mobile graphics API's transform matrix and path model on
//! top of a retained-mode drawing surface.  The surface itself (a browser
//! canvas, a recording context, anything with move/line/curve/close plus
//! fill and stroke) stays outside the crate, reached through the
//! [`Surface`] trait.
//!
//! Two components form the core:
//!
//! * [`Matrix`], a 3x3 affine/perspective transform with cached
//!   classification for fast-path point mapping, composition, inversion,
//!   and rectangle/point/vector mapping.
//!
//! * [`Path`], an ordered verb stream plus point buffer describing one or
//!   more contours of lines and Bézier curves, with incremental
//!   construction, derived-shape builders that decompose into cubic
//!   segments, matrix transformation, and a replay iterator
//!   ([`PathIter`]) that emits canonical drawing commands.
//!
//! Client code builds a [`Path`], optionally transforms it through a
//! [`Matrix`], and hands it to the rendering boundary, which replays the
//! events into the external surface.
//!
//! # Example
//!
//! ```
//! use path2d::{Direction, Matrix, Path, PathEvent, Rect};
//!
//! // a 100x50 rounded rectangle with 10px corners
//! let mut path = Path::new();
//! path.add_round_rect(&Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, 10.0, Direction::Cw);
//!
//! // scale it up before handing it to the surface
//! let mut matrix = Matrix::new();
//! matrix.set_scale(2.0, 2.0);
//! path.transform(&matrix);
//!
//! for event in path.iter() {
//!     match event {
//!         PathEvent::Move { to } => { /* surface.move_to(to.x, to.y) */ }
//!         PathEvent::Line { to, .. } => { /* surface.line_to(to.x, to.y) */ }
//!         _ => { /* quads, cubics, closes */ }
//!     }
//! }
//! ```

mod arc;

pub mod error;
pub mod float_eq;
pub mod iter;
pub mod log;
pub mod matrix;
pub mod path;
pub mod point;
pub mod rect;
pub mod surface;

pub use crate::error::GeometryError;
pub use crate::iter::{PathEvent, PathIter};
pub use crate::matrix::{Matrix, ScaleToFit, TypeMask};
pub use crate::path::{Direction, FillType, Path, Verb};
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::surface::{PaintStyle, Surface};
