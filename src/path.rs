//! Compound geometric paths of lines and Bézier curves.
//!
//! A [`Path`] holds one or more contours as a verb stream plus a parallel
//! point buffer.  Each verb consumes a fixed number of points: `Move` and
//! `Line` one, `Quad` two, `Cubic` three, `Close` none.  Paths are built
//! incrementally (`move_to`, `line_to`, ...), from derived shapes
//! (`add_rect`, `add_oval`, `add_round_rect`, `add_arc`), or by replaying
//! another path, and can be transformed through a [`Matrix`].
//!
//! Consumption happens through [`PathIter`](crate::iter::PathIter), which
//! replays the stream with the canonical implicit-move and auto-close
//! fixups applied.

use std::cell::Cell;

use tinyvec::TinyVec;

use crate::arc;
use crate::error::GeometryError;
use crate::iter::{PathEvent, PathIter};
use crate::matrix::Matrix;
use crate::path2d_log;
use crate::point::Point;
use crate::rect::Rect;

// Control-point offset used by the uniform round-rect corners; truncated a
// digit shorter than the oval/arc constant, which the verb streams preserve.
const ROUND_RECT_KAPPA: f64 = 0.552_284_8;

/// A tagged operation in a path's command stream.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Starts a new contour; consumes 1 point.
    #[default]
    Move,
    /// A straight segment; consumes 1 point.
    Line,
    /// A quadratic Bézier segment; consumes 2 points.
    Quad,
    /// A cubic Bézier segment; consumes 3 points.
    Cubic,
    /// Closes the current contour; consumes no points.
    Close,
}

/// How the interior of a path is computed.
///
/// Only [`FillType::Winding`] is honored by the rendering surface; the
/// other variants are carried on the path but not applied downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillType {
    /// Inside is a non-zero sum of signed edge crossings.
    Winding,
    /// Inside is an odd number of edge crossings.
    EvenOdd,
    /// Same as winding, but draws outside of the path.
    InverseWinding,
    /// Same as even-odd, but draws outside of the path.
    InverseEvenOdd,
}

impl FillType {
    /// Returns true for the two inverse variants.
    pub fn is_inverse(self) -> bool {
        matches!(self, FillType::InverseWinding | FillType::InverseEvenOdd)
    }

    fn toggled_inverse(self) -> FillType {
        match self {
            FillType::Winding => FillType::InverseWinding,
            FillType::EvenOdd => FillType::InverseEvenOdd,
            FillType::InverseWinding => FillType::Winding,
            FillType::InverseEvenOdd => FillType::EvenOdd,
        }
    }
}

/// Winding direction for closed contours added by the shape builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
}

/// A compound path of straight segments, quadratic curves, and cubic
/// curves.
#[derive(Debug, Clone)]
pub struct Path {
    verbs: TinyVec<[Verb; 32]>,
    points: TinyVec<[Point; 32]>,
    fill_type: FillType,
    bounds: Cell<Rect>,
    bounds_dirty: Cell<bool>,
}

impl Default for Path {
    #[inline]
    fn default() -> Path {
        Path::new()
    }
}

impl Path {
    /// Creates an empty path with the winding fill type.
    pub fn new() -> Path {
        Path {
            verbs: TinyVec::default(),
            points: TinyVec::default(),
            fill_type: FillType::Winding,
            bounds: Cell::new(Rect::default()),
            bounds_dirty: Cell::new(true),
        }
    }

    /// Removes all lines and curves, releasing the storage.  The fill type
    /// is unchanged.
    pub fn reset(&mut self) {
        self.verbs = TinyVec::default();
        self.points = TinyVec::default();
        self.bounds_dirty.set(true);
    }

    /// Removes all lines and curves but keeps the allocated storage for
    /// reuse.  The fill type is unchanged.
    pub fn rewind(&mut self) {
        self.verbs.clear();
        self.points.clear();
        self.bounds_dirty.set(true);
    }

    /// Replaces the contents of this path with a copy of `src`.
    pub fn set_from(&mut self, src: &Path) {
        self.verbs = src.verbs.clone();
        self.points = src.points.clone();
        self.fill_type = src.fill_type;
        self.bounds.set(src.bounds.get());
        self.bounds_dirty.set(src.bounds_dirty.get());
    }

    /// Returns true if the path contains no lines or curves.
    pub fn is_empty(&self) -> bool {
        let count = self.verbs.len();
        count == 0 || (count == 1 && self.verbs[0] == Verb::Move)
    }

    /// Returns the path's fill type.
    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    /// Sets the path's fill type.
    ///
    /// The rendering surface always fills with the winding rule; other
    /// values are stored and reported but not honored downstream.
    pub fn set_fill_type(&mut self, ft: FillType) {
        if ft != FillType::Winding {
            path2d_log!("only the winding fill rule is honored by the rendering surface");
        }
        self.fill_type = ft;
    }

    /// Returns true if the fill type is one of the inverse variants.
    pub fn is_inverse_fill_type(&self) -> bool {
        self.fill_type.is_inverse()
    }

    /// Toggles the inverse state of the fill type.
    pub fn toggle_inverse_fill_type(&mut self) {
        self.fill_type = self.fill_type.toggled_inverse();
    }

    /// Returns the last point of the path, or the origin if it is empty.
    pub fn last_point(&self) -> Point {
        self.points.last().copied().unwrap_or_default()
    }

    /// Overwrites the last point of the path; starts a contour there if
    /// the path is empty.
    pub fn set_last_point(&mut self, x: f64, y: f64) {
        if self.points.is_empty() {
            self.move_to(x, y);
        } else {
            let last = self.points.len() - 1;
            self.points[last] = Point::new(x, y);
            self.bounds_dirty.set(true);
        }
    }

    /// Returns the bounding box of the path's control points.
    ///
    /// With 0 or 1 points the bounds are all zero.  The value is cached
    /// and recomputed lazily after mutations.
    pub fn bounds(&self) -> Rect {
        if self.bounds_dirty.get() {
            let b = if self.points.len() > 1 {
                let first = self.points[0];
                let mut r = Rect::new(first.x, first.y, first.x, first.y);
                for p in self.points[1..].iter() {
                    r = r.union(&Rect::new(p.x, p.y, p.x, p.y));
                }
                r
            } else {
                Rect::default()
            };
            self.bounds.set(b);
            self.bounds_dirty.set(false);
        }
        self.bounds.get()
    }

    /// The raw verb stream, without iteration fixups.
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// The raw point buffer.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the path's drawing commands with implicit-move and
    /// auto-close fixups applied.
    pub fn iter(&self) -> PathIter<'_> {
        PathIter::new(self, false)
    }

    /// Starts a new contour at `(x, y)`.
    ///
    /// Consecutive `move_to` calls collapse: the previous `Move`'s point is
    /// overwritten instead of a new verb being appended.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let pt = Point::new(x, y);

        if self.verbs.last() == Some(&Verb::Move) {
            let last = self.points.len() - 1;
            self.points[last] = pt;
        } else {
            self.points.push(pt);
            self.verbs.push(Verb::Move);
        }

        self.bounds_dirty.set(true);
    }

    /// Starts a new contour displaced `(dx, dy)` from the last point.
    pub fn r_move_to(&mut self, dx: f64, dy: f64) {
        let pt = self.last_point();
        self.move_to(pt.x + dx, pt.y + dy);
    }

    // A line/quad/cubic on a path with no contour yet starts one at the
    // origin.
    fn ensure_contour(&mut self) {
        if self.verbs.is_empty() {
            self.points.push(Point::default());
            self.verbs.push(Verb::Move);
        }
    }

    /// Adds a straight segment to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.ensure_contour();
        self.points.push(Point::new(x, y));
        self.verbs.push(Verb::Line);
        self.bounds_dirty.set(true);
    }

    /// Adds a straight segment displaced `(dx, dy)` from the last point.
    pub fn r_line_to(&mut self, dx: f64, dy: f64) {
        let pt = self.last_point();
        self.line_to(pt.x + dx, pt.y + dy);
    }

    /// Adds a quadratic Bézier through the control point `(x1, y1)` ending
    /// at `(x2, y2)`.
    pub fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ensure_contour();
        self.points.push(Point::new(x1, y1));
        self.points.push(Point::new(x2, y2));
        self.verbs.push(Verb::Quad);
        self.bounds_dirty.set(true);
    }

    /// Adds a quadratic Bézier with coordinates relative to the last point.
    pub fn r_quad_to(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) {
        let pt = self.last_point();
        self.quad_to(pt.x + dx1, pt.y + dy1, pt.x + dx2, pt.y + dy2);
    }

    /// Adds a cubic Bézier through the control points `(x1, y1)` and
    /// `(x2, y2)`, ending at `(x3, y3)`.
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.ensure_contour();
        self.points.push(Point::new(x1, y1));
        self.points.push(Point::new(x2, y2));
        self.points.push(Point::new(x3, y3));
        self.verbs.push(Verb::Cubic);
        self.bounds_dirty.set(true);
    }

    /// Adds a cubic Bézier with coordinates relative to the last point.
    pub fn r_cubic_to(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx3: f64, dy3: f64) {
        let pt = self.last_point();
        self.cubic_to(
            pt.x + dx1,
            pt.y + dy1,
            pt.x + dx2,
            pt.y + dy2,
            pt.x + dx3,
            pt.y + dy3,
        );
    }

    /// Closes the current contour.
    ///
    /// Dropped silently unless the previous verb is a line or curve: a
    /// close right after a bare `Move` has no geometry to close.
    pub fn close(&mut self) {
        match self.verbs.last().copied() {
            Some(Verb::Line) | Some(Verb::Quad) | Some(Verb::Cubic) => {
                self.verbs.push(Verb::Close);
            }
            _ => (),
        }
    }

    /// Appends an arc of the oval bounded by `oval`, starting at
    /// `start_angle` degrees and sweeping `sweep_angle` degrees clockwise.
    ///
    /// The arc's start is connected to the current contour with a line,
    /// unless the path is empty or `force_move_to` is set, in which case a
    /// new contour starts there.
    pub fn arc_to(&mut self, oval: &Rect, start_angle: f64, sweep_angle: f64, force_move_to: bool) {
        if oval.width() < 0.0 || oval.height() < 0.0 {
            return;
        }

        let force_move_to = force_move_to || self.verbs.is_empty();

        // the quadrant table runs counter-clockwise; sweeps here are
        // clockwise-positive
        let points = arc::build_cubic_points(oval, start_angle, -sweep_angle);

        if force_move_to {
            self.move_to(points[0].x, points[0].y);
        } else {
            self.line_to(points[0].x, points[0].y);
        }

        let mut i = 1;
        while i + 3 <= points.len() {
            self.cubic_to(
                points[i].x,
                points[i].y,
                points[i + 1].x,
                points[i + 1].y,
                points[i + 2].x,
                points[i + 2].y,
            );
            i += 3;
        }
    }

    /// Adds a closed rectangle contour.
    pub fn add_rect(&mut self, rect: &Rect, dir: Direction) {
        self.add_rect_edges(rect.x0, rect.y0, rect.x1, rect.y1, dir);
    }

    /// Adds a closed rectangle contour from its edge coordinates.
    pub fn add_rect_edges(&mut self, left: f64, top: f64, right: f64, bottom: f64, dir: Direction) {
        if !(right - left > 0.0 && bottom - top > 0.0) {
            return;
        }

        self.move_to(left, top);
        if dir == Direction::Ccw {
            self.line_to(left, bottom);
            self.line_to(right, bottom);
            self.line_to(right, top);
        } else {
            self.line_to(right, top);
            self.line_to(right, bottom);
            self.line_to(left, bottom);
        }
        self.close();
    }

    /// Adds a closed oval contour: four cubic segments approximating the
    /// ellipse inscribed in `oval`, starting at the rightmost point.
    pub fn add_oval(&mut self, oval: &Rect, dir: Direction) {
        if !(oval.width() > 0.0 && oval.height() > 0.0) {
            return;
        }

        let cx = oval.center_x();
        let cy = oval.center_y();
        let rx = oval.width() / 2.0;
        let ry = oval.height() / 2.0;
        let sx = rx * arc::KAPPA;
        let sy = ry * arc::KAPPA;

        self.move_to(cx + rx, cy);
        if dir == Direction::Ccw {
            self.cubic_to(cx + rx, cy - sy, cx + sx, cy - ry, cx, cy - ry);
            self.cubic_to(cx - sx, cy - ry, cx - rx, cy - sy, cx - rx, cy);
            self.cubic_to(cx - rx, cy + sy, cx - sx, cy + ry, cx, cy + ry);
            self.cubic_to(cx + sx, cy + ry, cx + rx, cy + sy, cx + rx, cy);
        } else {
            self.cubic_to(cx + rx, cy + sy, cx + sx, cy + ry, cx, cy + ry);
            self.cubic_to(cx - sx, cy + ry, cx - rx, cy + sy, cx - rx, cy);
            self.cubic_to(cx - rx, cy - sy, cx - sx, cy - ry, cx, cy - ry);
            self.cubic_to(cx + sx, cy - ry, cx + rx, cy - sy, cx + rx, cy);
        }
        self.close();
    }

    /// Adds a closed circle contour.  A non-positive radius is a no-op.
    pub fn add_circle(&mut self, x: f64, y: f64, radius: f64, dir: Direction) {
        if radius > 0.0 {
            let rect = Rect::new(x - radius, y - radius, x + radius, y + radius);
            self.add_oval(&rect, dir);
        }
    }

    /// Adds the arc of `oval` from `start_angle` sweeping `sweep_angle`
    /// degrees as a new closed contour.
    ///
    /// A sweep of 360 degrees or more degenerates to [`Path::add_oval`];
    /// an empty oval or zero sweep is a no-op.
    pub fn add_arc(&mut self, oval: &Rect, start_angle: f64, sweep_angle: f64) {
        if !(oval.width() > 0.0 && oval.height() > 0.0) || sweep_angle == 0.0 {
            return;
        }

        if sweep_angle >= 360.0 || sweep_angle <= -360.0 {
            let dir = if sweep_angle > 0.0 {
                Direction::Cw
            } else {
                Direction::Ccw
            };
            self.add_oval(oval, dir);
            return;
        }

        let points = arc::build_cubic_points(oval, start_angle, sweep_angle);
        self.move_to(points[0].x, points[0].y);

        let mut i = 1;
        while i + 3 <= points.len() {
            self.cubic_to(
                points[i].x,
                points[i].y,
                points[i + 1].x,
                points[i + 1].y,
                points[i + 2].x,
                points[i + 2].y,
            );
            i += 3;
        }

        self.close();
    }

    /// Adds a closed round-rectangle contour with uniform corner radii.
    ///
    /// When both radii reach half of the corresponding rectangle dimension
    /// the shape degenerates to an oval; when only one does, that radius is
    /// clamped to the half-dimension and the flat edges on the other axis
    /// are dropped.
    pub fn add_round_rect(&mut self, rect: &Rect, rx: f64, ry: f64, dir: Direction) {
        let half_w = rect.width() / 2.0;
        let half_h = rect.height() / 2.0;

        if half_w <= 0.0 || half_h <= 0.0 {
            return;
        }

        let skip_hori = rx >= half_w;
        let skip_vert = ry >= half_h;

        if skip_hori && skip_vert {
            self.add_oval(rect, dir);
            return;
        }

        let rx = if skip_hori { half_w } else { rx };
        let ry = if skip_vert { half_h } else { ry };

        let sx = rx * ROUND_RECT_KAPPA;
        let sy = ry * ROUND_RECT_KAPPA;

        let (left, top, right, bottom) = (rect.x0, rect.y0, rect.x1, rect.y1);

        self.move_to(right - rx, top);
        if dir == Direction::Ccw {
            if !skip_hori {
                self.line_to(left + rx, top); // top
            }
            self.cubic_to(
                left + rx - sx,
                top,
                left,
                top + ry - sy,
                left,
                top + ry,
            ); // top-left
            if !skip_vert {
                self.line_to(left, bottom - ry); // left
            }
            self.cubic_to(
                left,
                bottom - ry + sy,
                left + rx - sx,
                bottom,
                left + rx,
                bottom,
            ); // bot-left
            if !skip_hori {
                self.line_to(right - rx, bottom); // bottom
            }
            self.cubic_to(
                right - rx + sx,
                bottom,
                right,
                bottom - ry + sy,
                right,
                bottom - ry,
            ); // bot-right
            if !skip_vert {
                self.line_to(right, top + ry);
            }
            self.cubic_to(
                right,
                top + ry - sy,
                right - rx + sx,
                top,
                right - rx,
                top,
            ); // top-right
        } else {
            self.cubic_to(
                right - rx + sx,
                top,
                right,
                top + ry - sy,
                right,
                top + ry,
            ); // top-right
            if !skip_vert {
                self.line_to(right, bottom - ry);
            }
            self.cubic_to(
                right,
                bottom - ry + sy,
                right - rx + sx,
                bottom,
                right - rx,
                bottom,
            ); // bot-right
            if !skip_hori {
                self.line_to(left + rx, bottom); // bottom
            }
            self.cubic_to(
                left + rx - sx,
                bottom,
                left,
                bottom - ry + sy,
                left,
                bottom - ry,
            ); // bot-left
            if !skip_vert {
                self.line_to(left, top + ry); // left
            }
            self.cubic_to(
                left,
                top + ry - sy,
                left + rx - sx,
                top,
                left + rx,
                top,
            ); // top-left
            if !skip_hori {
                self.line_to(right - rx, top); // top
            }
        }
        self.close();
    }

    /// Adds a closed round-rectangle contour with per-corner radii.
    ///
    /// `radii` holds 4 `[x, y]` pairs ordered top-left, top-right,
    /// bottom-right, bottom-left; fewer than 8 values is an error.  The
    /// straight edge next to a corner is omitted when the adjacent radius
    /// consumes it entirely.
    pub fn add_round_rect_radii(
        &mut self,
        rect: &Rect,
        radii: &[f64],
        dir: Direction,
    ) -> Result<(), GeometryError> {
        if radii.len() < 8 {
            return Err(GeometryError::CornerRadii(radii.len()));
        }

        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            return Ok(());
        }

        if dir == Direction::Cw {
            self.add_corner_arc(rect, radii[0], radii[1], 180, dir, true);
            self.add_corner_arc(rect, radii[2], radii[3], 270, dir, false);
            self.add_corner_arc(rect, radii[4], radii[5], 0, dir, false);
            self.add_corner_arc(rect, radii[6], radii[7], 90, dir, false);
        } else {
            self.add_corner_arc(rect, radii[0], radii[1], 180, dir, true);
            self.add_corner_arc(rect, radii[6], radii[7], 90, dir, false);
            self.add_corner_arc(rect, radii[4], radii[5], 0, dir, false);
            self.add_corner_arc(rect, radii[2], radii[3], 270, dir, false);
        }
        self.close();

        Ok(())
    }

    fn add_corner_arc(
        &mut self,
        rect: &Rect,
        rx: f64,
        ry: f64,
        start_angle: i32,
        dir: Direction,
        force_move_to: bool,
    ) {
        let rx = rx.min(rect.width() / 2.0);
        let ry = ry.min(rect.height() / 2.0);

        let r = Rect::new(-rx, -ry, rx, ry);
        let r = match start_angle {
            0 => r.translate((rect.x1 - r.x1, rect.y1 - r.y1)),
            90 => r.translate((rect.x0 - r.x0, rect.y1 - r.y1)),
            180 => r.translate((rect.x0 - r.x0, rect.y0 - r.y0)),
            270 => r.translate((rect.x1 - r.x1, rect.y0 - r.y0)),
            _ => {
                path2d_log!("unexpected corner start angle {}", start_angle);
                return;
            }
        };

        let mut start = f64::from(start_angle);
        let mut sweep = 90.0;
        if dir == Direction::Ccw {
            start += sweep;
            sweep = -sweep;
        }

        self.arc_to(&r, start, sweep, force_move_to);
    }

    /// Appends a copy of `src` to this path.
    pub fn add_path(&mut self, src: &Path) {
        self.add_path_matrix(src, &Matrix::new());
    }

    /// Appends a copy of `src`, offset by `(dx, dy)`.
    pub fn add_path_offset(&mut self, src: &Path, dx: f64, dy: f64) {
        let mut matrix = Matrix::new();
        matrix.set_translate(dx, dy);
        self.add_path_matrix(src, &matrix);
    }

    /// Appends a copy of `src` with every point mapped through `matrix`.
    ///
    /// This replays `src`'s command stream through this path's construction
    /// API, so move-collapsing and implicit-move rules apply again.
    pub fn add_path_matrix(&mut self, src: &Path, matrix: &Matrix) {
        for event in PathIter::new(src, false) {
            match event {
                PathEvent::Move { to } => {
                    let (x, y) = matrix.map_point(to.x, to.y);
                    self.move_to(x, y);
                }
                PathEvent::Line { to, .. } => {
                    let (x, y) = matrix.map_point(to.x, to.y);
                    self.line_to(x, y);
                }
                PathEvent::Quad { ctrl, to, .. } => {
                    let (x1, y1) = matrix.map_point(ctrl.x, ctrl.y);
                    let (x2, y2) = matrix.map_point(to.x, to.y);
                    self.quad_to(x1, y1, x2, y2);
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    let (x1, y1) = matrix.map_point(ctrl1.x, ctrl1.y);
                    let (x2, y2) = matrix.map_point(ctrl2.x, ctrl2.y);
                    let (x3, y3) = matrix.map_point(to.x, to.y);
                    self.cubic_to(x1, y1, x2, y2, x3, y3);
                }
                PathEvent::Close => self.close(),
            }
        }
    }

    /// Translates the path by `(dx, dy)` in place.
    pub fn offset(&mut self, dx: f64, dy: f64) {
        let mut matrix = Matrix::new();
        matrix.set_translate(dx, dy);
        self.transform(&matrix);
    }

    /// Writes a copy of this path translated by `(dx, dy)` into `dst`.
    pub fn offset_to(&self, dx: f64, dy: f64, dst: &mut Path) {
        let mut matrix = Matrix::new();
        matrix.set_translate(dx, dy);
        self.transform_to(&matrix, dst);
    }

    /// Maps every point of the path through `matrix`, in place.
    ///
    /// Perspective matrices are not supported here; the path is left
    /// unchanged.
    pub fn transform(&mut self, matrix: &Matrix) {
        if matrix.has_perspective() {
            path2d_log!("perspective path transforms are not supported; path left unchanged");
            return;
        }

        self.transform_bounds(matrix, None);
        matrix.map_points(&mut self.points);
    }

    /// Writes a copy of this path with every point mapped through `matrix`
    /// into `dst`.
    ///
    /// Perspective matrices are not supported here; `dst` is left
    /// untouched.
    pub fn transform_to(&self, matrix: &Matrix, dst: &mut Path) {
        if matrix.has_perspective() {
            path2d_log!("perspective path transforms are not supported; path left unchanged");
            return;
        }

        self.transform_bounds(matrix, Some(dst));

        dst.verbs = self.verbs.clone();
        dst.fill_type = self.fill_type;
        dst.points = self.points.clone();
        matrix.map_points(&mut dst.points);
    }

    // Valid bounds survive a rect-preserving transform by direct mapping;
    // anything else leaves them dirty for recomputation from the mapped
    // points.
    fn transform_bounds(&self, matrix: &Matrix, dst: Option<&Path>) {
        let target = dst.unwrap_or(self);

        if !self.bounds_dirty.get() && matrix.rect_stays_rect() && self.points.len() > 1 {
            let (mapped, _) = matrix.map_rect(&self.bounds.get());
            target.bounds.set(mapped);
            target.bounds_dirty.set(false);
        } else {
            target.bounds_dirty.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_surface;
    use crate::float_eq::ApproxEqSurface;

    fn event_end_points(path: &Path) -> Vec<Point> {
        path.iter()
            .filter_map(|ev| match ev {
                PathEvent::Move { to } => Some(to),
                PathEvent::Line { to, .. } => Some(to),
                PathEvent::Quad { to, .. } => Some(to),
                PathEvent::Cubic { to, .. } => Some(to),
                PathEvent::Close => None,
            })
            .collect()
    }

    #[test]
    fn consecutive_move_tos_collapse() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.move_to(5.0, 5.0);
        path.line_to(10.0, 10.0);

        assert_eq!(path.verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(path.points()[0], Point::new(5.0, 5.0));
        assert_eq!(path.points()[1], Point::new(10.0, 10.0));
    }

    #[test]
    fn segments_on_empty_path_start_at_origin() {
        let mut path = Path::new();
        path.line_to(10.0, 0.0);
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(path.points()[0], Point::default());

        let mut path = Path::new();
        path.quad_to(1.0, 1.0, 2.0, 0.0);
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Quad]);

        let mut path = Path::new();
        path.cubic_to(1.0, 1.0, 2.0, -1.0, 3.0, 0.0);
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Cubic]);
    }

    #[test]
    fn relative_ops_use_last_point() {
        let mut path = Path::new();
        path.move_to(10.0, 20.0);
        path.r_line_to(5.0, 5.0);
        path.r_move_to(1.0, 1.0);
        path.r_quad_to(1.0, 0.0, 2.0, 0.0);

        assert_eq!(
            path.verbs(),
            &[Verb::Move, Verb::Line, Verb::Move, Verb::Quad]
        );
        assert_eq!(path.points()[1], Point::new(15.0, 25.0));
        assert_eq!(path.points()[2], Point::new(16.0, 26.0));
        assert_eq!(path.points()[4], Point::new(18.0, 26.0));
    }

    #[test]
    fn close_requires_geometry() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.close();
        assert_eq!(path.verbs(), &[Verb::Move]);

        path.line_to(2.0, 2.0);
        path.close();
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Line, Verb::Close]);

        // a second close has no new geometry to close
        path.close();
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Line, Verb::Close]);
    }

    #[test]
    fn empty_and_trailing_move_paths() {
        let mut path = Path::new();
        assert!(path.is_empty());
        path.move_to(1.0, 1.0);
        assert!(path.is_empty());
        path.line_to(2.0, 2.0);
        assert!(!path.is_empty());
    }

    #[test]
    fn reset_and_rewind_clear_content() {
        let mut path = Path::new();
        path.add_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), Direction::Cw);
        path.set_fill_type(FillType::EvenOdd);

        path.rewind();
        assert!(path.is_empty());
        assert_eq!(path.fill_type(), FillType::EvenOdd);

        path.add_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), Direction::Cw);
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.fill_type(), FillType::EvenOdd);
    }

    #[test]
    fn fill_type_inverse_toggling() {
        let mut path = Path::new();
        assert_eq!(path.fill_type(), FillType::Winding);
        assert!(!path.is_inverse_fill_type());

        path.toggle_inverse_fill_type();
        assert_eq!(path.fill_type(), FillType::InverseWinding);
        assert!(path.is_inverse_fill_type());

        path.set_fill_type(FillType::EvenOdd);
        path.toggle_inverse_fill_type();
        assert_eq!(path.fill_type(), FillType::InverseEvenOdd);
    }

    #[test]
    fn set_last_point_overwrites_or_starts() {
        let mut path = Path::new();
        path.set_last_point(3.0, 4.0);
        assert_eq!(path.verbs(), &[Verb::Move]);
        assert_eq!(path.last_point(), Point::new(3.0, 4.0));

        path.line_to(10.0, 10.0);
        path.set_last_point(7.0, 8.0);
        assert_eq!(path.last_point(), Point::new(7.0, 8.0));
    }

    #[test]
    fn rect_windings() {
        let mut cw = Path::new();
        cw.add_rect_edges(0.0, 0.0, 4.0, 2.0, Direction::Cw);
        assert_eq!(
            cw.verbs(),
            &[Verb::Move, Verb::Line, Verb::Line, Verb::Line, Verb::Close]
        );
        assert_eq!(cw.points()[1], Point::new(4.0, 0.0));

        let mut ccw = Path::new();
        ccw.add_rect_edges(0.0, 0.0, 4.0, 2.0, Direction::Ccw);
        assert_eq!(ccw.points()[1], Point::new(0.0, 2.0));

        let mut degenerate = Path::new();
        degenerate.add_rect_edges(5.0, 5.0, 5.0, 10.0, Direction::Cw);
        assert!(degenerate.is_empty());
    }

    #[test]
    fn oval_is_one_move_four_cubics_and_a_close() {
        for dir in [Direction::Cw, Direction::Ccw] {
            let mut path = Path::new();
            path.add_oval(&Rect::new(0.0, 0.0, 20.0, 10.0), dir);
            assert_eq!(
                path.verbs(),
                &[
                    Verb::Move,
                    Verb::Cubic,
                    Verb::Cubic,
                    Verb::Cubic,
                    Verb::Cubic,
                    Verb::Close
                ]
            );
            assert_eq!(path.points()[0], Point::new(20.0, 5.0));
        }
    }

    #[test]
    fn circle_requires_positive_radius() {
        let mut path = Path::new();
        path.add_circle(5.0, 5.0, 0.0, Direction::Cw);
        assert!(path.is_empty());
        path.add_circle(5.0, 5.0, -1.0, Direction::Cw);
        assert!(path.is_empty());

        path.add_circle(5.0, 5.0, 2.0, Direction::Cw);
        assert_eq!(path.verbs().len(), 6);
        assert_eq!(path.points()[0], Point::new(7.0, 5.0));
    }

    #[test]
    fn fully_rounded_round_rect_is_an_oval() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);

        let mut round_rect = Path::new();
        round_rect.add_round_rect(&rect, 10.0, 5.0, Direction::Cw);

        let mut oval = Path::new();
        oval.add_oval(&rect, Direction::Cw);

        assert_eq!(round_rect.verbs(), oval.verbs());
        assert_eq!(round_rect.points(), oval.points());
    }

    #[test]
    fn round_rect_alternates_corners_and_edges() {
        let mut path = Path::new();
        path.add_round_rect(&Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, 10.0, Direction::Cw);

        assert_eq!(
            path.verbs(),
            &[
                Verb::Move,
                Verb::Cubic,
                Verb::Line,
                Verb::Cubic,
                Verb::Line,
                Verb::Cubic,
                Verb::Line,
                Verb::Cubic,
                Verb::Line,
                Verb::Close
            ]
        );
        assert_eq!(path.points()[0], Point::new(90.0, 0.0));
    }

    #[test]
    fn one_axis_rounding_drops_those_edges() {
        let mut path = Path::new();
        // ry reaches half the height, so the vertical edges disappear
        path.add_round_rect(&Rect::new(0.0, 0.0, 100.0, 20.0), 10.0, 10.0, Direction::Cw);

        assert_eq!(
            path.verbs(),
            &[
                Verb::Move,
                Verb::Cubic,
                Verb::Cubic,
                Verb::Line,
                Verb::Cubic,
                Verb::Cubic,
                Verb::Line,
                Verb::Close
            ]
        );
    }

    #[test]
    fn per_corner_radii_require_eight_values() {
        let mut path = Path::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);

        assert_eq!(
            path.add_round_rect_radii(&rect, &[1.0; 7], Direction::Cw),
            Err(GeometryError::CornerRadii(7))
        );
        assert!(path.is_empty());

        path.add_round_rect_radii(&rect, &[10.0; 8], Direction::Cw)
            .unwrap();
        assert!(!path.is_empty());
        assert_eq!(path.verbs().last(), Some(&Verb::Close));
    }

    #[test]
    fn add_arc_large_sweep_degenerates_to_oval() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let mut arc_path = Path::new();
        arc_path.add_arc(&rect, 45.0, 400.0);

        let mut oval = Path::new();
        oval.add_oval(&rect, Direction::Cw);

        assert_eq!(arc_path.verbs(), oval.verbs());
        assert_eq!(arc_path.points(), oval.points());

        let mut noop = Path::new();
        noop.add_arc(&rect, 45.0, 0.0);
        assert!(noop.is_empty());
        noop.add_arc(&Rect::default(), 45.0, 90.0);
        assert!(noop.is_empty());
    }

    #[test]
    fn arc_to_connects_or_starts_contours() {
        let oval = Rect::new(-1.0, -1.0, 1.0, 1.0);

        let mut path = Path::new();
        path.arc_to(&oval, 0.0, 90.0, false);
        // empty path: the arc starts its own contour
        assert_eq!(path.verbs()[0], Verb::Move);
        let start = path.points()[0];
        assert_approx_eq_surface!(start.x, 1.0);
        assert_approx_eq_surface!(start.y, 0.0);

        let mut path = Path::new();
        path.move_to(5.0, 5.0);
        path.line_to(6.0, 5.0);
        path.arc_to(&oval, 0.0, 90.0, false);
        // non-empty path: connected with a line to the arc start
        assert_eq!(path.verbs()[2], Verb::Line);

        let mut path = Path::new();
        path.move_to(5.0, 5.0);
        path.line_to(6.0, 5.0);
        path.arc_to(&oval, 0.0, 90.0, true);
        assert_eq!(path.verbs()[2], Verb::Move);
    }

    #[test]
    fn add_path_replays_and_offsets() {
        let mut src = Path::new();
        src.move_to(0.0, 0.0);
        src.line_to(10.0, 0.0);
        src.close();

        let mut dst = Path::new();
        dst.move_to(100.0, 100.0);
        dst.add_path_offset(&src, 5.0, 7.0);

        // the replayed Move collapses into dst's bare Move, and the
        // iterator's synthetic close line becomes a real Line verb
        assert_eq!(
            dst.verbs(),
            &[Verb::Move, Verb::Line, Verb::Line, Verb::Close]
        );
        assert_eq!(dst.points()[0], Point::new(5.0, 7.0));
        assert_eq!(dst.points()[1], Point::new(15.0, 7.0));
        assert_eq!(dst.points()[2], Point::new(5.0, 7.0));
    }

    #[test]
    fn bounds_cover_control_points() {
        let mut path = Path::new();
        assert_eq!(path.bounds(), Rect::default());

        path.move_to(1.0, 2.0);
        path.line_to(-3.0, 8.0);
        path.quad_to(10.0, -5.0, 4.0, 4.0);
        assert_eq!(path.bounds(), Rect::new(-3.0, -5.0, 10.0, 8.0));
    }

    #[test]
    fn transform_maps_points_and_bounds() {
        let mut path = Path::new();
        path.add_rect(&Rect::new(1.0, 1.0, 3.0, 2.0), Direction::Cw);
        let bounds = path.bounds();

        let mut m = Matrix::new();
        m.set_scale(2.0, 4.0);
        path.transform(&m);

        assert_eq!(path.points()[0], Point::new(2.0, 4.0));
        let (expected, _) = m.map_rect(&bounds);
        assert_eq!(path.bounds(), expected);
    }

    #[test]
    fn transform_to_copies_verbs_and_fill_type() {
        let mut src = Path::new();
        src.set_fill_type(FillType::EvenOdd);
        src.move_to(1.0, 1.0);
        src.line_to(2.0, 3.0);

        let mut m = Matrix::new();
        m.set_translate(10.0, 20.0);

        let mut dst = Path::new();
        src.transform_to(&m, &mut dst);

        assert_eq!(dst.verbs(), src.verbs());
        assert_eq!(dst.fill_type(), FillType::EvenOdd);
        assert_eq!(dst.points()[0], Point::new(11.0, 21.0));
        assert_eq!(dst.points()[1], Point::new(12.0, 23.0));
        // the source is untouched
        assert_eq!(src.points()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn perspective_transform_is_left_unapplied() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.line_to(2.0, 2.0);

        let mut m = Matrix::new();
        m.set_value(crate::matrix::MPERSP_0, 0.5);

        path.transform(&m);
        assert_eq!(path.points()[0], Point::new(1.0, 1.0));
        assert_eq!(path.points()[1], Point::new(2.0, 2.0));
    }

    #[test]
    fn offset_translates_all_points() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.line_to(2.0, 3.0);
        path.offset(10.0, -1.0);

        assert_eq!(path.points()[0], Point::new(11.0, 0.0));
        assert_eq!(path.points()[1], Point::new(12.0, 2.0));

        let mut dst = Path::new();
        path.offset_to(-10.0, 1.0, &mut dst);
        assert_eq!(dst.points()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn scaled_round_rect_iterates_scaled_points() {
        let mut path = Path::new();
        path.add_round_rect(&Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, 10.0, Direction::Cw);

        let mut m = Matrix::new();
        m.set_scale(2.0, 2.0);
        let mut scaled = Path::new();
        path.transform_to(&m, &mut scaled);

        let base = event_end_points(&path);
        let mapped = event_end_points(&scaled);
        assert_eq!(path.iter().count(), scaled.iter().count());
        assert_eq!(base.len(), mapped.len());

        for (b, s) in base.iter().zip(mapped.iter()) {
            assert_approx_eq_surface!(s.x, b.x * 2.0);
            assert_approx_eq_surface!(s.y, b.y * 2.0);
        }
    }
}
