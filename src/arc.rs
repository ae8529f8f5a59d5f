//! Converting elliptical arc sweeps into cubic Bézier segments.
//!
//! An arc over an oval's bounding rectangle is assembled from up to four
//! per-quadrant cubic segments.  Each quadrant uses the standard κ
//! control-point offset; when the arc starts or ends partway through a
//! quadrant, the quadrant cubic is subdivided on the matching parameter
//! interval.  The parameter for a given angle is found with two rounds of
//! Newton's method against the cubic's x(t) and y(t), starting from the
//! closed-form guess `angle / 90`.

use crate::point::Point;
use crate::rect::Rect;

/// Control-point offset factor for approximating a 90° circular arc with a
/// single cubic Bézier: `4 * (sqrt(2) - 1) / 3`.
pub(crate) const KAPPA: f64 = 0.552_284_749_8;

fn fuzzy_is_null(v: f64) -> bool {
    v.abs() < 0.00001
}

fn fuzzy_compare(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.00001 * a.abs().min(b.abs())
}

/// A cubic Bézier segment under subdivision.
#[derive(Debug, Default, Clone, Copy)]
struct Bezier {
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
}

impl Bezier {
    fn from_points(p1: Point, p2: Point, p3: Point, p4: Point) -> Bezier {
        Bezier { p1, p2, p3, p4 }
    }

    /// Extracts the sub-curve over the parameter interval `[t0, t1]`.
    fn on_interval(self, t0: f64, t1: f64) -> Bezier {
        if t0 == 0.0 && t1 == 1.0 {
            return self;
        }

        let mut bezier = self;
        let mut result = Bezier::default();
        bezier.parameter_split_left(t0, &mut result);
        let true_t = (t1 - t0) / (1.0 - t0);
        bezier.parameter_split_left(true_t, &mut result);

        result
    }

    /// De Casteljau split at `t`: `result` receives the left half, `self`
    /// becomes the right half.
    fn parameter_split_left(&mut self, t: f64, result: &mut Bezier) {
        result.p1 = self.p1;

        result.p2 = Point::new(
            self.p1.x + t * (self.p2.x - self.p1.x),
            self.p1.y + t * (self.p2.y - self.p1.y),
        );

        // temporary holding spot
        result.p3 = Point::new(
            self.p2.x + t * (self.p3.x - self.p2.x),
            self.p2.y + t * (self.p3.y - self.p2.y),
        );

        self.p3 = Point::new(
            self.p3.x + t * (self.p4.x - self.p3.x),
            self.p3.y + t * (self.p4.y - self.p3.y),
        );

        self.p2 = Point::new(
            result.p3.x + t * (self.p3.x - result.p3.x),
            result.p3.y + t * (self.p3.y - result.p3.y),
        );

        result.p3 = Point::new(
            result.p2.x + t * (result.p3.x - result.p2.x),
            result.p2.y + t * (result.p3.y - result.p2.y),
        );

        result.p4 = Point::new(
            result.p3.x + t * (self.p2.x - result.p3.x),
            result.p3.y + t * (self.p2.y - result.p3.y),
        );

        self.p1 = result.p4;
    }
}

/// Solves for the parameter on a quadrant cubic that corresponds to
/// `angle` degrees into the quadrant.
///
/// Runs two Newton iterations against the cubic's x(t) for the cosine and
/// two against y(t) for the sine, then averages the two solutions.  The
/// initial guess is the linear `angle / 90`.
fn for_arc_angle(angle: f64) -> f64 {
    if fuzzy_is_null(angle) {
        return 0.0;
    }

    if fuzzy_compare(angle, 90.0) {
        return 1.0;
    }

    let radians = angle.to_radians();
    let cos_angle = radians.cos();
    let sin_angle = radians.sin();

    // finds the zero of b.point_at(tc).x - cos_angle
    let mut tc = angle / 90.0;
    tc -= ((((2.0 - 3.0 * KAPPA) * tc + 3.0 * (KAPPA - 1.0)) * tc) * tc + 1.0 - cos_angle)
        / (((6.0 - 9.0 * KAPPA) * tc + 6.0 * (KAPPA - 1.0)) * tc);
    tc -= ((((2.0 - 3.0 * KAPPA) * tc + 3.0 * (KAPPA - 1.0)) * tc) * tc + 1.0 - cos_angle)
        / (((6.0 - 9.0 * KAPPA) * tc + 6.0 * (KAPPA - 1.0)) * tc);

    // finds the zero of b.point_at(ts).y - sin_angle
    let mut ts = tc;
    ts -= ((((3.0 * KAPPA - 2.0) * ts - 6.0 * KAPPA + 3.0) * ts + 3.0 * KAPPA) * ts - sin_angle)
        / (((9.0 * KAPPA - 6.0) * ts + 12.0 * KAPPA - 6.0) * ts + 3.0 * KAPPA);
    ts -= ((((3.0 * KAPPA - 2.0) * ts - 6.0 * KAPPA + 3.0) * ts + 3.0 * KAPPA) * ts - sin_angle)
        / (((9.0 * KAPPA - 6.0) * ts + 12.0 * KAPPA - 6.0) * ts + 3.0 * KAPPA);

    0.5 * (tc + ts)
}

fn bezier_coefficients(t: f64) -> (f64, f64, f64, f64) {
    let m_t = 1.0 - t;
    let mut b = m_t * m_t;
    let mut c = t * t;
    let d = c * t;
    let a = b * m_t;
    b *= 3.0 * t;
    c *= 3.0 * m_t;
    (a, b, c, d)
}

/// Returns the exact points on the ellipse at `angle` and `angle + length`
/// degrees.
fn find_ellipse_coords(r: &Rect, angle: f64, length: f64) -> (Point, Point) {
    if r.is_empty() {
        return (Point::default(), Point::default());
    }

    let w2 = r.width() / 2.0;
    let h2 = r.height() / 2.0;

    let mut out = [Point::default(); 2];

    for (i, &a) in [angle, angle + length].iter().enumerate() {
        let theta = a - 360.0 * (a / 360.0).floor();
        let mut t = theta / 90.0;
        let quadrant = t.floor() as i32;
        t -= f64::from(quadrant);

        t = for_arc_angle(90.0 * t);

        // odd quadrants run the parameter backwards
        if quadrant & 1 != 0 {
            t = 1.0 - t;
        }

        let (ca, cb, cc, cd) = bezier_coefficients(t);
        let mut px = ca + cb + cc * KAPPA;
        let mut py = cd + cc + cb * KAPPA;

        // left quadrants
        if quadrant == 1 || quadrant == 2 {
            px = -px;
        }

        // top quadrants
        if quadrant == 0 || quadrant == 1 {
            py = -py;
        }

        out[i] = Point::new(r.center_x() + w2 * px, r.center_y() + h2 * py);
    }

    (out[0], out[1])
}

/// Builds the cubic control points for an arc over `rect`.
///
/// The returned sequence is `1 + 3n` points: the arc's start point followed
/// by `(ctrl1, ctrl2, end)` triples, one per whole or partial quadrant
/// traversed.  The quadrant table runs counter-clockwise, so a positive
/// sweep here traverses counter-clockwise; callers with a
/// clockwise-positive convention negate on entry.
pub(crate) fn build_cubic_points(rect: &Rect, start_angle: f64, sweep_angle: f64) -> Vec<Point> {
    let mut result = Vec::new();

    let x = rect.x0;
    let y = rect.y0;

    let w = rect.width();
    let w2 = w / 2.0;
    let w2k = w2 * KAPPA;

    let h = rect.height();
    let h2 = h / 2.0;
    let h2k = h2 * KAPPA;

    let points = [
        // start point
        Point::new(x + w, y + h2),
        // 0 -> 270 degrees
        Point::new(x + w, y + h2 + h2k),
        Point::new(x + w2 + w2k, y + h),
        Point::new(x + w2, y + h),
        // 270 -> 180 degrees
        Point::new(x + w2 - w2k, y + h),
        Point::new(x, y + h2 + h2k),
        Point::new(x, y + h2),
        // 180 -> 90 degrees
        Point::new(x, y + h2 - h2k),
        Point::new(x + w2 - w2k, y),
        Point::new(x + w2, y),
        // 90 -> 0 degrees
        Point::new(x + w2 + w2k, y),
        Point::new(x + w, y + h2 - h2k),
        Point::new(x + w, y + h2),
    ];

    let sweep_angle = sweep_angle.clamp(-360.0, 360.0);

    // fast paths for full sweeps
    if start_angle == 0.0 {
        if sweep_angle == 360.0 {
            result.push(points[12]);
            for i in (0..12).rev() {
                result.push(points[i]);
            }
            return result;
        } else if sweep_angle == -360.0 {
            result.push(points[0]);
            for p in points.iter().skip(1) {
                result.push(*p);
            }
            return result;
        }
    }

    let mut start_segment = (start_angle / 90.0).floor() as i32;
    let mut end_segment = ((start_angle + sweep_angle) / 90.0).floor() as i32;

    let mut start_t = (start_angle - f64::from(start_segment) * 90.0) / 90.0;
    let mut end_t = (start_angle + sweep_angle - f64::from(end_segment) * 90.0) / 90.0;

    let delta: i32 = if sweep_angle > 0.0 { 1 } else { -1 };
    if delta < 0 {
        start_t = 1.0 - start_t;
        end_t = 1.0 - end_t;
    }

    // avoid empty start segment
    if fuzzy_is_null(start_t - 1.0) {
        start_t = 0.0;
        start_segment += delta;
    }

    // avoid empty end segment
    if fuzzy_is_null(end_t) {
        end_t = 1.0;
        end_segment -= delta;
    }

    start_t = for_arc_angle(start_t * 90.0);
    end_t = for_arc_angle(end_t * 90.0);

    let split_at_start = !fuzzy_is_null(start_t);
    let split_at_end = !fuzzy_is_null(end_t - 1.0);

    let end = end_segment + delta;

    // empty arc?
    if start_segment == end {
        let quadrant = 3 - ((start_segment % 4) + 4) % 4;
        let j = (3 * quadrant) as usize;
        result.push(if delta > 0 { points[j + 3] } else { points[j] });
        return result;
    }

    let (start_point, end_point) = find_ellipse_coords(rect, start_angle, sweep_angle);

    result.push(start_point);

    let mut i = start_segment;
    while i != end {
        let quadrant = 3 - ((i % 4) + 4) % 4;
        let j = (3 * quadrant) as usize;

        let mut b = if delta > 0 {
            Bezier::from_points(points[j + 3], points[j + 2], points[j + 1], points[j])
        } else {
            Bezier::from_points(points[j], points[j + 1], points[j + 2], points[j + 3])
        };

        // empty arc?
        if start_segment == end_segment && fuzzy_compare(start_t, end_t) {
            return result;
        }

        if i == start_segment {
            if i == end_segment && split_at_end {
                b = b.on_interval(start_t, end_t);
            } else if split_at_start {
                b = b.on_interval(start_t, 1.0);
            }
        } else if i == end_segment && split_at_end {
            b = b.on_interval(0.0, end_t);
        }

        result.push(b.p2);
        result.push(b.p3);
        result.push(b.p4);

        i += delta;
    }

    let last = result.len() - 1;
    result[last] = end_point;

    result
}
