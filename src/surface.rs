//! Handing a finished path to a retained 2D drawing surface.
//!
//! The rendering surface itself lives outside this crate.  This module
//! defines the narrow contract with it: a path is replayed as a sequence
//! of path-construction calls, then filled and/or stroked according to the
//! paint style.  Coordinates arrive in whatever space the surface's
//! current transform establishes; the path does not apply a matrix at draw
//! time.

use crate::iter::{PathEvent, PathIter};
use crate::path::Path;

/// How a path is painted when it reaches the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline.
    Stroke,
    /// Fill the interior, then stroke the outline.
    FillAndStroke,
}

/// The drawing operations an external surface must provide.
///
/// The surface fills with the winding rule regardless of the path's fill
/// type; there is deliberately no fill-rule parameter in this contract.
pub trait Surface {
    /// Begins a new sub-path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Adds a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a quadratic curve through `(cx, cy)` to `(x, y)`.
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    /// Adds a cubic curve through the two control points to `(x, y)`.
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Closes the current sub-path.
    fn close_path(&mut self);
    /// Fills the accumulated path.
    fn fill(&mut self);
    /// Strokes the accumulated path.
    fn stroke(&mut self);
}

impl Path {
    /// Replays the whole path into `surface`, then fills and/or strokes it
    /// according to `style`.
    pub fn draw<S: Surface>(&self, surface: &mut S, style: PaintStyle) {
        for event in PathIter::new(self, false) {
            match event {
                PathEvent::Move { to } => surface.move_to(to.x, to.y),
                PathEvent::Line { to, .. } => surface.line_to(to.x, to.y),
                PathEvent::Quad { ctrl, to, .. } => surface.quad_to(ctrl.x, ctrl.y, to.x, to.y),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => surface.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
                PathEvent::Close => surface.close_path(),
            }
        }

        match style {
            PaintStyle::Fill => surface.fill(),
            PaintStyle::Stroke => surface.stroke(),
            PaintStyle::FillAndStroke => {
                surface.fill();
                surface.stroke();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Direction;
    use crate::rect::Rect;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        MoveTo(f64, f64),
        LineTo(f64, f64),
        QuadTo(f64, f64, f64, f64),
        CubicTo(f64, f64, f64, f64, f64, f64),
        ClosePath,
        Fill,
        Stroke,
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }

        fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
            self.calls.push(Call::QuadTo(cx, cy, x, y));
        }

        fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
            self.calls.push(Call::CubicTo(c1x, c1y, c2x, c2y, x, y));
        }

        fn close_path(&mut self) {
            self.calls.push(Call::ClosePath);
        }

        fn fill(&mut self) {
            self.calls.push(Call::Fill);
        }

        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
    }

    #[test]
    fn draws_rect_and_fills() {
        let mut path = Path::new();
        path.add_rect(&Rect::new(0.0, 0.0, 2.0, 2.0), Direction::Cw);

        let mut surface = RecordingSurface::default();
        path.draw(&mut surface, PaintStyle::Fill);

        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(0.0, 0.0),
                Call::LineTo(2.0, 0.0),
                Call::LineTo(2.0, 2.0),
                Call::LineTo(0.0, 2.0),
                Call::LineTo(0.0, 0.0),
                Call::ClosePath,
                Call::Fill,
            ]
        );
    }

    #[test]
    fn fill_and_stroke_issues_both_in_order() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 1.0);

        let mut surface = RecordingSurface::default();
        path.draw(&mut surface, PaintStyle::FillAndStroke);

        assert_eq!(
            &surface.calls[surface.calls.len() - 2..],
            &[Call::Fill, Call::Stroke]
        );

        let mut surface = RecordingSurface::default();
        path.draw(&mut surface, PaintStyle::Stroke);
        assert_eq!(surface.calls.last(), Some(&Call::Stroke));
        assert!(!surface.calls.contains(&Call::Fill));
    }

    #[test]
    fn curves_reach_the_surface_with_all_controls() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.quad_to(1.0, 2.0, 3.0, 0.0);
        path.cubic_to(4.0, 1.0, 5.0, -1.0, 6.0, 0.0);

        let mut surface = RecordingSurface::default();
        path.draw(&mut surface, PaintStyle::Stroke);

        assert_eq!(surface.calls[1], Call::QuadTo(1.0, 2.0, 3.0, 0.0));
        assert_eq!(
            surface.calls[2],
            Call::CubicTo(4.0, 1.0, 5.0, -1.0, 6.0, 0.0)
        );
    }
}
