//! Replaying a path's command stream as drawing events.
//!
//! [`PathIter`] walks a [`Path`]'s verbs and points and yields
//! [`PathEvent`]s ready for a drawing surface.  It inserts the fixups the
//! raw stream leaves implicit:
//!
//! * a segment verb that follows a `Close` without an explicit new `Move`
//!   re-emits a `Move` at the contour's origin first;
//! * a `Close` on a contour whose last point differs from its origin emits
//!   a synthetic `Line` back to the origin before the `Close` itself;
//! * in forced-close mode, a contour left open at the end of the stream
//!   still owes that synthetic closing `Line`.
//!
//! The path must not be mutated while an iterator over it exists; the
//! borrow checker enforces this.

use crate::path::{Path, Verb};
use crate::point::Point;

/// One drawing command replayed from a path.
///
/// Segment events carry the previous point so that a consumer needs no
/// state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEvent {
    /// Begins a contour at `to`.
    Move { to: Point },
    /// A straight segment.
    Line { from: Point, to: Point },
    /// A quadratic Bézier segment.
    Quad { from: Point, ctrl: Point, to: Point },
    /// A cubic Bézier segment.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Ends the current contour.
    Close,
}

// Which Move, if any, must be re-emitted before the next segment verb.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NeedMove {
    AfterClose,
    AfterConstruction,
    AfterPrefix,
}

// Outcome of the implicit-move check before a segment verb.
enum ConsMove {
    // a Move event must be emitted first; the segment verb is revisited
    Emit(Point),
    // no Move owed; the segment starts from this point
    From(Point),
}

/// A stateful iterator over a path's drawing commands.
pub struct PathIter<'a> {
    verbs: &'a [Verb],
    points: &'a [Point],
    verb_index: usize,
    pt_index: usize,
    move_pt: Point,
    last_pt: Point,
    force_close: bool,
    need_close: bool,
    need_move: NeedMove,
}

impl<'a> PathIter<'a> {
    /// Creates an iterator over `path`.
    ///
    /// With `force_close` set, every contour is closed: a contour that the
    /// stream leaves open gets the synthetic closing line anyway.
    pub fn new(path: &'a Path, force_close: bool) -> PathIter<'a> {
        PathIter {
            verbs: path.verbs(),
            points: path.points(),
            verb_index: 0,
            pt_index: 0,
            move_pt: Point::default(),
            last_pt: Point::default(),
            force_close,
            need_close: false,
            need_move: NeedMove::AfterPrefix,
        }
    }

    // Synthesizes the line back to the contour origin, or reports the
    // contour as already closed.  NaN endpoints compare unequal but must
    // be treated as coincident here.
    fn auto_close(&mut self) -> PathEvent {
        if self.last_pt != self.move_pt {
            if self.last_pt.x.is_nan()
                || self.last_pt.y.is_nan()
                || self.move_pt.x.is_nan()
                || self.move_pt.y.is_nan()
            {
                return PathEvent::Close;
            }

            let event = PathEvent::Line {
                from: self.last_pt,
                to: self.move_pt,
            };
            self.last_pt = self.move_pt;
            return event;
        }

        PathEvent::Close
    }

    fn cons_move_to(&mut self) -> ConsMove {
        match self.need_move {
            NeedMove::AfterClose => {
                self.need_close = self.force_close;
                self.need_move = NeedMove::AfterConstruction;
                self.verb_index -= 1;
                ConsMove::Emit(self.move_pt)
            }
            NeedMove::AfterConstruction => {
                self.need_move = NeedMove::AfterPrefix;
                ConsMove::From(self.move_pt)
            }
            NeedMove::AfterPrefix => ConsMove::From(self.points[self.pt_index - 1]),
        }
    }
}

impl<'a> Iterator for PathIter<'a> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        if self.verb_index == self.verbs.len() {
            if self.need_close {
                let event = self.auto_close();
                if matches!(event, PathEvent::Line { .. }) {
                    return Some(event);
                }
                self.need_close = false;
            }
            return None;
        }

        let verb = self.verbs[self.verb_index];
        self.verb_index += 1;

        match verb {
            Verb::Move => {
                if self.need_close {
                    self.verb_index -= 1;
                    let event = self.auto_close();
                    if event == PathEvent::Close {
                        self.need_close = false;
                    }
                    return Some(event);
                }

                if self.verb_index == self.verbs.len() {
                    // a trailing moveto draws nothing
                    return None;
                }

                self.move_pt = self.points[self.pt_index];
                self.pt_index += 1;
                self.need_move = NeedMove::AfterConstruction;
                self.need_close = self.force_close;

                Some(PathEvent::Move { to: self.move_pt })
            }

            Verb::Line => match self.cons_move_to() {
                ConsMove::Emit(to) => Some(PathEvent::Move { to }),
                ConsMove::From(from) => {
                    let to = self.points[self.pt_index];
                    self.last_pt = to;
                    self.pt_index += 1;
                    Some(PathEvent::Line { from, to })
                }
            },

            Verb::Quad => match self.cons_move_to() {
                ConsMove::Emit(to) => Some(PathEvent::Move { to }),
                ConsMove::From(from) => {
                    let ctrl = self.points[self.pt_index];
                    let to = self.points[self.pt_index + 1];
                    self.last_pt = to;
                    self.pt_index += 2;
                    Some(PathEvent::Quad { from, ctrl, to })
                }
            },

            Verb::Cubic => match self.cons_move_to() {
                ConsMove::Emit(to) => Some(PathEvent::Move { to }),
                ConsMove::From(from) => {
                    let ctrl1 = self.points[self.pt_index];
                    let ctrl2 = self.points[self.pt_index + 1];
                    let to = self.points[self.pt_index + 2];
                    self.last_pt = to;
                    self.pt_index += 3;
                    Some(PathEvent::Cubic {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    })
                }
            },

            Verb::Close => {
                let event = self.auto_close();
                if matches!(event, PathEvent::Line { .. }) {
                    // revisit the Close once the synthetic line is out
                    self.verb_index -= 1;
                } else {
                    self.need_close = false;
                }
                self.need_move = NeedMove::AfterClose;
                Some(event)
            }
        }
    }
}
