use serde::{Deserialize, Serialize};
use slisp_types::{Atom, Point};

/// Sixteenths of a degree per radian.
const SIXTEENTHS_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI * 16.0;

/// A primitive a canvas knows how to paint.
///
/// Arc angles are in sixteenths of a degree, counter-clockwise from the
/// positive x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    /// A point, painted as a 1x1 ellipse whose corner is at `(x, y)`.
    Point { x: f64, y: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: i32,
        span_angle: i32,
    },
}

impl Shape {
    /// The shape for a drawable atom, or `None` for non-geometry atoms.
    pub fn from_atom(atom: &Atom) -> Option<Self> {
        match atom {
            Atom::Point { point } => Some(Self::Point {
                x: point.x,
                y: point.y,
            }),
            Atom::Line { first, second } => Some(Self::Line {
                x1: first.x,
                y1: first.y,
                x2: second.x,
                y2: second.y,
            }),
            Atom::Arc {
                center,
                start,
                span,
            } => Some(Self::arc(*center, *start, *span)),
            Atom::None
            | Atom::Boolean { .. }
            | Atom::Number { .. }
            | Atom::Symbol { .. }
            | Atom::List => None,
        }
    }

    fn arc(center: Point, start: Point, span: f64) -> Self {
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        Self::Arc {
            cx: center.x,
            cy: center.y,
            radius: center.distance(start),
            start_angle: to_sixteenths(start_angle),
            span_angle: to_sixteenths(span),
        }
    }
}

fn to_sixteenths(radians: f64) -> i32 {
    (radians * SIXTEENTHS_PER_RADIAN).round() as i32
}
