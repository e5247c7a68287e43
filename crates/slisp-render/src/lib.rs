//! Headless rendering front end for slisp.
//!
//! A [`Session`] parses and evaluates user entries and reports the outcome
//! to a [`Canvas`]: drawable results become [`Shape`]s, every result produces
//! an info line, and failures produce an error line.
//!
//! ```text
//! entry → Interpreter (parse, eval) → Expression → draw_expression → Canvas
//! ```

mod canvas;
mod session;
mod shape;

pub use canvas::{Canvas, CanvasEvent, EventLog};
pub use session::{draw_expression, Session, PARSE_FAILURE_MESSAGE};
pub use shape::Shape;
