use crate::canvas::Canvas;
use crate::shape::Shape;
use slisp_eval::Interpreter;
use slisp_types::{Atom, Expression, InterpreterConfig};
use tracing::warn;

/// Error line reported when an entry does not parse.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse the expression.";

/// A front-end session: one interpreter whose bindings persist across
/// entries until [`Session::reset`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// A session over a fresh interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            interpreter: Interpreter::with_config(config),
        }
    }

    /// Parse and evaluate one entry, reporting the outcome to `canvas`.
    ///
    /// On success the canvas is cleared before the result is drawn. On
    /// failure the canvas keeps its contents and receives one error line.
    pub fn parse_and_evaluate(&mut self, entry: &str, canvas: &mut dyn Canvas) {
        if !self.interpreter.parse_str(entry) {
            canvas.error(PARSE_FAILURE_MESSAGE.to_string());
            return;
        }
        match self.interpreter.eval() {
            Ok(result) => {
                canvas.clear();
                draw_expression(&result, canvas);
            }
            Err(e) => canvas.error(e.to_string()),
        }
    }

    /// Discard user bindings and accumulated graphics.
    pub fn reset(&mut self) {
        self.interpreter.reset_environment();
    }

    /// `true` if `name` is bound in the session's interpreter.
    pub fn is_defined(&self, name: &str) -> bool {
        self.interpreter.is_symbol_string_defined(name)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

/// Report one evaluation result: an info line plus, for geometry, a shape.
/// List aggregates report each member in order and nothing for themselves.
pub fn draw_expression(expr: &Expression, canvas: &mut dyn Canvas) {
    let info = match &expr.head {
        Atom::List => {
            for member in &expr.tail {
                draw_expression(member, canvas);
            }
            return;
        }
        Atom::None => {
            warn!("nothing to draw for an empty result");
            return;
        }
        Atom::Boolean { value: true } => "True".to_string(),
        Atom::Boolean { value: false } => "False".to_string(),
        Atom::Number { value } => format!("({value:.0})"),
        Atom::Symbol { name } => name.clone(),
        Atom::Point { point } => format!("({:.6}, {:.6})", point.x, point.y),
        Atom::Line { first, second } => format!(
            "(({:.6}, {:.6}), ({:.6}, {:.6}))",
            first.x, first.y, second.x, second.y
        ),
        Atom::Arc {
            center,
            start,
            span,
        } => format!(
            "(({:.6}, {:.6}), ({:.6}, {:.6}), {span:.6})",
            center.x, center.y, start.x, start.y
        ),
    };

    canvas.info(info);
    if let Some(shape) = Shape::from_atom(&expr.head) {
        canvas.draw(shape);
    }
}
