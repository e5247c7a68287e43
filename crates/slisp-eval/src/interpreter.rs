//! The interpreter: one environment, one parsed expression, and the drawable
//! results accumulated across evaluations.

use crate::env::Environment;
use crate::evaluator::evaluate;
use slisp_parser::parse_source;
use slisp_types::{
    Atom, EvalResult, Expression, InterpreterConfig, InterpreterSemanticError, ParseError,
    SemanticErrorKind,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Parses and evaluates slisp expressions against a persistent environment.
///
/// Bindings made by `define` survive across `parse`/`eval` cycles until
/// [`Interpreter::reset_environment`] is called.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
    env: Environment,
    ast: Option<Expression>,
    graphics: Vec<Atom>,
    last_parse_error: Option<ParseError>,
}

impl Interpreter {
    /// An interpreter with the default configuration and only built-in
    /// bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter whose parser uses `config`.
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    /// Read the whole stream and parse it as one expression.
    ///
    /// Returns `false` on any syntax failure, including an unreadable
    /// stream. The previous `ast` is discarded either way.
    pub fn parse<R: Read>(&mut self, mut reader: R) -> bool {
        let mut source = String::new();
        if let Err(e) = reader.read_to_string(&mut source) {
            return self.record_parse(Err(ParseError::Io {
                message: e.to_string(),
            }));
        }
        self.parse_str(&source)
    }

    /// Parse `source` as one expression.
    ///
    /// On success the result replaces `ast`; on failure `ast` is cleared and
    /// the cause is kept in [`Interpreter::last_parse_error`].
    pub fn parse_str(&mut self, source: &str) -> bool {
        let result = parse_source(source, &self.config);
        self.record_parse(result)
    }

    /// Parse the contents of a file. A file that cannot be opened reads as
    /// an empty stream, which never parses.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> bool {
        match File::open(path.as_ref()) {
            Ok(file) => self.parse(file),
            Err(e) => {
                debug!(path = %path.as_ref().display(), error = %e, "cannot open input");
                self.parse_str("")
            }
        }
    }

    fn record_parse(&mut self, result: Result<Expression, ParseError>) -> bool {
        match result {
            Ok(expr) => {
                self.ast = Some(expr);
                self.last_parse_error = None;
                true
            }
            Err(e) => {
                debug!(error = %e, "parse failed");
                self.ast = None;
                self.last_parse_error = Some(e);
                false
            }
        }
    }

    // ── Evaluation ───────────────────────────────────────────────────────

    /// Evaluate the most recently parsed expression.
    pub fn eval(&mut self) -> EvalResult<Expression> {
        let Some(ast) = &self.ast else {
            return Err(InterpreterSemanticError::new(
                SemanticErrorKind::NoExpression,
                "no successfully parsed expression to evaluate",
            ));
        };
        trace!(expression = %ast, "eval");
        let result = evaluate(ast, &mut self.env)?;
        self.graphics
            .extend(result.drawables().into_iter().cloned());
        Ok(result)
    }

    /// Evaluate an arbitrary expression against this interpreter's
    /// environment.
    pub fn evaluate_expression(&mut self, expr: &Expression) -> EvalResult<Expression> {
        evaluate(expr, &mut self.env)
    }

    // ── Environment ──────────────────────────────────────────────────────

    /// Discard user bindings and accumulated graphics.
    pub fn reset_environment(&mut self) {
        self.env.reset();
        self.graphics.clear();
    }

    /// `true` if `name` is bound, either as a built-in or by `define`.
    pub fn is_symbol_string_defined(&self, name: &str) -> bool {
        self.env.is_defined(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The last successfully parsed expression, if the most recent parse
    /// succeeded.
    pub fn ast(&self) -> Option<&Expression> {
        self.ast.as_ref()
    }

    /// Drawable atoms produced by every successful `eval` since the last
    /// reset, in production order.
    pub fn graphics(&self) -> &[Atom] {
        &self.graphics
    }

    /// Why the most recent parse failed. Cleared by a successful parse.
    pub fn last_parse_error(&self) -> Option<&ParseError> {
        self.last_parse_error.as_ref()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }
}
