//! Built-in procedures and constants.
//!
//! Every procedure receives already-evaluated arguments. Arity is checked
//! by [`Procedure::call`] before the body runs; bodies check types.

use slisp_types::{
    Atom, EvalResult, Expression, InterpreterSemanticError, Point, SemanticErrorKind,
};
use std::f64::consts::PI;
use std::fmt;

/// Native procedure body.
pub type ProcedureFn = fn(&[Expression]) -> EvalResult<Expression>;

/// Accepted argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    /// Any of the listed counts.
    OneOf(&'static [usize]),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
            Self::OneOf(counts) => counts.contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(1) => write!(f, "1 argument"),
            Self::Exactly(n) => write!(f, "{n} arguments"),
            Self::AtLeast(1) => write!(f, "at least 1 argument"),
            Self::AtLeast(n) => write!(f, "at least {n} arguments"),
            Self::OneOf(counts) => {
                let counts: Vec<String> = counts.iter().map(usize::to_string).collect();
                write!(f, "{} arguments", counts.join(" or "))
            }
        }
    }
}

/// A named native operation.
#[derive(Clone, Copy)]
pub struct Procedure {
    pub name: &'static str,
    pub arity: Arity,
    body: ProcedureFn,
}

impl Procedure {
    const fn new(name: &'static str, arity: Arity, body: ProcedureFn) -> Self {
        Self { name, arity, body }
    }

    /// Check the argument count, then run the body.
    pub fn call(&self, args: &[Expression]) -> EvalResult<Expression> {
        if !self.arity.accepts(args.len()) {
            return Err(InterpreterSemanticError::arity(format!(
                "'{}' expects {}, got {}",
                self.name,
                self.arity,
                args.len()
            )));
        }
        (self.body)(args)
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "built-in procedure '{}' with {}", self.name, self.arity)
    }
}

/// Every built-in procedure, in registration order.
pub static PROCEDURES: &[Procedure] = &[
    // Logic
    Procedure::new("not", Arity::Exactly(1), not),
    Procedure::new("and", Arity::AtLeast(1), and),
    Procedure::new("or", Arity::AtLeast(1), or),
    // Comparison
    Procedure::new("<", Arity::Exactly(2), less),
    Procedure::new("<=", Arity::Exactly(2), less_eq),
    Procedure::new(">", Arity::Exactly(2), greater),
    Procedure::new(">=", Arity::Exactly(2), greater_eq),
    Procedure::new("=", Arity::Exactly(2), num_eq),
    // Arithmetic
    Procedure::new("+", Arity::AtLeast(1), add),
    Procedure::new("-", Arity::OneOf(&[1, 2]), sub),
    Procedure::new("*", Arity::AtLeast(1), mul),
    Procedure::new("/", Arity::Exactly(2), div),
    Procedure::new("log10", Arity::Exactly(1), log10),
    Procedure::new("pow", Arity::Exactly(2), pow),
    Procedure::new("sin", Arity::Exactly(1), sin),
    Procedure::new("cos", Arity::Exactly(1), cos),
    Procedure::new("arctan", Arity::Exactly(2), arctan),
    // Geometry
    Procedure::new("point", Arity::Exactly(2), point),
    Procedure::new("line", Arity::OneOf(&[2, 4]), line),
    Procedure::new("arc", Arity::OneOf(&[3, 5]), arc),
    // Aggregates
    Procedure::new("list", Arity::AtLeast(1), list),
];

/// Built-in value bindings.
pub fn constants() -> Vec<(&'static str, Expression)> {
    vec![("pi", Expression::from(PI))]
}

// ── Argument helpers ─────────────────────────────────────────────────

fn wrong_type(procedure: &str, expected: &str, found: &Expression) -> InterpreterSemanticError {
    InterpreterSemanticError::type_mismatch(format!(
        "'{procedure}' expects {expected} arguments, got {}",
        found.head.kind()
    ))
}

/// Only leaf atoms qualify; a list aggregate is never a number or boolean.
fn number_arg(procedure: &str, arg: &Expression) -> EvalResult<f64> {
    match (&arg.head, arg.is_leaf()) {
        (Atom::Number { value }, true) => Ok(*value),
        _ => Err(wrong_type(procedure, "Number", arg)),
    }
}

fn numbers(procedure: &str, args: &[Expression]) -> EvalResult<Vec<f64>> {
    args.iter().map(|a| number_arg(procedure, a)).collect()
}

fn booleans(procedure: &str, args: &[Expression]) -> EvalResult<Vec<bool>> {
    args.iter()
        .map(|a| match (&a.head, a.is_leaf()) {
            (Atom::Boolean { value }, true) => Ok(*value),
            _ => Err(wrong_type(procedure, "Boolean", a)),
        })
        .collect()
}

fn points(procedure: &str, args: &[Expression]) -> EvalResult<Vec<Point>> {
    args.iter()
        .map(|a| a.head.as_point().ok_or_else(|| wrong_type(procedure, "Point", a)))
        .collect()
}

fn two_numbers(procedure: &str, args: &[Expression]) -> EvalResult<(f64, f64)> {
    Ok((number_arg(procedure, &args[0])?, number_arg(procedure, &args[1])?))
}

// ── Logic ────────────────────────────────────────────────────────────

fn not(args: &[Expression]) -> EvalResult<Expression> {
    let values = booleans("not", args)?;
    Ok((!values[0]).into())
}

fn and(args: &[Expression]) -> EvalResult<Expression> {
    Ok(booleans("and", args)?.into_iter().all(|b| b).into())
}

fn or(args: &[Expression]) -> EvalResult<Expression> {
    Ok(booleans("or", args)?.into_iter().any(|b| b).into())
}

// ── Comparison ───────────────────────────────────────────────────────

fn less(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers("<", args)?;
    Ok((a < b).into())
}

fn less_eq(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers("<=", args)?;
    Ok((a <= b).into())
}

fn greater(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers(">", args)?;
    Ok((a > b).into())
}

fn greater_eq(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers(">=", args)?;
    Ok((a >= b).into())
}

fn num_eq(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers("=", args)?;
    Ok((a == b).into())
}

// ── Arithmetic ───────────────────────────────────────────────────────

// Overflow is not an error: sums and products may reach infinity.
fn add(args: &[Expression]) -> EvalResult<Expression> {
    Ok(numbers("+", args)?.into_iter().sum::<f64>().into())
}

fn sub(args: &[Expression]) -> EvalResult<Expression> {
    let values = numbers("-", args)?;
    match values[..] {
        [a] => Ok((-a).into()),
        [a, b] => Ok((a - b).into()),
        _ => Err(InterpreterSemanticError::arity(format!(
            "'-' expects 1 or 2 arguments, got {}",
            values.len()
        ))),
    }
}

fn mul(args: &[Expression]) -> EvalResult<Expression> {
    Ok(numbers("*", args)?.into_iter().product::<f64>().into())
}

fn div(args: &[Expression]) -> EvalResult<Expression> {
    let (a, b) = two_numbers("/", args)?;
    if b == 0.0 {
        return Err(InterpreterSemanticError::new(
            SemanticErrorKind::DivisionByZero,
            "division by zero",
        ));
    }
    Ok((a / b).into())
}

fn log10(args: &[Expression]) -> EvalResult<Expression> {
    Ok(number_arg("log10", &args[0])?.log10().into())
}

fn pow(args: &[Expression]) -> EvalResult<Expression> {
    let (base, exponent) = two_numbers("pow", args)?;
    Ok(base.powf(exponent).into())
}

fn sin(args: &[Expression]) -> EvalResult<Expression> {
    Ok(number_arg("sin", &args[0])?.sin().into())
}

fn cos(args: &[Expression]) -> EvalResult<Expression> {
    Ok(number_arg("cos", &args[0])?.cos().into())
}

fn arctan(args: &[Expression]) -> EvalResult<Expression> {
    let (y, x) = two_numbers("arctan", args)?;
    Ok(y.atan2(x).into())
}

// ── Geometry ─────────────────────────────────────────────────────────

fn point(args: &[Expression]) -> EvalResult<Expression> {
    let (x, y) = two_numbers("point", args)?;
    Ok(Atom::point(x, y).into())
}

/// `(line p1 p2)` or `(line x1 y1 x2 y2)`.
fn line(args: &[Expression]) -> EvalResult<Expression> {
    let (first, second) = if args.len() == 2 {
        let p = points("line", args)?;
        (p[0], p[1])
    } else {
        let n = numbers("line", args)?;
        (Point::new(n[0], n[1]), Point::new(n[2], n[3]))
    };
    Ok(Atom::line(first, second).into())
}

/// `(arc center start span)` or `(arc cx cy sx sy span)`, span in radians.
fn arc(args: &[Expression]) -> EvalResult<Expression> {
    let (center, start, span) = if args.len() == 3 {
        let p = points("arc", &args[..2])?;
        (p[0], p[1], number_arg("arc", &args[2])?)
    } else {
        let n = numbers("arc", args)?;
        (Point::new(n[0], n[1]), Point::new(n[2], n[3]), n[4])
    };
    Ok(Atom::arc(center, start, span).into())
}

// ── Aggregates ───────────────────────────────────────────────────────

fn list(args: &[Expression]) -> EvalResult<Expression> {
    Ok(Expression::list(args.to_vec()))
}
