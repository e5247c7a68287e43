//! Core expression evaluator.

use crate::env::Environment;
use slisp_types::{
    Atom, EvalResult, Expression, InterpreterSemanticError, SemanticErrorKind,
};
use tracing::trace;

/// Syntactic forms whose operands are not all evaluated up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    Define,
    If,
    Begin,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "define" => Some(Self::Define),
            "if" => Some(Self::If),
            "begin" => Some(Self::Begin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Define => "define",
            Self::If => "if",
            Self::Begin => "begin",
        }
    }
}

/// Walks expression trees against a borrowed environment.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

/// Evaluate `expr` against `env`.
pub fn evaluate(expr: &Expression, env: &mut Environment) -> EvalResult<Expression> {
    Evaluator::new(env).eval_expr(expr)
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    pub fn eval_expr(&mut self, expr: &Expression) -> EvalResult<Expression> {
        match &expr.head {
            Atom::Symbol { name } => match SpecialForm::from_name(name) {
                Some(form) => self.eval_special_form(form, &expr.tail),
                // `(op)` and `op` parse to the same leaf, so a bare
                // procedure name is a call with no arguments.
                None if expr.is_leaf() => match self.env.procedure(name) {
                    Some(procedure) => procedure.call(&[]),
                    None => self.env.lookup(name),
                },
                None => self.eval_application(name, &expr.tail),
            },
            head if !expr.is_leaf() && *head != Atom::List => {
                Err(InterpreterSemanticError::new(
                    SemanticErrorKind::UnknownProcedure,
                    format!("'{head}' is not a procedure"),
                ))
            }
            Atom::None => Err(InterpreterSemanticError::new(
                SemanticErrorKind::NoExpression,
                "cannot evaluate an empty expression",
            )),
            // Literals, geometry results, and already-evaluated aggregates.
            Atom::Boolean { .. }
            | Atom::Number { .. }
            | Atom::Point { .. }
            | Atom::Line { .. }
            | Atom::Arc { .. }
            | Atom::List => Ok(expr.clone()),
        }
    }

    // ── Procedure application ────────────────────────────────────────────

    fn eval_application(&mut self, name: &str, operands: &[Expression]) -> EvalResult<Expression> {
        // Resolve before evaluating operands so an unknown operator has no
        // side effects.
        let procedure = match self.env.procedure(name) {
            Some(p) => *p,
            None => {
                let message = if self.env.is_defined(name) {
                    format!("'{name}' is not a procedure")
                } else {
                    format!("unknown procedure '{name}'")
                };
                return Err(InterpreterSemanticError::new(
                    SemanticErrorKind::UnknownProcedure,
                    message,
                ));
            }
        };

        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            args.push(self.eval_expr(operand)?);
        }
        procedure.call(&args)
    }

    // ── Special forms ────────────────────────────────────────────────────

    fn eval_special_form(&mut self, form: SpecialForm, operands: &[Expression]) -> EvalResult<Expression> {
        match form {
            SpecialForm::Define => self.eval_define(operands),
            SpecialForm::If => self.eval_if(operands),
            SpecialForm::Begin => self.eval_begin(operands),
        }
    }

    fn eval_define(&mut self, operands: &[Expression]) -> EvalResult<Expression> {
        let [target, value] = operands else {
            return Err(operand_count(SpecialForm::Define, "2 operands", operands));
        };

        let Some(name) = target.head.as_symbol().filter(|_| target.is_leaf()) else {
            return Err(InterpreterSemanticError::type_mismatch(format!(
                "'define' target must be a symbol, got '{target}'"
            )));
        };
        if SpecialForm::from_name(name).is_some() || self.env.is_builtin(name) {
            return Err(InterpreterSemanticError::new(
                SemanticErrorKind::Redefinition,
                format!("cannot redefine built-in '{name}'"),
            ));
        }

        // Nothing is bound if the value fails to evaluate.
        let result = self.eval_expr(value)?;
        trace!(%name, value = %result, "define");
        self.env.define(name, result.clone())?;
        Ok(result)
    }

    fn eval_if(&mut self, operands: &[Expression]) -> EvalResult<Expression> {
        let [condition, then_branch, else_branch] = operands else {
            return Err(operand_count(SpecialForm::If, "3 operands", operands));
        };

        let cond = self.eval_expr(condition)?;
        match (&cond.head, cond.is_leaf()) {
            (Atom::Boolean { value: true }, true) => self.eval_expr(then_branch),
            (Atom::Boolean { value: false }, true) => self.eval_expr(else_branch),
            _ => Err(InterpreterSemanticError::type_mismatch(format!(
                "'if' condition must be Boolean, got {}",
                cond.head.kind()
            ))),
        }
    }

    fn eval_begin(&mut self, operands: &[Expression]) -> EvalResult<Expression> {
        let Some((last, init)) = operands.split_last() else {
            return Err(operand_count(SpecialForm::Begin, "at least 1 operand", operands));
        };
        for operand in init {
            self.eval_expr(operand)?;
        }
        self.eval_expr(last)
    }
}

fn operand_count(form: SpecialForm, expected: &str, operands: &[Expression]) -> InterpreterSemanticError {
    InterpreterSemanticError::arity(format!(
        "'{}' expects {expected}, got {}",
        form.name(),
        operands.len()
    ))
}
