//! The tagged atom and the expression tree.
//!
//! Parsed input only ever produces `Boolean`, `Number` and `Symbol` heads.
//! `Point`, `Line`, `Arc` and `List` heads appear only in evaluation results.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Atom
// ══════════════════════════════════════════════════════════════════════════════

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A single tagged value.
///
/// Equality compares variant and payload; atoms of different variants are
/// never equal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Atom {
    /// Uninitialized.
    #[default]
    None,
    Boolean {
        value: bool,
    },
    Number {
        value: f64,
    },
    Symbol {
        name: String,
    },
    Point {
        point: Point,
    },
    Line {
        first: Point,
        second: Point,
    },
    /// Circular arc around `center`, beginning at `start` and sweeping `span`
    /// radians.
    Arc {
        center: Point,
        start: Point,
        span: f64,
    },
    /// Head of an aggregate result whose tail holds the evaluated members.
    List,
}

/// The variant tag of an [`Atom`], used by collaborators to dispatch on a
/// result without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomKind {
    None,
    Boolean,
    Number,
    Symbol,
    Point,
    Line,
    Arc,
    List,
}

impl Atom {
    /// A `Boolean` atom.
    pub fn boolean(value: bool) -> Self {
        Self::Boolean { value }
    }

    /// A `Number` atom.
    pub fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// A `Symbol` atom. The name is stored as given, without validation.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol { name: name.into() }
    }

    /// A `Point` atom at `(x, y)`.
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point {
            point: Point::new(x, y),
        }
    }

    /// A segment from `first` to `second`.
    pub fn line(first: Point, second: Point) -> Self {
        Self::Line { first, second }
    }

    /// An arc sweeping `span` radians around `center`, starting at `start`.
    pub fn arc(center: Point, start: Point, span: f64) -> Self {
        Self::Arc {
            center,
            start,
            span,
        }
    }

    /// The variant tag, without payload.
    pub fn kind(&self) -> AtomKind {
        match self {
            Self::None => AtomKind::None,
            Self::Boolean { .. } => AtomKind::Boolean,
            Self::Number { .. } => AtomKind::Number,
            Self::Symbol { .. } => AtomKind::Symbol,
            Self::Point { .. } => AtomKind::Point,
            Self::Line { .. } => AtomKind::Line,
            Self::Arc { .. } => AtomKind::Arc,
            Self::List => AtomKind::List,
        }
    }

    /// The payload of a `Boolean`, else `None`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean { value } => Some(*value),
            _ => None,
        }
    }

    /// The payload of a `Number`, else `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { value } => Some(*value),
            _ => None,
        }
    }

    /// The name of a `Symbol`, else `None`.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol { name } => Some(name),
            _ => None,
        }
    }

    /// The coordinate of a `Point`, else `None`.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Point { point } => Some(*point),
            _ => None,
        }
    }

    /// `true` for the geometry variants a renderer can draw.
    pub fn is_drawable(&self) -> bool {
        matches!(self, Self::Point { .. } | Self::Line { .. } | Self::Arc { .. })
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Symbol => "Symbol",
            Self::Point => "Point",
            Self::Line => "Line",
            Self::Arc => "Arc",
            Self::List => "List",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Boolean { value: true } => write!(f, "True"),
            Self::Boolean { value: false } => write!(f, "False"),
            Self::Number { value } => write!(f, "{value}"),
            Self::Symbol { name } => write!(f, "{name}"),
            Self::Point { point } => write!(f, "{point}"),
            Self::Line { first, second } => write!(f, "({first},{second})"),
            Self::Arc {
                center,
                start,
                span,
            } => write!(f, "({center},{start} {span})"),
            Self::List => write!(f, "List"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expression
// ══════════════════════════════════════════════════════════════════════════════

/// A tree node: a head atom plus ordered children.
///
/// Before evaluation a non-empty tail is an application (head names the
/// operator). After evaluation a non-empty tail only occurs under a
/// [`Atom::List`] head.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expression {
    pub head: Atom,
    pub tail: Vec<Expression>,
}

impl Expression {
    /// A leaf holding `head`.
    pub fn new(head: Atom) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// An application of `head` to `tail`, in order.
    pub fn with_tail(head: Atom, tail: Vec<Expression>) -> Self {
        Self { head, tail }
    }

    /// An aggregate result holding `members`.
    pub fn list(members: Vec<Expression>) -> Self {
        Self::with_tail(Atom::List, members)
    }

    /// `true` when there are no children.
    pub fn is_leaf(&self) -> bool {
        self.tail.is_empty()
    }

    /// Visit every drawable atom, descending into list aggregates in order.
    pub fn drawables(&self) -> Vec<&Atom> {
        let mut out = Vec::new();
        self.collect_drawables(&mut out);
        out
    }

    fn collect_drawables<'a>(&'a self, out: &mut Vec<&'a Atom>) {
        if self.head.is_drawable() {
            out.push(&self.head);
        }
        if self.head == Atom::List {
            for child in &self.tail {
                child.collect_drawables(out);
            }
        }
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Self::new(Atom::boolean(value))
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::new(Atom::number(value))
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Self::new(Atom::symbol(name))
    }
}

impl From<Atom> for Expression {
    fn from(head: Atom) -> Self {
        Self::new(head)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tail.is_empty() {
            return write!(f, "{}", self.head);
        }
        write!(f, "({}", self.head)?;
        for child in &self.tail {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
