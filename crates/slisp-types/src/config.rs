use serde::{Deserialize, Serialize};

/// Default maximum nesting depth accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Interpreter configuration.
///
/// Evaluation recurses once per nesting level, so `max_depth` also bounds
/// the evaluator's stack usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Deepest parenthesis nesting the parser accepts.
    pub max_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
