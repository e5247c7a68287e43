use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// Receiver for everything a session reports.
pub trait Canvas {
    /// Paint one shape.
    fn draw(&mut self, shape: Shape);
    /// Show a result line.
    fn info(&mut self, message: String);
    /// Show a failure line.
    fn error(&mut self, message: String);
    /// Remove everything painted so far.
    fn clear(&mut self);
}

/// One call made on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum CanvasEvent {
    Draw { shape: Shape },
    Info { message: String },
    Error { message: String },
    Clear,
}

/// A canvas that records every call, for front ends that batch updates
/// (for example, shipping them across a process boundary as JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<CanvasEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes currently on the canvas: everything drawn since the last clear.
    pub fn visible_shapes(&self) -> Vec<&Shape> {
        let since_clear = self
            .events
            .iter()
            .rposition(|e| *e == CanvasEvent::Clear)
            .map_or(0, |i| i + 1);
        self.events[since_clear..]
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::Draw { shape } => Some(shape),
                _ => None,
            })
            .collect()
    }

    /// Every info line, oldest first.
    pub fn infos(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::Info { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every error line, oldest first.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::Error { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the log as `{"events": [...]}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Canvas for EventLog {
    fn draw(&mut self, shape: Shape) {
        self.events.push(CanvasEvent::Draw { shape });
    }

    fn info(&mut self, message: String) {
        self.events.push(CanvasEvent::Info { message });
    }

    fn error(&mut self, message: String) {
        self.events.push(CanvasEvent::Error { message });
    }

    fn clear(&mut self) {
        self.events.push(CanvasEvent::Clear);
    }
}
