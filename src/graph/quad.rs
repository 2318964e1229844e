//! Quad directions
//!
//! A quad is a (subject, predicate, object, label) statement; a `Direction`
//! names one of its four positions. Quad documents store one field per
//! direction, keyed by the direction's field name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four positions of a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Subject,
    Predicate,
    Object,
    Label,
}

impl Direction {
    /// All directions, in document field order
    pub const ALL: [Direction; 4] = [
        Direction::Subject,
        Direction::Predicate,
        Direction::Object,
        Direction::Label,
    ];

    /// Field name of this direction in a quad document
    pub fn field_name(&self) -> &'static str {
        match self {
            Direction::Subject => "subject",
            Direction::Predicate => "predicate",
            Direction::Object => "object",
            Direction::Label => "label",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
