//! One column of a listing line.

use crate::align::{AlignmentRegistry, TrackedText};

/// Alignment group shared by every marker in a listing
pub const MARKER_GROUP: &str = "marker";

/// Column role derived from the field position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Position 0: inode or immutability sentinel, right-justified
    Marker,
    /// Position 1: indented, quoted name
    Name,
    /// Position 2: first extra column, `| ` prefixed
    FirstExtra,
    /// Position 3 and up, `; ` prefixed
    Extra,
}

impl FieldRole {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => FieldRole::Marker,
            1 => FieldRole::Name,
            2 => FieldRole::FirstExtra,
            _ => FieldRole::Extra,
        }
    }
}

/// A rendered column bound to its alignment group
#[derive(Debug)]
pub struct Field<'r> {
    index: usize,
    value: String,
    level: usize,
    text: TrackedText<'r>,
}

impl<'r> Field<'r> {
    /// Build the column text for `value` and register it
    ///
    /// `disambiguator` scopes non-marker columns, so columns of unrelated
    /// directories never pad against each other.
    pub fn new(
        registry: &'r AlignmentRegistry,
        index: usize,
        value: impl Into<String>,
        level: usize,
        disambiguator: &str,
    ) -> Self {
        let value = value.into();
        let (text, group) = match FieldRole::from_index(index) {
            FieldRole::Marker => (format!("{}:", value), MARKER_GROUP.to_string()),
            FieldRole::Name => (
                format!("{}{}", "  ".repeat(level), value),
                group_key(index, disambiguator),
            ),
            FieldRole::FirstExtra => (format!("| {}", value), group_key(index, disambiguator)),
            FieldRole::Extra => (format!("; {}", value), group_key(index, disambiguator)),
        };
        Self {
            index,
            value,
            level,
            text: TrackedText::new(registry, text, group),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn role(&self) -> FieldRole {
        FieldRole::from_index(self.index)
    }

    /// Raw value before prefixing and indentation
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn text(&self) -> &TrackedText<'r> {
        &self.text
    }

    /// Column text padded to its group width
    pub fn padded(&self) -> String {
        match self.role() {
            FieldRole::Marker => self.text.right_pad(),
            _ => self.text.left_pad(),
        }
    }
}

fn group_key(index: usize, disambiguator: &str) -> String {
    format!("{}:{}", index, disambiguator)
}
