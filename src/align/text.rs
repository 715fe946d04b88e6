//! Text bound to an alignment group.

use crate::align::registry::AlignmentRegistry;
use crate::types::MemberId;
use std::fmt;

/// A string that reports its length to an [`AlignmentRegistry`] group
///
/// The text is registered on construction and on every change, and released
/// when the value is dropped. Widths are counted in `char`s.
pub struct TrackedText<'r> {
    registry: &'r AlignmentRegistry,
    group: String,
    text: String,
    member: MemberId,
}

impl<'r> TrackedText<'r> {
    pub fn new(
        registry: &'r AlignmentRegistry,
        text: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let group = group.into();
        let member = registry.register(&group, char_len(&text));
        Self {
            registry,
            group,
            text,
            member,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Replace the text and report the new length to the group
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.registry
            .observe(&self.group, self.member, char_len(&self.text));
    }

    /// Width every member of the group pads to
    ///
    /// Falls back to the text's own length when the group maximum is unknown
    /// or (transiently) smaller.
    pub fn padded_length(&self) -> usize {
        let own = char_len(&self.text);
        self.registry
            .max_length(&self.group)
            .map_or(own, |max| max.max(own))
    }

    /// Number of fill characters needed to reach the group width
    pub fn padding(&self) -> usize {
        self.padded_length() - char_len(&self.text)
    }

    /// Text followed by fill, like `str.ljust`
    pub fn left_pad(&self) -> String {
        format!("{}{}", self.text, " ".repeat(self.padding()))
    }

    /// Fill followed by text, like `str.rjust`
    pub fn right_pad(&self) -> String {
        format!("{}{}", " ".repeat(self.padding()), self.text)
    }

    /// Text centered in the group width; odd fill goes to the right
    pub fn center_pad(&self) -> String {
        let fill = self.padding();
        let left = fill / 2;
        format!(
            "{}{}{}",
            " ".repeat(left),
            self.text,
            " ".repeat(fill - left)
        )
    }

    /// Leave the group now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for TrackedText<'_> {
    fn drop(&mut self) {
        self.registry.release(&self.group, self.member);
    }
}

impl fmt::Debug for TrackedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedText")
            .field("group", &self.group)
            .field("text", &self.text)
            .finish()
    }
}

impl fmt::Display for TrackedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
