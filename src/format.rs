//! Formatting constants for the textual tree representations.
//!
//! The defaults below are a fixed external contract: callers parse and pin
//! the rendered output, so changing any literal is a breaking format change.

/// Delimiters for the single-line delimited form produced by
/// [`Node::to_text`](crate::Node::to_text).
///
/// A value renders as `value_prefix` + value + `value_suffix`, with
/// `null_literal` standing in for an absent value. A non-leaf appends
/// `value_separator` and then each child's rendering enclosed in
/// `children_prefix`/`children_suffix`, joined by `children_separator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    pub value_prefix: &'static str,
    pub value_suffix: &'static str,
    pub null_literal: &'static str,
    pub value_separator: &'static str,
    pub children_prefix: &'static str,
    pub children_suffix: &'static str,
    pub children_separator: &'static str,
}

impl TextFormat {
    pub const DEFAULT: TextFormat = TextFormat {
        value_prefix: "[",
        value_suffix: "]",
        null_literal: "null",
        value_separator: "=",
        children_prefix: "(",
        children_suffix: ")",
        children_separator: ",",
    };
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Object keys for the JSON form produced by
/// [`Node::to_json`](crate::Node::to_json).
///
/// Keys must be stable across a release; they are encoded as JSON strings,
/// so any literal is permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormat {
    pub value_key: &'static str,
    pub children_key: &'static str,
}

impl JsonFormat {
    pub const DEFAULT: JsonFormat = JsonFormat {
        value_key: "value",
        children_key: "children",
    };
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Indentation glyphs for the line-oriented form produced by
/// [`Node::to_pretty_text`](crate::Node::to_pretty_text).
///
/// A node at depth `d` below the root is preceded by `d - 1` copies of
/// `indent` and one `marker`. Not intended for round-trip parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyFormat {
    pub indent: &'static str,
    pub marker: &'static str,
    pub null_literal: &'static str,
}

impl PrettyFormat {
    pub const DEFAULT: PrettyFormat = PrettyFormat {
        indent: "  ",
        marker: "- ",
        null_literal: "null",
    };
}

impl Default for PrettyFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}
