//! Rendering of trees into their textual forms.
//!
//! Both forms go through [`std::fmt`]: [`Node::delimited`] and
//! [`Node::pretty`] return lightweight adapters implementing [`Display`],
//! and [`Node::to_text`] / [`Node::to_pretty_text`] capture them into owned
//! strings. The delimiter and indentation literals come from
//! [`TextFormat`] and [`PrettyFormat`]; the defaults are a fixed contract.

use std::fmt::{self, Display};

use crate::{
    format::{PrettyFormat, TextFormat},
    node::Node,
    tree::Tree,
};

/// [`Display`] adapter for the single-line delimited form.
pub struct DelimitedText<'a, Data> {
    node: &'a Node<Data>,
    format: &'a TextFormat,
}

impl<Data> Display for DelimitedText<'_, Data>
where
    Data: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.format;

        f.write_str(format.value_prefix)?;
        match self.node.value() {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str(format.null_literal)?,
        }
        f.write_str(format.value_suffix)?;

        if self.node.is_leaf() {
            return Ok(());
        }

        f.write_str(format.value_separator)?;
        for (index, child) in self.node.children().iter().enumerate() {
            if index > 0 {
                f.write_str(format.children_separator)?;
            }
            f.write_str(format.children_prefix)?;
            Display::fmt(&DelimitedText { node: child, format }, f)?;
            f.write_str(format.children_suffix)?;
        }
        Ok(())
    }
}

/// [`Display`] adapter for the line-oriented indented form.
pub struct PrettyText<'a, Data> {
    node: &'a Node<Data>,
    format: &'a PrettyFormat,
}

impl<Data> Display for PrettyText<'_, Data>
where
    Data: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(f, self.node, 0, self.format)
    }
}

// A node at depth d is prefixed with d - 1 indent units and one marker; the
// root line carries neither. Every line ends in a newline.
fn write_pretty<Data>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<Data>,
    depth: usize,
    format: &PrettyFormat,
) -> fmt::Result
where
    Data: Display,
{
    for _ in 1..depth {
        f.write_str(format.indent)?;
    }
    if depth > 0 {
        f.write_str(format.marker)?;
    }
    match node.value() {
        Some(value) => write!(f, "{value}")?,
        None => f.write_str(format.null_literal)?,
    }
    f.write_str("\n")?;

    for child in node.children() {
        write_pretty(f, child, depth + 1, format)?;
    }
    Ok(())
}

impl<Data> Node<Data>
where
    Data: Display,
{
    /// Borrowing [`Display`] adapter for the delimited form, using the
    /// default [`TextFormat`].
    pub fn delimited(&self) -> DelimitedText<'_, Data> {
        self.delimited_with(&TextFormat::DEFAULT)
    }

    pub fn delimited_with<'a>(&'a self, format: &'a TextFormat) -> DelimitedText<'a, Data> {
        DelimitedText { node: self, format }
    }

    /// Render the delimited form: the value in its prefix/suffix (the null
    /// literal when absent), then for non-leaves the value separator and
    /// each child's rendering enclosed in the children prefix/suffix,
    /// joined by the children separator.
    ///
    /// The reference four-node tree renders as `[A]=([B]=([D])),([C])`.
    pub fn to_text(&self) -> String {
        self.delimited().to_string()
    }

    pub fn to_text_with(&self, format: &TextFormat) -> String {
        self.delimited_with(format).to_string()
    }

    /// Borrowing [`Display`] adapter for the indented form, using the
    /// default [`PrettyFormat`].
    pub fn pretty(&self) -> PrettyText<'_, Data> {
        self.pretty_with(&PrettyFormat::DEFAULT)
    }

    pub fn pretty_with<'a>(&'a self, format: &'a PrettyFormat) -> PrettyText<'a, Data> {
        PrettyText { node: self, format }
    }

    /// Render the indented form: one line per node in depth-first insertion
    /// order, children of the root at depth 1. Not intended for round-trip
    /// parsing.
    pub fn to_pretty_text(&self) -> String {
        self.pretty().to_string()
    }

    pub fn to_pretty_text_with(&self, format: &PrettyFormat) -> String {
        self.pretty_with(format).to_string()
    }
}

impl<Data> Display for Node<Data>
where
    Data: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.pretty(), f)
    }
}

impl<Data> Display for Tree<Data>
where
    Data: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.root().pretty(), f)
    }
}
