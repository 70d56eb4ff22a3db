//! # Salix
//!
//! A tree data structure library for Rust.
//!
//! ## Overview
//!
//! Salix provides a generic, mutable n-ary tree. Every [`Node`] owns an
//! optional value and an ordered list of exclusively-owned children, and a
//! [`Tree`] is a thin handle over its root node. The library covers
//! structural mutation, membership queries, aggregate metrics, the three
//! classic traversal orders, and three textual renderings: delimited text,
//! JSON, and indented pretty text.
//!
//! ## Example
//!
//! ```
//! use salix::Tree;
//!
//! let mut tree = Tree::with_root("A");
//! tree.add("B");
//! tree.add("C");
//! tree.find_mut(&"B").unwrap().add_value("D");
//!
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.to_text(), "[A]=([B]=([D])),([C])");
//! ```

mod builder;
mod display;
mod error;
mod format;
mod iterator;
mod json;
mod node;
mod tree;


pub use builder::{NodeBuilder, TreeBuilder};
pub use display::{DelimitedText, PrettyText};
pub use error::{TreeError, TreeResult};
pub use format::{JsonFormat, PrettyFormat, TextFormat};
pub use iterator::{BreadthFirst, Values};
pub use node::Node;
pub use tree::Tree;
