//! # stylecomb_parser
//!
//! Lossless parsing and serialization for stylecomb.
//!
//! This crate provides:
//! - A `Syntax` enum for the supported stylesheet dialects
//! - `parse`, converting source text into a [`stylecomb_ast::Node`] tree
//! - `serialize`, converting a tree back into source text
//!
//! ## Architecture
//!
//! The tokenizer keeps every input byte, whitespace and comments included,
//! and the parser only groups tokens into containers. Serializing an
//! unmodified tree therefore reproduces the input byte-for-byte, which is
//! what lets the rest of the system detect changes by comparing strings.
//!
//! ## Example
//!
//! ```rust
//! use stylecomb_parser::{Syntax, parse, serialize};
//!
//! let source = "a { color: red }";
//! let tree = parse(Syntax::Css, source).unwrap();
//! assert_eq!(serialize(&tree), source);
//! ```

mod error;
mod lexer;
mod parse;
mod serialize;
mod syntax;

pub use error::ParseError;
pub use parse::parse;
pub use serialize::serialize;
pub use syntax::Syntax;
