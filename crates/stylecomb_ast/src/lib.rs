//! # stylecomb_ast
//!
//! Tree types for stylecomb.
//!
//! This crate defines the tagged, nested container that every other part of
//! stylecomb operates on. It carries no syntax knowledge beyond the kind
//! tags themselves: the parser decides what becomes a node, the rule
//! handlers decide what a node means.

mod node;

pub use node::{Node, NodeKind};
