//! Node definition.
//!
//! The core tree node type used throughout stylecomb.

use serde::Serialize;

/// Syntactic category of a [`Node`].
///
/// Container kinds hold an ordered sequence of children; leaf kinds hold a
/// raw text value. A node's kind never changes during processing: rule
/// handlers rewrite children, not tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Root of a parsed document.
    Stylesheet,
    /// A selector plus its declaration block.
    Ruleset,
    /// The selector part of a ruleset, commas included.
    Selector,
    /// A `{ ... }` declaration block. Braces are implicit: they belong to
    /// the node, not to its children, and are emitted by the serializer.
    Block,
    /// An at-rule (`@import ...;`, `@media ... { ... }`).
    AtRule,
    /// The `{ ... }` body of an at-rule that nests whole rulesets.
    /// Entering its children increments the indentation level.
    AtRuleBody,
    /// A single `property: value` declaration.
    Declaration,
    /// The property side of a declaration.
    Property,
    /// The value side of a declaration.
    Value,

    /// Whitespace run.
    Space,
    /// A `/* ... */` or (scss/less) `// ...` comment, delimiters included.
    Comment,
    /// An identifier or keyword.
    Ident,
    /// A numeric literal, sign and decimal point included.
    Number,
    /// A `#`-prefixed token: hex color in values, id in selectors.
    Hash,
    /// A quoted string, quotes included.
    Str,
    /// A single punctuation character that is not a declaration delimiter.
    Operator,
    /// A `;` separating declarations inside a block.
    DeclDelim,
    /// Uninterpreted text, e.g. the inside of `url(...)`.
    Raw,
}

impl NodeKind {
    /// Returns true for kinds that hold a raw text value instead of
    /// children.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Space
                | NodeKind::Comment
                | NodeKind::Ident
                | NodeKind::Number
                | NodeKind::Hash
                | NodeKind::Str
                | NodeKind::Operator
                | NodeKind::DeclDelim
                | NodeKind::Raw
        )
    }
}

/// A node in the stylesheet tree.
///
/// Every node is exclusively owned by its parent, so handlers can mutate a
/// node's children in place without aliasing concerns. Leaf nodes carry
/// their source text in `value`; container nodes carry children and leave
/// `value` empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// The syntactic category of this node.
    pub kind: NodeKind,
    /// Child nodes (container kinds).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Raw text (leaf kinds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Node {
    /// Creates a leaf node holding raw text.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        debug_assert!(kind.is_leaf());
        Self {
            kind,
            children: Vec::new(),
            value: Some(value.into()),
        }
    }

    /// Creates a container node from its children.
    pub fn container(kind: NodeKind, children: Vec<Node>) -> Self {
        debug_assert!(!kind.is_leaf());
        Self {
            kind,
            children,
            value: None,
        }
    }

    /// Shorthand for a whitespace leaf.
    pub fn space(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Space, value)
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Returns true if this node is a whitespace leaf.
    pub fn is_space(&self) -> bool {
        self.kind == NodeKind::Space
    }

    /// The raw text of a leaf node, or `""` for containers.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Replaces the raw text of a leaf node.
    pub fn set_text(&mut self, value: impl Into<String>) {
        debug_assert!(self.is_leaf());
        self.value = Some(value.into());
    }
}
