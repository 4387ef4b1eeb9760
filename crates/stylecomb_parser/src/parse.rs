//! Recursive-descent parser.
//!
//! Groups the lexer's tokens into containers. The parser has no opinion on
//! formatting: whitespace and comment tokens land in the tree exactly where
//! they were found, so `serialize(parse(text)) == text` holds for any input
//! the parser accepts.

use std::iter::Peekable;
use std::vec::IntoIter;

use stylecomb_ast::{Node, NodeKind};

use crate::lexer::{Token, tokenize};
use crate::{ParseError, Syntax};

/// Parses source text into a [`NodeKind::Stylesheet`] tree.
pub fn parse(syntax: Syntax, text: &str) -> Result<Node, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(syntax, text).into_iter().peekable(),
        last_offset: 0,
    };
    parser.stylesheet()
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    last_offset: usize,
}

impl Parser {
    fn peek_kind(&mut self) -> Option<NodeKind> {
        self.tokens.peek().map(|t| t.node.kind)
    }

    fn peek_op(&mut self, op: &str) -> bool {
        self.tokens
            .peek()
            .is_some_and(|t| t.node.kind == NodeKind::Operator && t.node.text() == op)
    }

    fn peek_offset(&mut self) -> usize {
        self.tokens.peek().map_or(self.last_offset, |t| t.offset)
    }

    fn bump(&mut self) -> Node {
        let token = self.tokens.next().expect("bump called after peek");
        self.last_offset = token.offset;
        token.node
    }

    fn stylesheet(&mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.peek_kind() {
                None => break,
                Some(NodeKind::Space | NodeKind::Comment | NodeKind::DeclDelim) => {
                    children.push(self.bump());
                }
                Some(NodeKind::Operator) if self.peek_op("@") => {
                    children.push(self.at_rule()?);
                }
                Some(NodeKind::Operator) if self.peek_op("}") => {
                    return Err(ParseError::invalid_source_at(
                        "unexpected '}'",
                        self.peek_offset(),
                    ));
                }
                Some(_) => self.segment(&mut children, false)?,
            }
        }
        Ok(Node::container(NodeKind::Stylesheet, children))
    }

    /// Parses one selector-plus-block or one declaration, starting from the
    /// first significant token. Tokens are buffered until the terminator
    /// (`{`, `;`, `}` or end of input) reveals what the segment is.
    fn segment(&mut self, out: &mut Vec<Node>, in_block: bool) -> Result<(), ParseError> {
        let mut seg: Vec<Node> = Vec::new();
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                None => {
                    out.append(&mut seg);
                    return Ok(());
                }
                Some(NodeKind::DeclDelim) if depth == 0 => {
                    finish_segment(seg, out);
                    out.push(self.bump());
                    return Ok(());
                }
                Some(NodeKind::Operator) if depth == 0 && self.peek_op("{") => {
                    self.bump();
                    let trailing = split_trailing_space(&mut seg);
                    let selector = Node::container(NodeKind::Selector, seg);
                    let block = self.braced(NodeKind::Block)?;
                    let mut children = vec![selector];
                    children.extend(trailing);
                    children.push(block);
                    out.push(Node::container(NodeKind::Ruleset, children));
                    return Ok(());
                }
                Some(NodeKind::Operator) if depth == 0 && self.peek_op("}") => {
                    if !in_block {
                        return Err(ParseError::invalid_source_at(
                            "unexpected '}'",
                            self.peek_offset(),
                        ));
                    }
                    finish_segment(seg, out);
                    return Ok(());
                }
                Some(NodeKind::Operator) => {
                    if self.peek_op("(") || self.peek_op("[") {
                        depth += 1;
                    } else if self.peek_op(")") || self.peek_op("]") {
                        depth = depth.saturating_sub(1);
                    }
                    seg.push(self.bump());
                }
                Some(_) => seg.push(self.bump()),
            }
        }
    }

    /// Parses the contents of a brace-delimited body. The opening brace has
    /// already been consumed; the matching closing brace is consumed here.
    fn braced(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        let open = self.last_offset;
        let mut children = Vec::new();
        loop {
            match self.peek_kind() {
                None => {
                    return Err(ParseError::invalid_source_at("unclosed block", open));
                }
                Some(NodeKind::Space | NodeKind::Comment | NodeKind::DeclDelim) => {
                    children.push(self.bump());
                }
                Some(NodeKind::Operator) if self.peek_op("}") => {
                    self.bump();
                    return Ok(Node::container(kind, children));
                }
                Some(NodeKind::Operator) if self.peek_op("@") => {
                    children.push(self.at_rule()?);
                }
                Some(_) => self.segment(&mut children, true)?,
            }
        }
    }

    fn at_rule(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![self.bump()]; // '@'
        let name = match self.peek_kind() {
            Some(NodeKind::Ident) => {
                let ident = self.bump();
                let name = ident.text().to_ascii_lowercase();
                children.push(ident);
                name
            }
            _ => String::new(),
        };
        // At-rules whose body nests whole rulesets rather than declarations.
        let nests_rulesets = name.ends_with("keyframes")
            || matches!(name.as_str(), "media" | "supports" | "document");

        loop {
            match self.peek_kind() {
                None => break,
                Some(NodeKind::DeclDelim) => {
                    children.push(self.bump());
                    break;
                }
                Some(NodeKind::Operator) if self.peek_op("{") => {
                    self.bump();
                    let kind = if nests_rulesets {
                        NodeKind::AtRuleBody
                    } else {
                        NodeKind::Block
                    };
                    children.push(self.braced(kind)?);
                    break;
                }
                Some(NodeKind::Operator) if self.peek_op("}") => break,
                Some(_) => children.push(self.bump()),
            }
        }
        Ok(Node::container(NodeKind::AtRule, children))
    }
}

/// Turns a buffered segment into a declaration if it has a top-level colon;
/// otherwise flushes the tokens unchanged.
fn finish_segment(mut seg: Vec<Node>, out: &mut Vec<Node>) {
    let Some(colon) = top_level_colon(&seg) else {
        out.append(&mut seg);
        return;
    };

    let mut rest = seg.split_off(colon);
    let colon_node = rest.remove(0);
    let mid = split_trailing_space(&mut seg);
    let mut tail = split_trailing_space(&mut rest);
    let lead = split_leading_space(&mut rest);

    let mut decl = vec![Node::container(NodeKind::Property, seg)];
    decl.extend(mid);
    decl.push(colon_node);
    decl.extend(lead);
    decl.push(Node::container(NodeKind::Value, rest));

    out.push(Node::container(NodeKind::Declaration, decl));
    out.append(&mut tail);
}

fn top_level_colon(seg: &[Node]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, node) in seg.iter().enumerate() {
        if node.kind != NodeKind::Operator {
            continue;
        }
        match node.text() {
            "(" | "[" => depth += 1,
            ")" | "]" => depth = depth.saturating_sub(1),
            ":" if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

fn split_trailing_space(nodes: &mut Vec<Node>) -> Vec<Node> {
    let cut = nodes
        .iter()
        .rposition(|n| !n.is_space())
        .map_or(0, |i| i + 1);
    nodes.split_off(cut)
}

fn split_leading_space(nodes: &mut Vec<Node>) -> Vec<Node> {
    let cut = nodes.iter().position(|n| !n.is_space()).unwrap_or(nodes.len());
    nodes.drain(..cut).collect()
}
