//! `block-indent`: layout of block interiors.
//!
//! Every item of a block starts on its own line one unit deeper than the
//! block, and the closing brace returns to the block's own level.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, indent_unit, reindent};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let unit = indent_unit("block-indent", value)?;
    Ok(Box::new(BlockIndent { unit }))
}

struct BlockIndent {
    unit: String,
}

fn is_item(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Declaration | NodeKind::Ruleset | NodeKind::AtRule
    )
}

impl RuleHandler for BlockIndent {
    fn name(&self) -> &'static str {
        "block-indent"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, level: usize) {
        if !matches!(kind, NodeKind::Block | NodeKind::AtRuleBody) {
            return;
        }
        if !children.iter().any(is_item) {
            return;
        }

        let item_indent = format!("\n{}", self.unit.repeat(level + 1));
        reindent(children, &item_indent, is_item);

        let close_indent = format!("\n{}", self.unit.repeat(level));
        match children.last_mut() {
            Some(last) if last.is_space() => last.set_text(close_indent),
            _ => children.push(Node::space(close_indent)),
        }
    }
}
