//! `always-semicolon`: terminate the last declaration of every block.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, require_true};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    require_true("always-semicolon", value)?;
    Ok(Box::new(AlwaysSemicolon))
}

struct AlwaysSemicolon;

impl RuleHandler for AlwaysSemicolon {
    fn name(&self) -> &'static str {
        "always-semicolon"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Block {
            return;
        }
        let Some(last) = children
            .iter()
            .rposition(|c| c.kind == NodeKind::Declaration)
        else {
            return;
        };
        let terminated = children[last + 1..]
            .iter()
            .any(|c| c.kind == NodeKind::DeclDelim);
        if !terminated {
            children.insert(last + 1, Node::leaf(NodeKind::DeclDelim, ";"));
        }
    }
}
