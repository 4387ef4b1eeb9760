//! `stick-brace`: whitespace between a selector and its opening brace.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, spacing};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let value = spacing("stick-brace", value, " ")?;
    Ok(Box::new(StickBrace { value }))
}

struct StickBrace {
    value: String,
}

impl RuleHandler for StickBrace {
    fn name(&self) -> &'static str {
        "stick-brace"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if !matches!(kind, NodeKind::Ruleset | NodeKind::AtRule) {
            return;
        }
        let Some(body) = children
            .iter()
            .rposition(|c| matches!(c.kind, NodeKind::Block | NodeKind::AtRuleBody))
        else {
            return;
        };
        let mut start = body;
        while start > 0 && children[start - 1].is_space() {
            start -= 1;
        }
        children.drain(start..body);
        if !self.value.is_empty() {
            children.insert(start, Node::space(&self.value));
        }
    }
}
