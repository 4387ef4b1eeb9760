//! `remove-empty-rulesets`: drop rulesets whose block holds nothing but
//! whitespace.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, require_true};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    require_true("remove-empty-rulesets", value)?;
    Ok(Box::new(RemoveEmptyRulesets))
}

struct RemoveEmptyRulesets;

impl RuleHandler for RemoveEmptyRulesets {
    fn name(&self) -> &'static str {
        "remove-empty-rulesets"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if !matches!(
            kind,
            NodeKind::Stylesheet | NodeKind::AtRuleBody | NodeKind::Block
        ) {
            return;
        }
        children.retain(|child| !is_empty_ruleset(child));
    }
}

fn is_empty_ruleset(node: &Node) -> bool {
    if node.kind != NodeKind::Ruleset {
        return false;
    }
    node.children
        .iter()
        .find(|c| c.kind == NodeKind::Block)
        .is_some_and(|block| block.children.iter().all(Node::is_space))
}
