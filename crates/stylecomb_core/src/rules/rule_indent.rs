//! `rule-indent`: indentation of declarations inside blocks.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, indent_unit, reindent};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let unit = indent_unit("rule-indent", value)?;
    Ok(Box::new(RuleIndent { unit }))
}

struct RuleIndent {
    unit: String,
}

impl RuleHandler for RuleIndent {
    fn name(&self) -> &'static str {
        "rule-indent"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, level: usize) {
        if !matches!(kind, NodeKind::Block | NodeKind::AtRuleBody) {
            return;
        }
        let indent = format!("\n{}", self.unit.repeat(level + 1));
        reindent(children, &indent, |n| n.kind == NodeKind::Declaration);
    }
}
