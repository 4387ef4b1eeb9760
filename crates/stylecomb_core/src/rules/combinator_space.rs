//! `combinator-space`: spacing around `>`, `+` and `~` combinators.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, set_spacing_around, spacing_pair};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let (before, after) = spacing_pair("combinator-space", value, (" ", " "))?;
    Ok(Box::new(CombinatorSpace { before, after }))
}

struct CombinatorSpace {
    before: String,
    after: String,
}

impl RuleHandler for CombinatorSpace {
    fn name(&self) -> &'static str {
        "combinator-space"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Selector {
            return;
        }
        // Brackets shield attribute operators like `~=` from rewriting.
        let mut depth = 0usize;
        let mut i = 0;
        while i < children.len() {
            if children[i].kind == NodeKind::Operator {
                match children[i].text() {
                    "[" | "(" => depth += 1,
                    "]" | ")" => depth = depth.saturating_sub(1),
                    ">" | "+" | "~" if depth == 0 => {
                        i = set_spacing_around(children, i, &self.before, &self.after);
                    }
                    _ => {}
                }
            }
            i += 1;
        }
    }
}
