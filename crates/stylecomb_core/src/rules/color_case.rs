//! `color-case`: letter case of hex color literals.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{Case, OptionError, RuleHandler};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let case = Case::parse("color-case", value)?;
    Ok(Box::new(ColorCase { case }))
}

struct ColorCase {
    case: Case,
}

impl RuleHandler for ColorCase {
    fn name(&self) -> &'static str {
        "color-case"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Value {
            return;
        }
        for child in children.iter_mut() {
            if child.kind == NodeKind::Hash && is_hex_color(child.text()) {
                let cased = self.case.apply(child.text());
                child.set_text(cased);
            }
        }
    }
}

/// Hex digits only, in one of the CSS color widths.
pub(super) fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
