//! `color-shorthand`: collapse or expand hex color literals.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::color_case::is_hex_color;
use super::{OptionError, RuleHandler, as_flag};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let shorten = as_flag("color-shorthand", value)?;
    Ok(Box::new(ColorShorthand { shorten }))
}

struct ColorShorthand {
    shorten: bool,
}

impl RuleHandler for ColorShorthand {
    fn name(&self) -> &'static str {
        "color-shorthand"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Value {
            return;
        }
        for child in children.iter_mut() {
            if child.kind != NodeKind::Hash || !is_hex_color(child.text()) {
                continue;
            }
            let rewritten = if self.shorten {
                shorten(child.text())
            } else {
                expand(child.text())
            };
            if let Some(rewritten) = rewritten {
                child.set_text(rewritten);
            }
        }
    }
}

fn shorten(text: &str) -> Option<String> {
    let digits: Vec<char> = text[1..].chars().collect();
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    if !digits.chunks(2).all(|pair| pair[0] == pair[1]) {
        return None;
    }
    let mut out = String::from("#");
    out.extend(digits.iter().step_by(2));
    Some(out)
}

fn expand(text: &str) -> Option<String> {
    let digits: Vec<char> = text[1..].chars().collect();
    if digits.len() != 3 && digits.len() != 4 {
        return None;
    }
    let mut out = String::from("#");
    for c in digits {
        out.push(c);
        out.push(c);
    }
    Some(out)
}
