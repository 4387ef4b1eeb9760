//! `strip-spaces`: trailing whitespace at line ends and end of file.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, require_true};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    require_true("strip-spaces", value)?;
    Ok(Box::new(StripSpaces))
}

struct StripSpaces;

impl RuleHandler for StripSpaces {
    fn name(&self) -> &'static str {
        "strip-spaces"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        for child in children.iter_mut() {
            if child.is_space() {
                let stripped = strip_line_trailing(child.text());
                if stripped != child.text() {
                    child.set_text(stripped);
                }
            }
        }

        // End of file: drop spaces and tabs after the last newline too.
        if kind == NodeKind::Stylesheet {
            while let Some(i) = children.len().checked_sub(1) {
                if !children[i].is_space() {
                    break;
                }
                let trimmed = children[i].text().trim_end_matches([' ', '\t']).to_string();
                if trimmed.is_empty() {
                    children.pop();
                } else {
                    children[i].set_text(trimmed);
                    break;
                }
            }
        }
    }
}

fn strip_line_trailing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for c in text.chars() {
        match c {
            ' ' | '\t' => pending.push(c),
            '\n' | '\r' => {
                pending.clear();
                out.push(c);
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
        }
    }
    out.push_str(&pending);
    out
}
