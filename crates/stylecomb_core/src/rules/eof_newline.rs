//! `eof-newline`: newline at end of file.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, as_flag};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let ensure = as_flag("eof-newline", value)?;
    Ok(Box::new(EofNewline { ensure }))
}

struct EofNewline {
    ensure: bool,
}

impl RuleHandler for EofNewline {
    fn name(&self) -> &'static str {
        "eof-newline"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Stylesheet || children.is_empty() {
            return;
        }
        if self.ensure {
            match children.last_mut() {
                Some(last) if last.is_space() => {
                    if !last.text().ends_with('\n') {
                        let text = format!("{}\n", last.text());
                        last.set_text(text);
                    }
                }
                _ => children.push(Node::space("\n")),
            }
        } else {
            while let Some(i) = children.len().checked_sub(1) {
                if !children[i].is_space() || !children[i].text().ends_with('\n') {
                    break;
                }
                let trimmed = children[i].text().trim_end_matches('\n').to_string();
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
