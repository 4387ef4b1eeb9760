//! `leading-zero`: presence of the zero before a decimal point.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, as_flag};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let add = as_flag("leading-zero", value)?;
    Ok(Box::new(LeadingZero { add }))
}

struct LeadingZero {
    add: bool,
}

impl RuleHandler for LeadingZero {
    fn name(&self) -> &'static str {
        "leading-zero"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Value {
            return;
        }
        for child in children.iter_mut() {
            if child.kind != NodeKind::Number {
                continue;
            }
            if let Some(rewritten) = rewrite_number(child.text(), self.add) {
                child.set_text(rewritten);
            }
        }
    }
}

fn rewrite_number(text: &str, add: bool) -> Option<String> {
    let (sign, body) = match text.strip_prefix(['+', '-']) {
        Some(body) => (&text[..1], body),
        None => ("", text),
    };
    if add {
        body.starts_with('.').then(|| format!("{sign}0{body}"))
    } else {
        (body.starts_with("0.") && body.len() > 2).then(|| format!("{sign}{}", &body[1..]))
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_support::rewrite;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(true, "a{margin:.5em}", "a{margin:0.5em}")]
    #[case(true, "a{margin:-.5em}", "a{margin:-0.5em}")]
    #[case(true, "a{margin:0.5em}", "a{margin:0.5em}")]
    #[case(false, "a{margin:0.5em}", "a{margin:.5em}")]
    #[case(false, "a{margin:-0.5em}", "a{margin:-.5em}")]
    #[case(false, "a{margin:.5em}", "a{margin:.5em}")]
    fn rewrites_fractions(#[case] add: bool, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite("leading-zero", json!(add), input), expected);
    }

    #[rstest]
    #[case(true, "a{margin:0}")]
    #[case(false, "a{margin:0}")]
    #[case(false, "a{margin:10.5em}")]
    fn whole_numbers_are_untouched(#[case] add: bool, #[case] input: &str) {
        assert_eq!(rewrite("leading-zero", json!(add), input), input);
    }
}
