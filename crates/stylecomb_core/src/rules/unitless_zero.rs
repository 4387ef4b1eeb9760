//! `unitless-zero`: drop length units from zero values.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, require_true};

const LENGTH_UNITS: &[&str] = &[
    "px", "em", "ex", "ch", "rem", "vw", "vh", "vmin", "vmax", "cm", "mm", "in", "pt", "pc", "q",
];

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    require_true("unitless-zero", value)?;
    Ok(Box::new(UnitlessZero))
}

struct UnitlessZero;

impl RuleHandler for UnitlessZero {
    fn name(&self) -> &'static str {
        "unitless-zero"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Value {
            return;
        }
        // Zeros inside parentheses stay as written: `calc(0px + 1em)` is
        // not the same expression as `calc(0 + 1em)`.
        let mut depth = 0usize;
        let mut i = 0;
        while i < children.len() {
            match children[i].kind {
                NodeKind::Operator => match children[i].text() {
                    "(" => depth += 1,
                    ")" => depth = depth.saturating_sub(1),
                    _ => {}
                },
                NodeKind::Number if depth == 0 && is_zero(children[i].text()) => {
                    let unit_follows = children
                        .get(i + 1)
                        .is_some_and(|n| n.kind == NodeKind::Ident && is_length_unit(n.text()));
                    if unit_follows {
                        children.remove(i + 1);
                        children[i].set_text("0");
                    }
                }
                _ => {}
            }
            i += 1;
        }
    }
}

fn is_zero(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(|n| n == 0.0)
}

fn is_length_unit(text: &str) -> bool {
    LENGTH_UNITS.iter().any(|u| text.eq_ignore_ascii_case(u))
}

#[cfg(test)]
mod tests {
    use crate::rules::test_support::rewrite;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("a{margin:0px}", "a{margin:0}")]
    #[case("a{margin:0px 0em 0 10px}", "a{margin:0 0 0 10px}")]
    #[case("a{margin:0.0px}", "a{margin:0}")]
    #[case("a{top:-0px}", "a{top:0}")]
    fn strips_length_units_from_zero(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite("unitless-zero", json!(true), input), expected);
    }

    #[rstest]
    #[case("a{transition:0s}")]
    #[case("a{transform:rotate(0deg)}")]
    #[case("a{width:calc(0px + 1em)}")]
    #[case("a{margin:0%}")]
    fn meaningful_units_survive(#[case] input: &str) {
        assert_eq!(rewrite("unitless-zero", json!(true), input), input);
    }
}
