//! `element-case`: letter case of element selectors.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{Case, OptionError, RuleHandler};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let case = Case::parse("element-case", value)?;
    Ok(Box::new(ElementCase { case }))
}

struct ElementCase {
    case: Case,
}

impl RuleHandler for ElementCase {
    fn name(&self) -> &'static str {
        "element-case"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Selector {
            return;
        }
        let mut depth = 0usize;
        for i in 0..children.len() {
            match children[i].kind {
                NodeKind::Operator => match children[i].text() {
                    "[" => depth += 1,
                    "]" => depth = depth.saturating_sub(1),
                    _ => {}
                },
                // An ident is an element name unless it is a class, pseudo,
                // or attribute fragment.
                NodeKind::Ident if depth == 0 && !follows_name_sigil(children, i) => {
                    let cased = self.case.apply(children[i].text());
                    children[i].set_text(cased);
                }
                _ => {}
            }
        }
    }
}

fn follows_name_sigil(children: &[Node], i: usize) -> bool {
    i > 0
        && children[i - 1].kind == NodeKind::Operator
        && matches!(children[i - 1].text(), "." | ":" | "$" | "@" | "&" | "%")
}

#[cfg(test)]
mod tests {
    use crate::rules::test_support::rewrite;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("lower", "LI > A { color: red }", "li > a { color: red }")]
    #[case("upper", "li, em { color: red }", "LI, EM { color: red }")]
    fn cases_element_names(#[case] case: &str, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite("element-case", json!(case), input), expected);
    }

    #[test]
    fn classes_and_pseudos_keep_their_case() {
        let out = rewrite(
            "element-case",
            json!("upper"),
            "a.myClass:hover { color: red }",
        );
        assert_eq!(out, "A.myClass:hover { color: red }");
    }

    #[test]
    fn attribute_fragments_keep_their_case() {
        let out = rewrite("element-case", json!("upper"), "a[href=docs] { color: red }");
        assert_eq!(out, "A[href=docs] { color: red }");
    }

    #[test]
    fn not_arguments_are_elements() {
        let out = rewrite("element-case", json!("lower"), "DIV:not(SPAN) { color: red }");
        assert_eq!(out, "div:not(span) { color: red }");
    }

    #[test]
    fn properties_are_untouched() {
        let input = "a { COLOR: red }";
        assert_eq!(rewrite("element-case", json!("lower"), input), input);
    }
}
