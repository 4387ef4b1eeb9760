//! `colon-space`: spacing around the colon of a declaration.

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler, set_spacing_around, spacing_pair};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let (before, after) = spacing_pair("colon-space", value, ("", " "))?;
    Ok(Box::new(ColonSpace { before, after }))
}

struct ColonSpace {
    before: String,
    after: String,
}

impl RuleHandler for ColonSpace {
    fn name(&self) -> &'static str {
        "colon-space"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Declaration {
            return;
        }
        let Some(colon) = children
            .iter()
            .position(|c| c.kind == NodeKind::Operator && c.text() == ":")
        else {
            return;
        };
        set_spacing_around(children, colon, &self.before, &self.after);
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_support::rewrite;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), "a{color:red}", "a{color: red}")]
    #[case(json!(true), "a{color   :   red}", "a{color: red}")]
    #[case(json!(["", ""]), "a{color : red}", "a{color:red}")]
    #[case(json!([" ", " "]), "a{color:red}", "a{color : red}")]
    fn spaces_the_colon(
        #[case] value: serde_json::Value,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(rewrite("colon-space", value, input), expected);
    }

    #[test]
    fn every_declaration_is_normalized() {
        let out = rewrite(
            "colon-space",
            json!(true),
            "a{color:red;margin :0}\nb{padding:0}",
        );
        assert_eq!(out, "a{color: red;margin: 0}\nb{padding: 0}");
    }

    #[test]
    fn selector_colons_are_untouched() {
        let out = rewrite("colon-space", json!(true), "a:hover{color:red}");
        assert_eq!(out, "a:hover{color: red}");
    }

    #[test]
    fn rejects_malformed_pairs() {
        let factory = crate::rules::CANONICAL_OPTIONS
            .iter()
            .find(|(name, _)| *name == "colon-space")
            .unwrap()
            .1;
        assert!(factory(&json!([" "])).is_err());
        assert!(factory(&json!(["x", " "])).is_err());
        assert!(factory(&json!(false)).is_err());
    }
}
