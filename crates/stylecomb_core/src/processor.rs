//! Document processing.

use stylecomb_parser::Syntax;

use crate::{Error, RuleEngine};

/// Normalizes one document.
///
/// A pure function of `(text, syntax, engine)`: parse, run every activated
/// handler, serialize. Empty input is returned unchanged without touching
/// the parser. Parser rejection is fatal to this document only and carries
/// the caller-supplied label, usually the file path.
pub fn process_document(
    engine: &RuleEngine,
    text: &str,
    syntax: Syntax,
    label: &str,
) -> Result<String, Error> {
    if text.is_empty() {
        return Ok(text.to_string());
    }

    let mut tree = stylecomb_parser::parse(syntax, text).map_err(|e| Error::Parse {
        path: label.to_string(),
        message: e.to_string(),
    })?;

    engine.run(&mut tree);

    Ok(stylecomb_parser::serialize(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn engine_with(pairs: &[(&str, serde_json::Value)]) -> RuleEngine {
        let mut config = Config::new();
        for (name, value) in pairs {
            config.set_option(*name, value.clone());
        }
        RuleEngine::from_config(&config)
    }

    #[test]
    fn no_handlers_means_byte_identical_output() {
        let engine = engine_with(&[]);
        let input = "a {\n\tcolor : #FFF ;\n}\n\n";
        let out = process_document(&engine, input, Syntax::Css, "test.css").unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn empty_input_skips_the_parser() {
        // "{" alone would be a parse error; empty text never reaches it.
        let engine = engine_with(&[("block-indent", json!(2))]);
        let out = process_document(&engine, "", Syntax::Css, "empty.css").unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn block_indent_scenario() {
        let engine = engine_with(&[("block-indent", json!(3))]);
        let out = process_document(&engine, "a{color:red}", Syntax::Css, "x.css").unwrap();
        assert_eq!(out, "a{\n   color:red\n}");
    }

    #[test]
    fn invalid_option_value_leaves_the_document_alone() {
        let engine = engine_with(&[("block-indent", json!(3.5))]);
        let input = "a{color:red}";
        let out = process_document(&engine, input, Syntax::Css, "x.css").unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn parse_errors_carry_the_label() {
        let engine = engine_with(&[]);
        let err = process_document(&engine, "a{color:red", Syntax::Css, "broken.css").unwrap_err();
        match err {
            Error::Parse { path, message } => {
                assert_eq!(path, "broken.css");
                assert!(message.contains("unclosed block"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn processing_is_idempotent() {
        let engine = engine_with(&[
            ("remove-empty-rulesets", json!(true)),
            ("always-semicolon", json!(true)),
            ("color-case", json!("lower")),
            ("strip-spaces", json!(true)),
            ("eof-newline", json!(true)),
            ("stick-brace", json!(true)),
            ("colon-space", json!(true)),
            ("rule-indent", json!(2)),
            ("block-indent", json!(2)),
            ("unitless-zero", json!(true)),
            ("sort-order", json!(["position", "color", "margin"])),
        ]);
        let input = "b{}\na{margin:0px;color:#FFF;position:absolute}  \n";
        let once = process_document(&engine, input, Syntax::Css, "x.css").unwrap();
        let twice = process_document(&engine, &once, Syntax::Css, "x.css").unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn scss_documents_process_too() {
        let engine = engine_with(&[("color-case", json!("lower"))]);
        let out = process_document(
            &engine,
            "a { b { color: #ABC } // note\n}",
            Syntax::Scss,
            "x.scss",
        )
        .unwrap();
        assert_eq!(out, "a { b { color: #abc } // note\n}");
    }
}
