//! Rule engine and tree walker.

use stylecomb_ast::{Node, NodeKind};
use tracing::{debug, warn};

use crate::Config;
use crate::rules::{CANONICAL_OPTIONS, RuleHandler};

/// The ordered list of activated handlers for one run.
pub struct RuleEngine {
    handlers: Vec<Box<dyn RuleHandler>>,
}

impl RuleEngine {
    /// Builds the activated handler list from configuration.
    ///
    /// The canonical table fixes the order; configuration only decides
    /// presence. A handler that rejects its configured value is skipped
    /// with a warning and the run continues without it.
    pub fn from_config(config: &Config) -> Self {
        let mut handlers: Vec<Box<dyn RuleHandler>> = Vec::new();
        for (name, factory) in CANONICAL_OPTIONS {
            let Some(value) = config.option(name) else {
                continue;
            };
            match factory(value) {
                Ok(handler) => handlers.push(handler),
                Err(e) => warn!("Skipping option '{}': {}", name, e),
            }
        }
        debug!("activated {} handlers", handlers.len());
        Self { handlers }
    }

    /// Activated option names, in execution order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Returns true if no handler is activated.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every activated handler over the whole tree, one handler at a
    /// time.
    ///
    /// Walking handler-major rather than node-major keeps precedence
    /// user-predictable: each handler sees the entire document exactly as
    /// its predecessors left it, no matter which tree depths the handlers
    /// touch.
    pub fn run(&self, tree: &mut Node) {
        for handler in &self.handlers {
            walk(tree, handler.as_ref(), 0);
        }
    }
}

/// Depth-first, pre-order traversal.
///
/// The handler rewrites a node's children before the walker descends into
/// them, so freshly inserted or replaced children are themselves visited.
/// The indentation level deepens only under an at-rule body, which is where
/// nested rule blocks live.
pub(crate) fn walk(node: &mut Node, handler: &dyn RuleHandler, level: usize) {
    if node.is_leaf() {
        return;
    }
    handler.process(node.kind, &mut node.children, level);
    let child_level = if node.kind == NodeKind::AtRuleBody {
        level + 1
    } else {
        level
    };
    for child in &mut node.children {
        walk(child, handler, child_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config_with(pairs: &[(&str, serde_json::Value)]) -> Config {
        let mut config = Config::new();
        for (name, value) in pairs {
            config.set_option(*name, value.clone());
        }
        config
    }

    #[test]
    fn execution_order_is_canonical_not_configuration_order() {
        let config = config_with(&[
            ("sort-order", json!(["color"])),
            ("block-indent", json!(2)),
            ("always-semicolon", json!(true)),
            ("remove-empty-rulesets", json!(true)),
        ]);
        let engine = RuleEngine::from_config(&config);
        assert_eq!(
            engine.handler_names(),
            vec![
                "remove-empty-rulesets",
                "always-semicolon",
                "block-indent",
                "sort-order",
            ]
        );
    }

    #[test]
    fn rejected_values_only_drop_their_own_handler() {
        let config = config_with(&[
            ("block-indent", json!(3.5)),
            ("always-semicolon", json!(true)),
        ]);
        let engine = RuleEngine::from_config(&config);
        assert_eq!(engine.handler_names(), vec!["always-semicolon"]);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let config = config_with(&[("no-such-option", json!(true))]);
        let engine = RuleEngine::from_config(&config);
        assert!(engine.is_empty());
    }

    #[derive(Default)]
    struct Recorder {
        seen: std::sync::Mutex<Vec<(NodeKind, usize)>>,
    }

    impl RuleHandler for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn process(&self, kind: NodeKind, children: &mut Vec<Node>, level: usize) {
            self.seen.lock().unwrap().push((kind, level));
            // Grow the tree mid-walk: the walker must pick this up.
            if kind == NodeKind::Stylesheet && children.is_empty() {
                children.push(Node::container(
                    NodeKind::Ruleset,
                    vec![Node::container(NodeKind::Selector, vec![])],
                ));
            }
        }
    }

    #[test]
    fn the_walker_visits_children_inserted_by_the_handler() {
        let recorder = Recorder::default();
        let mut tree = stylecomb_parser::parse(stylecomb_parser::Syntax::Css, "").unwrap();
        walk(&mut tree, &recorder, 0);

        let seen: Vec<_> = recorder.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (NodeKind::Stylesheet, 0),
                (NodeKind::Ruleset, 0),
                (NodeKind::Selector, 0),
            ]
        );
    }

    #[test]
    fn indent_level_deepens_only_under_at_rule_bodies() {
        let recorder = Recorder::default();
        let mut tree = stylecomb_parser::parse(
            stylecomb_parser::Syntax::Css,
            "@media print{a{color:red}}",
        )
        .unwrap();
        walk(&mut tree, &recorder, 0);

        let seen = recorder.seen.lock().unwrap().clone();
        assert!(seen.contains(&(NodeKind::AtRuleBody, 0)));
        assert!(seen.contains(&(NodeKind::Ruleset, 1)));
        assert!(seen.contains(&(NodeKind::Block, 1)));
        assert!(seen.contains(&(NodeKind::Declaration, 1)));
    }

    #[test]
    fn handlers_compose_in_order() {
        // remove-empty-rulesets runs to completion before always-semicolon,
        // so the empty ruleset never receives a semicolon pass.
        let config = config_with(&[
            ("remove-empty-rulesets", json!(true)),
            ("always-semicolon", json!(true)),
        ]);
        let engine = RuleEngine::from_config(&config);

        let mut tree =
            stylecomb_parser::parse(stylecomb_parser::Syntax::Css, "a{color:red}b{}").unwrap();
        engine.run(&mut tree);
        assert_eq!(stylecomb_parser::serialize(&tree), "a{color:red;}");
    }
}
