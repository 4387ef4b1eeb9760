//! Canonical formatting options.
//!
//! One module per option. The [`CANONICAL_OPTIONS`] table fixes both the
//! complete option vocabulary and the execution order of the activated
//! handlers; configuration key order never matters.

mod always_semicolon;
mod block_indent;
mod colon_space;
mod color_case;
mod color_shorthand;
mod combinator_space;
mod element_case;
mod eof_newline;
mod leading_zero;
mod remove_empty_rulesets;
mod rule_indent;
mod sort_order;
mod stick_brace;
mod strip_spaces;
mod unitless_zero;

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};
use thiserror::Error;

/// One style-normalization rule, configured and ready to run.
///
/// Handlers are stateless per document: `process` is called once for every
/// container node of a tree and rewrites that node's children in place.
/// Anything a handler could get wrong is rejected at construction time, so
/// processing itself cannot fail.
pub trait RuleHandler: Send + Sync {
    /// Canonical option name.
    fn name(&self) -> &'static str;

    /// Rewrites `children` of a node of `kind` sitting at indentation
    /// `level`. The level is advisory context and must not be treated as
    /// mutable state.
    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, level: usize);
}

/// A handler rejected its configured value at setup time.
///
/// Always recovered where it occurs: the option is skipped with a warning
/// and the run continues without it.
#[derive(Debug, Error)]
#[error("option '{option}' cannot use {found}: expected {expected}")]
pub struct OptionError {
    option: &'static str,
    expected: &'static str,
    found: String,
}

impl OptionError {
    pub(crate) fn invalid(option: &'static str, expected: &'static str, value: &Value) -> Self {
        Self {
            option,
            expected,
            found: value.to_string(),
        }
    }
}

/// Builds a handler from its configured value.
pub type Factory = fn(&Value) -> Result<Box<dyn RuleHandler>, OptionError>;

/// The fixed option vocabulary, in execution order.
pub const CANONICAL_OPTIONS: &[(&str, Factory)] = &[
    ("remove-empty-rulesets", remove_empty_rulesets::configure),
    ("always-semicolon", always_semicolon::configure),
    ("color-case", color_case::configure),
    ("color-shorthand", color_shorthand::configure),
    ("element-case", element_case::configure),
    ("leading-zero", leading_zero::configure),
    ("strip-spaces", strip_spaces::configure),
    ("eof-newline", eof_newline::configure),
    ("stick-brace", stick_brace::configure),
    ("colon-space", colon_space::configure),
    ("combinator-space", combinator_space::configure),
    ("rule-indent", rule_indent::configure),
    ("block-indent", block_indent::configure),
    ("unitless-zero", unitless_zero::configure),
    ("sort-order", sort_order::configure),
];

/// Letter case selector shared by the `*-case` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    Lower,
    Upper,
}

impl Case {
    pub(crate) fn parse(option: &'static str, value: &Value) -> Result<Self, OptionError> {
        match value.as_str() {
            Some("lower") => Ok(Self::Lower),
            Some("upper") => Ok(Self::Upper),
            _ => Err(OptionError::invalid(
                option,
                "\"lower\" or \"upper\"",
                value,
            )),
        }
    }

    pub(crate) fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
        }
    }
}

/// `true` and nothing else.
pub(crate) fn require_true(option: &'static str, value: &Value) -> Result<(), OptionError> {
    match value {
        Value::Bool(true) => Ok(()),
        _ => Err(OptionError::invalid(option, "true", value)),
    }
}

/// Any boolean.
pub(crate) fn as_flag(option: &'static str, value: &Value) -> Result<bool, OptionError> {
    value
        .as_bool()
        .ok_or_else(|| OptionError::invalid(option, "a boolean", value))
}

/// An indent unit: `true` (four spaces), a non-negative integer (that many
/// spaces), or a string of spaces and tabs.
pub(crate) fn indent_unit(option: &'static str, value: &Value) -> Result<String, OptionError> {
    let expected = "true, a non-negative integer, or a string of spaces and tabs";
    match value {
        Value::Bool(true) => Ok("    ".to_string()),
        Value::Number(n) => n
            .as_u64()
            .map(|n| " ".repeat(n as usize))
            .ok_or_else(|| OptionError::invalid(option, expected, value)),
        Value::String(s) if s.chars().all(|c| c == ' ' || c == '\t') => Ok(s.clone()),
        _ => Err(OptionError::invalid(option, expected, value)),
    }
}

/// A single whitespace string, with `true` standing for a rule-specific
/// default.
pub(crate) fn spacing(
    option: &'static str,
    value: &Value,
    on_true: &str,
) -> Result<String, OptionError> {
    let expected = "true or a whitespace string";
    match value {
        Value::Bool(true) => Ok(on_true.to_string()),
        Value::String(s) if s.chars().all(char::is_whitespace) => Ok(s.clone()),
        _ => Err(OptionError::invalid(option, expected, value)),
    }
}

/// A `[before, after]` pair of whitespace strings, with `true` standing for
/// a rule-specific default.
pub(crate) fn spacing_pair(
    option: &'static str,
    value: &Value,
    on_true: (&str, &str),
) -> Result<(String, String), OptionError> {
    let expected = "true or a pair of whitespace strings";
    match value {
        Value::Bool(true) => Ok((on_true.0.to_string(), on_true.1.to_string())),
        Value::Array(items) if items.len() == 2 => {
            let mut pair = Vec::with_capacity(2);
            for item in items {
                match item {
                    Value::String(s) if s.chars().all(char::is_whitespace) => {
                        pair.push(s.clone());
                    }
                    _ => return Err(OptionError::invalid(option, expected, value)),
                }
            }
            Ok((pair.remove(0), pair.remove(0)))
        }
        _ => Err(OptionError::invalid(option, expected, value)),
    }
}

/// Collapses the whitespace run before every child matched by
/// `significant` into a single space node with the given text.
pub(crate) fn reindent(
    children: &mut Vec<Node>,
    indent: &str,
    significant: impl Fn(&Node) -> bool,
) {
    let mut i = 0;
    while i < children.len() {
        if significant(&children[i]) {
            let mut start = i;
            while start > 0 && children[start - 1].is_space() {
                start -= 1;
            }
            children.splice(start..i, [Node::space(indent)]);
            i = start + 1;
        }
        i += 1;
    }
}

/// Rewrites the whitespace on both sides of `children[idx]` and returns the
/// node's index after the rewrite.
pub(crate) fn set_spacing_around(
    children: &mut Vec<Node>,
    idx: usize,
    before: &str,
    after: &str,
) -> usize {
    let mut end = idx + 1;
    while end < children.len() && children[end].is_space() {
        end += 1;
    }
    children.drain(idx + 1..end);
    if !after.is_empty() {
        children.insert(idx + 1, Node::space(after));
    }

    let mut start = idx;
    while start > 0 && children[start - 1].is_space() {
        start -= 1;
    }
    children.drain(start..idx);
    if before.is_empty() {
        start
    } else {
        children.insert(start, Node::space(before));
        start + 1
    }
}
