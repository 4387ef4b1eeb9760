//! `sort-order`: declaration order inside blocks.
//!
//! The configured array ranks property names; an array of arrays ranks
//! whole groups. Declarations are stably sorted by rank, so unranked
//! properties keep their relative order after every ranked one. Blocks
//! containing anything beyond declarations (nested rulesets, at-rules,
//! loose tokens) are left untouched.

use std::collections::HashMap;

use serde_json::Value;
use stylecomb_ast::{Node, NodeKind};

use super::{OptionError, RuleHandler};

pub(crate) fn configure(value: &Value) -> Result<Box<dyn RuleHandler>, OptionError> {
    let expected = "an array of property names or groups of property names";
    let Some(groups) = value.as_array() else {
        return Err(OptionError::invalid("sort-order", expected, value));
    };

    let mut rank = HashMap::new();
    for (group_index, group) in groups.iter().enumerate() {
        match group {
            Value::String(name) => {
                rank.entry(name.to_lowercase()).or_insert(group_index);
            }
            Value::Array(names) => {
                for name in names {
                    let Some(name) = name.as_str() else {
                        return Err(OptionError::invalid("sort-order", expected, value));
                    };
                    rank.entry(name.to_lowercase()).or_insert(group_index);
                }
            }
            _ => return Err(OptionError::invalid("sort-order", expected, value)),
        }
    }

    Ok(Box::new(SortOrder { rank }))
}

struct SortOrder {
    rank: HashMap<String, usize>,
}

/// A declaration with the trivia that travels with it: whatever preceded
/// it, and its terminator run up to the semicolon.
struct Unit {
    lead: Vec<Node>,
    decl: Node,
    tail: Vec<Node>,
}

impl RuleHandler for SortOrder {
    fn name(&self) -> &'static str {
        "sort-order"
    }

    fn process(&self, kind: NodeKind, children: &mut Vec<Node>, _level: usize) {
        if kind != NodeKind::Block {
            return;
        }
        let plain = children.iter().all(|c| {
            matches!(
                c.kind,
                NodeKind::Space | NodeKind::Comment | NodeKind::Declaration | NodeKind::DeclDelim
            )
        });
        if !plain {
            return;
        }
        if children
            .iter()
            .filter(|c| c.kind == NodeKind::Declaration)
            .count()
            < 2
        {
            return;
        }

        let mut units: Vec<Unit> = Vec::new();
        let mut lead: Vec<Node> = Vec::new();
        let mut iter = std::mem::take(children).into_iter().peekable();

        while let Some(node) = iter.next() {
            if node.kind != NodeKind::Declaration {
                lead.push(node);
                continue;
            }
            let mut unit = Unit {
                lead: std::mem::take(&mut lead),
                decl: node,
                tail: Vec::new(),
            };
            // Absorb trivia through the declaration's own semicolon; with
            // no semicolon in sight the trivia belongs to what follows.
            let mut buffered: Vec<Node> = Vec::new();
            while let Some(trivia) =
                iter.next_if(|n| matches!(n.kind, NodeKind::Space | NodeKind::Comment))
            {
                buffered.push(trivia);
            }
            if let Some(delim) = iter.next_if(|n| n.kind == NodeKind::DeclDelim) {
                buffered.push(delim);
                unit.tail = buffered;
            } else {
                lead = buffered;
            }
            units.push(unit);
        }
        let trailing = lead;

        units.sort_by_key(|u| self.rank_of(&u.decl));

        let last = units.len() - 1;
        for (i, unit) in units.into_iter().enumerate() {
            children.extend(unit.lead);
            children.push(unit.decl);
            let terminated = unit.tail.iter().any(|n| n.kind == NodeKind::DeclDelim);
            children.extend(unit.tail);
            // Reordering must not let two declarations run together.
            if !terminated && i < last {
                children.push(Node::leaf(NodeKind::DeclDelim, ";"));
            }
        }
        children.extend(trailing);
    }
}

impl SortOrder {
    fn rank_of(&self, decl: &Node) -> usize {
        let name: String = decl
            .children
            .iter()
            .find(|c| c.kind == NodeKind::Property)
            .map(|p| p.children.iter().map(Node::text).collect())
            .unwrap_or_default();
        self.rank
            .get(&name.trim().to_lowercase())
            .copied()
            .unwrap_or(usize::MAX)
    }
}
