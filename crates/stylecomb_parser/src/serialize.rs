//! Tree-to-text serialization.

use stylecomb_ast::{Node, NodeKind};

/// Serializes a tree back into source text.
///
/// Leaf nodes emit their raw text; container nodes emit their children in
/// order. Braces are owned by the `Block` and `AtRuleBody` kinds, so they
/// reappear here no matter what handlers did to the body. The output is
/// dialect-independent: the tree already carries every byte of the dialect
/// it was parsed from.
pub fn serialize(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    if let Some(value) = &node.value {
        out.push_str(value);
        return;
    }
    match node.kind {
        NodeKind::Block | NodeKind::AtRuleBody => {
            out.push('{');
            for child in &node.children {
                write_node(child, out);
            }
            out.push('}');
        }
        _ => {
            for child in &node.children {
                write_node(child, out);
            }
        }
    }
}
