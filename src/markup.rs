//! HTML materialization of a visual tree, independent of any browser.
use crate::tree::{NodeKind, VisualNode, VisualTree};

pub fn to_html(node: &VisualNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Markup of `tree` mounted into an empty `<div id="{root_id}">`.
pub fn mount_into_root(tree: &VisualTree, root_id: &str) -> String {
    format!(
        "<div id=\"{}\">{}</div>",
        escape(root_id),
        to_html(&tree.root)
    )
}

fn write_node(node: &VisualNode, out: &mut String) {
    let tag = match (&node.kind, node.kind.tag()) {
        (NodeKind::Text(text), _) => {
            out.push_str(&escape(text));
            return;
        }
        (_, Some(tag)) => tag,
        (_, None) => return,
    };

    out.push('<');
    out.push_str(tag);
    if !node.style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape(&node.style.to_css()));
        out.push('"');
    }
    out.push('>');
    for child in &node.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
