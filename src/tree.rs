//! Visual tree produced by the page renderer, before any host materialization.
use serde::Serialize;
use crate::style::StyleMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Container,
    Heading,
    Paragraph,
    Emphasis,
    Text(String),
}

impl NodeKind {
    /// Host element tag. Text nodes have none.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            NodeKind::Container => Some("div"),
            NodeKind::Heading => Some("h1"),
            NodeKind::Paragraph => Some("p"),
            NodeKind::Emphasis => Some("span"),
            NodeKind::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisualNode {
    pub kind: NodeKind,
    pub style: StyleMap,
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    pub fn element(kind: NodeKind, style: StyleMap, children: Vec<VisualNode>) -> Self {
        Self { kind, style, children }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(content.into()),
            style: StyleMap::new(),
            children: Vec::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Pre-order walk, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenated text of every text node under this one.
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|n| match &n.kind {
                NodeKind::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a VisualNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a VisualNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisualTree {
    pub root: VisualNode,
}

impl VisualTree {
    pub fn new(root: VisualNode) -> Self {
        Self { root }
    }

    pub fn nodes(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    pub fn find_all<F>(&self, pred: F) -> Vec<&VisualNode>
    where
        F: Fn(&VisualNode) -> bool,
    {
        self.nodes().filter(|&n| pred(n)).collect()
    }

    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&VisualNode) -> bool,
    {
        self.nodes().filter(|&n| pred(n)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VisualTree {
        VisualTree::new(VisualNode::element(
            NodeKind::Container,
            StyleMap::new(),
            vec![
                VisualNode::element(
                    NodeKind::Heading,
                    StyleMap::new(),
                    vec![VisualNode::text("A")],
                ),
                VisualNode::element(
                    NodeKind::Paragraph,
                    StyleMap::new(),
                    vec![
                        VisualNode::text("B"),
                        VisualNode::element(
                            NodeKind::Emphasis,
                            StyleMap::new(),
                            vec![VisualNode::text("C")],
                        ),
                        VisualNode::text("D"),
                    ],
                ),
            ],
        ))
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = sample();
        let tags: Vec<_> = tree.nodes().map(|n| n.kind.tag().unwrap_or("#text")).collect();
        assert_eq!(tags, vec!["div", "h1", "#text", "p", "#text", "span", "#text", "#text"]);
    }

    #[test]
    fn text_content_concatenates_in_document_order() {
        let tree = sample();
        assert_eq!(tree.root.text_content(), "ABCD");
        assert_eq!(tree.root.children[1].text_content(), "BCD");
    }

    #[test]
    fn count_and_find_by_kind() {
        let tree = sample();
        assert_eq!(tree.count(|n| n.is_text()), 4);
        let spans = tree.find_all(|n| n.kind == NodeKind::Emphasis);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text_content(), "C");
    }
}
