use leptos::*;
use leptos::html::{custom, Custom};
use crate::page;
use crate::tree::{NodeKind, VisualNode};

#[component]
pub fn App() -> impl IntoView {
    let tree = page::render();
    tracing::debug!("materializing page tree ({} nodes)", tree.nodes().count());

    node_view(&tree.root)
}

fn node_view(node: &VisualNode) -> View {
    let tag = match (&node.kind, node.kind.tag()) {
        (NodeKind::Text(text), _) => return text.clone().into_view(),
        (_, Some(tag)) => tag,
        (_, None) => return ().into_view(),
    };

    let css = node.style.to_css();
    let style = (!css.is_empty()).then_some(css);

    custom(Custom::new(tag))
        .attr("style", style)
        .child(node.children.iter().map(node_view).collect_view())
        .into_view()
}
