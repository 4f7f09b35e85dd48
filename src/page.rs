//! The placeholder landing page.
//!
//! Tracking views will replace the subtitle once they exist; for now the page
//! only confirms that the frontend builds and mounts.
use crate::style::StyleMap;
use crate::theme::Theme;
use crate::tree::{NodeKind, VisualNode, VisualTree};

pub const TITLE: &str = "PMS 大作戰";
pub const SUBTITLE_LEAD: &str = "Frontend ";
pub const SUBTITLE_EMPHASIS: &str = "build OK";
pub const SUBTITLE_TAIL: &str = " · tracking features are on the way.";

/// Renders the page with the default theme.
pub fn render() -> VisualTree {
    render_with(&Theme::DEFAULT)
}

/// Renders the page with `theme`.
///
/// The theme's `accent_color` must differ from its `subtitle_color`, otherwise the
/// emphasized span is indistinguishable from the surrounding paragraph.
pub fn render_with(theme: &Theme) -> VisualTree {
    let heading = VisualNode::element(
        NodeKind::Heading,
        heading_style(theme),
        vec![VisualNode::text(TITLE)],
    );

    let emphasis = VisualNode::element(
        NodeKind::Emphasis,
        emphasis_style(theme),
        vec![VisualNode::text(SUBTITLE_EMPHASIS)],
    );

    let subtitle = VisualNode::element(
        NodeKind::Paragraph,
        subtitle_style(theme),
        vec![
            VisualNode::text(SUBTITLE_LEAD),
            emphasis,
            VisualNode::text(SUBTITLE_TAIL),
        ],
    );

    VisualTree::new(VisualNode::element(
        NodeKind::Container,
        container_style(theme),
        vec![heading, subtitle],
    ))
}

fn container_style(theme: &Theme) -> StyleMap {
    StyleMap::new()
        .with("min-height", "100vh")
        .with("margin", "0")
        .with("padding", "0")
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("gap", theme.gap)
        .with("font-family", theme.font_family)
        .with("background", theme.background)
        .with("color", theme.text_color)
}

fn heading_style(theme: &Theme) -> StyleMap {
    StyleMap::new()
        .with("margin", "0")
        .with("font-size", theme.title_size)
        .with("font-weight", theme.title_weight)
        .with("color", theme.text_color)
        .with("letter-spacing", "0.05em")
}

fn subtitle_style(theme: &Theme) -> StyleMap {
    StyleMap::new()
        .with("margin", "0")
        .with("font-size", theme.subtitle_size)
        .with("color", theme.subtitle_color)
}

fn emphasis_style(theme: &Theme) -> StyleMap {
    StyleMap::new()
        .with("text-decoration", "underline")
        .with("color", theme.accent_color)
        .with("font-weight", "bold")
}
