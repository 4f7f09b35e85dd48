//! Browser bootstrap for the page component.
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use crate::app::App;

/// Id of the mount point provided by `index.html`.
pub const ROOT_ID: &str = "root";

/// Mounts [`App`] into `#root_id`, or into `<body>` when that element is missing.
pub fn mount_app(root_id: &str) {
    match find_mount_point(root_id) {
        Some(el) => {
            tracing::info!("mounting app into #{}", root_id);
            mount_to(el, || view! { <App/> })
        }
        None => {
            tracing::warn!("#{} not found or not an HTML element, mounting into <body>", root_id);
            mount_to_body(|| view! { <App/> })
        }
    }
}

fn find_mount_point(root_id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(root_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
