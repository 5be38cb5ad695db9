use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "unknown route");

    rsx! {
        div { class: "vstack page centered",
            h1 { "Page not found" }
            p { class: "text-muted", "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::Landing {}, "Back to home" }
        }
    }
}
