use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path other than the add-post form.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            h1 { "Page Not Found" }
            p {
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::AddPost {}, "Back to the form" }
        }
    }
}
