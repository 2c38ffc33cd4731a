use dioxus::prelude::*;

/// Live region that reports the outcome of the last submission.
///
/// Always rendered, even when empty, so screen readers pick up the first update.
#[component]
pub fn StatusMessage(id: String, text: String) -> Element {
    rsx! {
        p {
            id: "{id}",
            class: "status-message",
            role: "status",
            aria_live: "polite",
            "{text}"
        }
    }
}
