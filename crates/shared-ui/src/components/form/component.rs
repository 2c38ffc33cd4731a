use dioxus::prelude::*;

/// A form with a trailing submit button that never lets the browser perform
/// its own submission or navigation.
///
/// `prevent_default` runs synchronously in the DOM listener, before `onsubmit`
/// is called; an async `onsubmit` resumes too late to do it reliably itself.
#[component]
pub fn Form(
    submit_label: String,
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        form {
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
            button { r#type: "submit", class: "button form-submit", "{submit_label}" }
        }
    }
}
