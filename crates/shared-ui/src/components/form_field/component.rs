use dioxus::prelude::*;

/// A labelled input bound to a controlled value.
///
/// `id` doubles as the input's `name`, so the field can be addressed the same
/// way from the DOM and from the submitted form data.
#[component]
pub fn FormField(
    id: String,
    label: String,
    value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-field-label", r#for: "{id}", "{label}" }
            input {
                class: "form-field-input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
