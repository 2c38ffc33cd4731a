use client::{
    AddPostForm, FieldValue, HttpPostsApi, StatusText, SubmissionHandler, SubmitTrigger,
};
use dioxus::prelude::*;
use shared_types::ConfigError;
use shared_ui::{Form, FormField, StatusMessage};

/// Input bound to a string signal.
#[derive(Clone, Copy)]
struct SignalField(Signal<String>);

impl FieldValue for SignalField {
    fn value(&self) -> String {
        String::clone(&self.0.peek())
    }
}

/// Status element bound to a string signal.
#[derive(Clone, Copy)]
struct SignalStatus(Signal<String>);

impl StatusText for SignalStatus {
    fn set_text(&self, text: &str) {
        let mut signal = self.0;
        signal.set(text.to_string());
    }
}

struct DomSubmit<'a>(&'a FormEvent);

impl SubmitTrigger for DomSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Turn the configured client into a handler, or report the configuration
/// error in the status field and give up on this submission.
fn handler_or_report<S: StatusText>(
    api: Result<HttpPostsApi, ConfigError>,
    status: &S,
) -> Option<SubmissionHandler<HttpPostsApi>> {
    match api {
        Ok(api) => Some(SubmissionHandler::new(api)),
        Err(e) => {
            tracing::error!(error = %e, "Posts client is misconfigured");
            status.set_text(&format!("Error: {}", e));
            None
        }
    }
}

/// Add-post page: a title, a numeric view count, and a status line.
///
/// Each submit runs the handler to completion on its own task. Submitting again
/// while a request is pending starts a second, independent request.
#[component]
pub fn AddPost() -> Element {
    let mut title = use_signal(String::new);
    let mut views = use_signal(String::new);
    let response_message = use_signal(String::new);

    let api: Result<HttpPostsApi, ConfigError> =
        use_hook(|| HttpPostsApi::from_config(client::config::load_api_config()));

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            let status = SignalStatus(response_message);
            let Some(handler) = handler_or_report(api, &status) else {
                evt.prevent_default();
                return;
            };

            let form = AddPostForm {
                title: SignalField(title),
                views: SignalField(views),
                status,
            };
            handler.on_submit(&DomSubmit(&evt), &form).await;
        }
    };

    rsx! {
        div { class: "add-post-page",
            h1 { "Add a Post" }

            Form {
                id: "addPostForm",
                submit_label: "Add Post",
                onsubmit: handle_submit,
                FormField {
                    id: "title",
                    label: "Title",
                    value: title(),
                    on_input: move |e: FormEvent| title.set(e.value()),
                }
                FormField {
                    id: "views",
                    label: "Views",
                    input_type: "number",
                    value: views(),
                    on_input: move |e: FormEvent| views.set(e.value()),
                }
            }

            StatusMessage { id: "responseMessage", text: response_message() }
        }
    }
}
