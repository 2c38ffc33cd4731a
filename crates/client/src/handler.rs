use shared_types::{status_message, PostDraft};

use crate::posts::PostsApi;

/// A form field whose current text can be read.
pub trait FieldValue {
    fn value(&self) -> String;
}

impl FieldValue for String {
    fn value(&self) -> String {
        self.clone()
    }
}

impl FieldValue for &str {
    fn value(&self) -> String {
        (*self).to_string()
    }
}

/// The element that shows the outcome of a submission.
pub trait StatusText {
    fn set_text(&self, text: &str);
}

/// The event that triggered a submission.
pub trait SubmitTrigger {
    /// Stop the host from performing its own form submission/navigation.
    fn prevent_default(&self);
}

/// The three elements the handler works against.
#[derive(Debug, Clone)]
pub struct AddPostForm<T, V, S> {
    pub title: T,
    pub views: V,
    pub status: S,
}

/// Reacts to an add-post form submission: builds a draft from the fields,
/// sends it, and writes the outcome into the status element.
///
/// There is no in-flight guard; overlapping submissions each send their own
/// request and each write the status once when their request settles.
#[derive(Debug, Clone)]
pub struct SubmissionHandler<A> {
    api: A,
}

impl<A: PostsApi> SubmissionHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn on_submit<E, T, V, S>(&self, trigger: &E, form: &AddPostForm<T, V, S>)
    where
        E: SubmitTrigger + ?Sized,
        T: FieldValue,
        V: FieldValue,
        S: StatusText,
    {
        trigger.prevent_default();

        let draft = PostDraft::from_fields(form.title.value(), &form.views.value());
        let outcome = self.api.create_post(&draft).await;

        if let Err(e) = &outcome {
            tracing::warn!(kind = %e.kind(), error = %e, "Post submission failed");
        }

        form.status.set_text(&status_message(&outcome));
    }
}
