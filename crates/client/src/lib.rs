pub mod config;
pub mod handler;
pub mod posts;

pub use handler::{AddPostForm, FieldValue, StatusText, SubmissionHandler, SubmitTrigger};
pub use posts::{HttpPostsApi, PostsApi};
