pub mod add_post;
pub mod not_found;

use add_post::AddPost;
use dioxus::prelude::*;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    AddPost {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
