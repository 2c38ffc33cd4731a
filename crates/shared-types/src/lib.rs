pub mod config;
pub mod error;
pub mod post;

pub use config::*;
pub use error::*;
pub use post::*;
