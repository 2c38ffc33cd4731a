pub mod form;
pub mod form_field;
pub mod status_message;

pub use form::*;
pub use form_field::*;
pub use status_message::*;
