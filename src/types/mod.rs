pub mod form;

pub use form::{AstCheckForm, INVALID_DWELLING_PLACEHOLDER, LoginForm};
