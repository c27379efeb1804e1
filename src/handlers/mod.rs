pub mod form;
pub mod html;
