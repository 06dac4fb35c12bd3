pub mod form;
pub mod image;
