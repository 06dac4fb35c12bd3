pub mod control;
pub mod page;
pub mod preview;
