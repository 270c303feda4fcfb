pub mod form;
pub mod roster;
