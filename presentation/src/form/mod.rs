//! Interactive brief collection

pub mod prompter;
