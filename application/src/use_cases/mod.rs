//! Application use cases

pub mod generate_copy;
