//! Port definitions (interfaces to the outside world)

pub mod text_generator;
