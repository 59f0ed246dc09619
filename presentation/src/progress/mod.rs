//! Progress reporting

pub mod spinner;
