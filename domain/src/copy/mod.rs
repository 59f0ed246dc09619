//! Copy brief and generated copy value objects

pub mod brief;
pub mod generated;

pub use brief::CopyBrief;
pub use generated::GeneratedCopy;
