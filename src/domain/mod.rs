//! Domain logic - pure version and tag rules independent of git invocations

pub mod tag;
pub mod version;

pub use tag::{TagList, TagRequest};
pub use version::Version;
