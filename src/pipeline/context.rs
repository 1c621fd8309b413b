use crate::domain::{TagList, TagRequest, Version};

/// Default prefix put in front of the version in tag names
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Default commit to tag
pub const DEFAULT_COMMIT: &str = "HEAD";

/// Mutable state of one pipeline run
///
/// Nothing here outlives the run: a fresh context starts unresolved, so
/// separate runs never see each other's discovered tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineContext {
    pub version: Version,
    /// Message for the next `tag`; cleared once a tag is created
    pub message: String,
    pub tag_prefix: String,
    pub commit: String,
    /// Set once the previous version was discovered or given explicitly
    pub previous_version_resolved: bool,
    /// Tags scanned from the log, populated at most once
    pub tags: Option<TagList>,
    /// Tags created (or, in dry-run mode, prepared) so far
    pub created: Vec<TagRequest>,
}

impl Default for PipelineContext {
    fn default() -> Self {
        PipelineContext {
            version: Version::default(),
            message: String::new(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            commit: DEFAULT_COMMIT.to_string(),
            previous_version_resolved: false,
            tags: None,
            created: Vec::new(),
        }
    }
}
