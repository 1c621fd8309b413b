/// Version tags reachable from a reference, most recent first.
///
/// Duplicates are kept as they were found; the first entry is the one that
/// counts as the previous release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new(tags: Vec<String>) -> Self {
        TagList { tags }
    }

    /// The most recent tag, if any
    pub fn latest(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// An annotated tag about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub name: String,
    pub target_commit: String,
    pub message: String,
}

impl TagRequest {
    /// Arguments for `git tag` that create this tag
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "tag".to_string(),
            "--annotate".to_string(),
            "-m".to_string(),
            self.message.clone(),
            self.name.clone(),
            self.target_commit.clone(),
        ]
    }
}

/// Tag name for a version: the prefix followed by the rendered version
pub fn tag_name(prefix: &str, version: &crate::domain::Version) -> String {
    format!("{}{}", prefix, version)
}

/// Strip the configured prefix from a tag name, if present
pub fn strip_prefix<'a>(tag: &'a str, prefix: &str) -> &'a str {
    tag.strip_prefix(prefix).unwrap_or(tag)
}
