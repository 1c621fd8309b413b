use crate::error::{ReltagError, Result};
use std::fmt;

/// The fixed set of operations a run can be made of
///
/// Names ending in `=` take the text after the first `=` of the token as
/// their argument; the others take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Git,
    BumpMajor,
    BumpMinor,
    BumpPatch,
    SetVersion,
    SetPrerelease,
    SetBuild,
    Commit,
    Message,
    SetTagPrefix,
    Tag,
}

impl OperationKind {
    pub const ALL: &'static [OperationKind] = &[
        OperationKind::Git,
        OperationKind::BumpMajor,
        OperationKind::BumpMinor,
        OperationKind::BumpPatch,
        OperationKind::SetVersion,
        OperationKind::SetPrerelease,
        OperationKind::SetBuild,
        OperationKind::Commit,
        OperationKind::Message,
        OperationKind::SetTagPrefix,
        OperationKind::Tag,
    ];

    /// The operation name as written on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Git => "git=",
            OperationKind::BumpMajor => "bump-major",
            OperationKind::BumpMinor => "bump-minor",
            OperationKind::BumpPatch => "bump-patch",
            OperationKind::SetVersion => "set-version=",
            OperationKind::SetPrerelease => "set-prerelease=",
            OperationKind::SetBuild => "set-build=",
            OperationKind::Commit => "commit=",
            OperationKind::Message => "message=",
            OperationKind::SetTagPrefix => "set-tag-prefix=",
            OperationKind::Tag => "tag",
        }
    }

    /// One-line description shown by `--list`
    pub fn help(&self) -> &'static str {
        match self {
            OperationKind::Git => "Git program to use.",
            OperationKind::BumpMajor => "Bump the major version number.",
            OperationKind::BumpMinor => "Bump the minor version number.",
            OperationKind::BumpPatch => "Bump the patch level version number.",
            OperationKind::SetVersion => "Set explicit version.",
            OperationKind::SetPrerelease => "Set version pre-release field.",
            OperationKind::SetBuild => "Set version build field.",
            OperationKind::Commit => "Commit to operate on. Default: HEAD",
            OperationKind::Message => "Message to inject into the tag",
            OperationKind::SetTagPrefix => "Set tag prefix. Default 'v'.",
            OperationKind::Tag => "Create a tag.",
        }
    }

    /// Look up an operation by its name (including a trailing `=`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn takes_argument(&self) -> bool {
        self.name().ends_with('=')
    }

    /// Whether the operation builds on the previously released version
    pub fn needs_previous_version(&self) -> bool {
        matches!(
            self,
            OperationKind::BumpMajor
                | OperationKind::BumpMinor
                | OperationKind::BumpPatch
                | OperationKind::SetPrerelease
                | OperationKind::SetBuild
                | OperationKind::Tag
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated operation token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    /// Inline argument; empty for operations that take none
    pub argument: String,
    /// The token exactly as given, for error reports
    pub token: String,
}

/// Operation name of a token: everything up to and including the first `=`
pub fn operation_name(token: &str) -> &str {
    match token.find('=') {
        Some(idx) => &token[..=idx],
        None => token,
    }
}

impl Operation {
    /// Parse a single `name` or `name=value` token
    pub fn parse(token: &str) -> Option<Self> {
        let name = operation_name(token);
        let kind = OperationKind::from_name(name)?;
        let argument = if kind.takes_argument() {
            token[name.len()..].to_string()
        } else {
            String::new()
        };

        Some(Operation {
            kind,
            argument,
            token: token.to_string(),
        })
    }
}

/// Validate all tokens before anything runs.
///
/// Every unrecognized operation name is reported at once, each name once,
/// in order of first appearance.
pub fn check_operations<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Operation>> {
    let mut operations = Vec::with_capacity(tokens.len());
    let mut invalid: Vec<String> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match Operation::parse(token) {
            Some(operation) => operations.push(operation),
            None => {
                let name = operation_name(token).to_string();
                if !invalid.contains(&name) {
                    invalid.push(name);
                }
            }
        }
    }

    if invalid.is_empty() {
        Ok(operations)
    } else {
        Err(ReltagError::InvalidOperations { names: invalid })
    }
}
