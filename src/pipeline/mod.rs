//! Operation pipeline
//!
//! Runs a validated sequence of operations against one [PipelineContext].
//! Operations execute strictly in order and the run stops at the first one
//! that fails. The previous release is discovered from the tag history the
//! first time an operation needs it and reused for the rest of the run.

pub mod context;
pub mod operation;

pub use context::PipelineContext;
pub use operation::{check_operations, Operation, OperationKind};

use crate::config::Config;
use crate::domain::tag::{strip_prefix, tag_name};
use crate::domain::{TagList, Version};
use crate::error::{ReltagError, Result};
use crate::git::{CommandRunner, GitClient, TagWriter};
use crate::ui;

/// Applies operations to a version and tags commits with it
pub struct Pipeline<R> {
    git: GitClient<R>,
    context: PipelineContext,
    dry_run: bool,
    verbose: bool,
}

impl<R: CommandRunner> Pipeline<R> {
    pub fn new(runner: R) -> Self {
        Pipeline {
            git: GitClient::new(runner),
            context: PipelineContext::default(),
            dry_run: false,
            verbose: false,
        }
    }

    /// Create a pipeline seeded from configuration
    pub fn from_config(runner: R, config: &Config) -> Self {
        let mut pipeline = Pipeline::new(runner)
            .verbose(config.verbose)
            .dry_run(config.dry_run);
        pipeline.git.set_program(config.git.clone());
        pipeline.context.tag_prefix = config.tag_prefix.clone();
        pipeline.context.commit = config.commit.clone();
        pipeline
    }

    /// Prepare tags without creating them. Implies verbose output.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self.verbose |= dry_run;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    pub fn version(&self) -> &Version {
        &self.context.version
    }

    fn trace(&self, message: impl AsRef<str>) {
        if self.verbose {
            ui::display_trace(message.as_ref());
        }
    }

    /// Validate `tokens`, then apply them
    pub fn run<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<()> {
        let operations = check_operations(tokens)?;
        self.apply(&operations)
    }

    /// Apply operations in order, stopping at the first failure.
    ///
    /// Changes made by earlier operations stay in the context.
    pub fn apply(&mut self, operations: &[Operation]) -> Result<()> {
        if self.dry_run {
            self.trace("Dry-run enabled. Not applying any changes.");
        }

        for operation in operations {
            self.apply_one(operation)
                .map_err(|e| ReltagError::operation(&operation.token, e))?;
        }
        Ok(())
    }

    fn apply_one(&mut self, operation: &Operation) -> Result<()> {
        if operation.kind.needs_previous_version() {
            self.resolve_previous_version()?;
        }

        let arg = operation.argument.as_str();
        match operation.kind {
            OperationKind::Git => self.set_git(arg),
            OperationKind::BumpMajor => {
                self.trace("Bumping major version");
                self.context.version.bump_major()
            }
            OperationKind::BumpMinor => {
                self.trace("Bumping minor version");
                self.context.version.bump_minor()
            }
            OperationKind::BumpPatch => {
                self.trace("Bumping patch level");
                self.context.version.bump_patch()
            }
            OperationKind::SetVersion => self.set_version(arg),
            OperationKind::SetPrerelease => self.set_prerelease(arg),
            OperationKind::SetBuild => self.set_build(arg),
            OperationKind::Commit => {
                self.trace(format!("Setting git commit to: {}", arg));
                self.context.commit = arg.to_string();
                Ok(())
            }
            OperationKind::Message => {
                self.trace(format!("Injecting message to tag: {}", arg));
                self.context.message = arg.to_string();
                Ok(())
            }
            OperationKind::SetTagPrefix => {
                self.trace(format!("Setting the tag prefix to: {}", arg));
                self.context.tag_prefix = arg.to_string();
                Ok(())
            }
            OperationKind::Tag => self.tag(),
        }
    }

    fn set_git(&mut self, program: &str) -> Result<()> {
        self.trace(format!("Setting git to {}", program));
        self.git.set_program(program);
        Ok(())
    }

    fn set_version(&mut self, text: &str) -> Result<()> {
        self.trace(format!("Setting version to {}", text));
        self.context.version.set(text)?;
        // an explicit version takes the place of the discovered one
        self.context.previous_version_resolved = true;
        Ok(())
    }

    fn set_prerelease(&mut self, prerelease: &str) -> Result<()> {
        self.trace(format!("Setting pre-release to {}", prerelease));
        semver::Prerelease::new(prerelease)
            .map_err(|e| ReltagError::version(format!("pre-release {:?}: {}", prerelease, e)))?;
        self.context.version.set_prerelease(prerelease);
        Ok(())
    }

    fn set_build(&mut self, build: &str) -> Result<()> {
        self.trace(format!("Setting build to {}", build));
        semver::BuildMetadata::new(build)
            .map_err(|e| ReltagError::version(format!("build {:?}: {}", build, e)))?;
        self.context.version.set_build(build);
        Ok(())
    }

    fn tag(&mut self) -> Result<()> {
        let name = tag_name(&self.context.tag_prefix, &self.context.version);
        self.trace(format!("Creating the git tag: {}", name));
        if !self.context.message.is_empty() {
            self.trace(format!("Injecting message: {}", self.context.message));
        }

        // never scanned when an explicit version replaced discovery
        let no_tags = TagList::default();
        let tags = self.context.tags.as_ref().unwrap_or(&no_tags);
        let request = TagWriter::new(&self.git)
            .dry_run(self.dry_run)
            .verbose(self.verbose)
            .create_tag(tags, &name, &self.context.commit, &self.context.message)?;

        self.context.message.clear();
        self.context.created.push(request);
        Ok(())
    }

    /// Scan the tag history once per run
    fn load_tags(&mut self) -> Result<()> {
        if self.context.tags.is_none() {
            let tags = self.git.tags()?;
            self.trace(format!("Found {} tag(s)", tags.len()));
            self.context.tags = Some(tags);
        }
        Ok(())
    }

    /// Seed the version from the most recent tag.
    ///
    /// Runs at most once per pipeline. Without any tags the version stays at
    /// its current value (0.0.0 for a fresh run).
    pub fn resolve_previous_version(&mut self) -> Result<()> {
        if self.context.previous_version_resolved {
            return Ok(());
        }

        self.load_tags()?;
        let latest = self
            .context
            .tags
            .as_ref()
            .and_then(TagList::latest)
            .map(str::to_string);

        if let Some(tag) = latest {
            let text = strip_prefix(&tag, &self.context.tag_prefix);
            self.trace(format!("Found {} as previous version", text));
            self.context.version =
                Version::parse(text).map_err(|e| ReltagError::PreviousVersionUnparsable {
                    tag: tag.clone(),
                    cause: Box::new(e),
                })?;
        }

        self.context.previous_version_resolved = true;
        Ok(())
    }
}
