use crate::domain::{TagList, TagRequest};
use crate::error::{ReltagError, Result};
use crate::git::{command_line, CommandRunner, GitClient};
use crate::ui;

/// Creates annotated tags whose message carries the shortlog since the
/// previous tag
pub struct TagWriter<'a, R> {
    git: &'a GitClient<R>,
    dry_run: bool,
    verbose: bool,
}

impl<'a, R: CommandRunner> TagWriter<'a, R> {
    pub fn new(git: &'a GitClient<R>) -> Self {
        TagWriter {
            git,
            dry_run: false,
            verbose: false,
        }
    }

    /// Only trace the tag command instead of running it
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the tag request for `name` at `target`.
    ///
    /// The message is `message` (or `<repo> <name>` when empty), a blank line,
    /// then the shortlog from the latest tag in `tags` to `target`.
    pub fn compose(
        &self,
        tags: &TagList,
        name: &str,
        target: &str,
        message: &str,
    ) -> Result<TagRequest> {
        let previous = tags.latest().unwrap_or_default();
        let shortlog = self.git.shortlog(previous, target)?;

        let headline = if message.is_empty() {
            format!("{} {}", self.git.repo_name()?, name)
        } else {
            message.to_string()
        };

        Ok(TagRequest {
            name: name.to_string(),
            target_commit: target.to_string(),
            message: format!("{}\n\n{}", headline, shortlog),
        })
    }

    /// Compose the request and, unless in dry-run mode, create the tag.
    ///
    /// Returns the request that was (or would have been) submitted.
    pub fn create_tag(
        &self,
        tags: &TagList,
        name: &str,
        target: &str,
        message: &str,
    ) -> Result<TagRequest> {
        let request = self.compose(tags, name, target, message)?;
        let args = request.to_args();

        if self.verbose {
            ui::display_trace(&format!(
                "Running: {}",
                command_line(self.git.program(), &args)
            ));
        }

        if self.dry_run {
            return Ok(request);
        }

        self.git
            .run(&args)
            .map_err(|e| ReltagError::TagCreationFailed {
                tag: request.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(request)
    }
}
