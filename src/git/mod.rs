//! Git invocation layer
//!
//! Every interaction with the version-control tool goes through the
//! [CommandRunner] trait: run a program with an argument list and hand back
//! its captured standard output. The concrete implementations are:
//!
//! - [runner::SystemRunner]: spawns real processes
//! - [mock::MockRunner]: canned responses and a call log for tests
//!
//! [GitClient] knows the handful of command shapes git-reltag needs and is
//! what the rest of the crate talks to.

pub mod mock;
pub mod runner;
pub mod scanner;
pub mod writer;

pub use mock::MockRunner;
pub use runner::SystemRunner;
pub use scanner::scan_tags;
pub use writer::TagWriter;

use crate::domain::TagList;
use crate::error::{ReltagError, Result};
use std::path::Path;

/// Default version-control program
pub const DEFAULT_GIT: &str = "git";

/// Synchronous "run a program, capture stdout" primitive
///
/// Implementations must report a program that could not be started or that
/// exited unsuccessfully as [ReltagError::ExternalCommandFailed].
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its standard output
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        (**self).run(program, args)
    }
}

/// Render a command line for traces and error messages
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// The git commands git-reltag issues, bound to a runner and program name
pub struct GitClient<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> GitClient<R> {
    /// Create a client that invokes the default `git` program
    pub fn new(runner: R) -> Self {
        GitClient {
            runner,
            program: DEFAULT_GIT.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Switch to another version-control program for subsequent commands
    pub fn set_program(&mut self, program: impl Into<String>) {
        self.program = program.into();
    }

    /// Run the program with the given arguments
    pub fn run(&self, args: &[String]) -> Result<String> {
        self.runner.run(&self.program, args)
    }

    /// Decorated log of all commits reachable from HEAD, most recent first
    ///
    /// Each line holds the ref names of one commit, e.g. `HEAD -> main, tag: v1.0.0`.
    pub fn decorated_log(&self) -> Result<String> {
        self.run(&["log".to_string(), "--format=%D".to_string()])
    }

    /// Version tags in log order
    pub fn tags(&self) -> Result<TagList> {
        let log = self.decorated_log()?;
        Ok(scan_tags(&log))
    }

    /// Per-author commit summary for `start..end`, or all of `end` when
    /// `start` is empty
    pub fn shortlog(&self, start: &str, end: &str) -> Result<String> {
        self.run(&["shortlog".to_string(), commit_range(start, end)])
    }

    /// Name of the repository, taken from its top-level directory
    pub fn repo_name(&self) -> Result<String> {
        let args = ["rev-parse".to_string(), "--show-toplevel".to_string()];
        let unknown = |detail: String| {
            ReltagError::command(
                command_line(&self.program, &args),
                format!("Could not determine repo root directory{}", detail),
            )
        };

        let toplevel = self.run(&args).map_err(|e| unknown(format!(": {}", e)))?;
        Path::new(toplevel.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| unknown(String::new()))
    }
}

/// Revision range handed to shortlog
pub fn commit_range(start: &str, end: &str) -> String {
    if start.is_empty() {
        end.to_string()
    } else {
        format!("{}..{}", start, end)
    }
}
