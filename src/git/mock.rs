use crate::error::{ReltagError, Result};
use crate::git::{command_line, CommandRunner};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct MockState {
    responses: HashMap<String, Result<String>>,
    calls: Vec<String>,
}

/// Mock runner for testing without spawning processes
///
/// Responses are keyed by the first argument (the git subcommand). Anything
/// without a canned response succeeds with empty output. Clones share state,
/// so a test can keep one handle and give another to the code under test.
#[derive(Clone, Default)]
pub struct MockRunner {
    state: Arc<Mutex<MockState>>,
}

impl MockRunner {
    /// Create a new mock that answers every command with empty output
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `subcommand` with `output`
    pub fn respond(&self, subcommand: &str, output: impl Into<String>) {
        self.state()
            .responses
            .insert(subcommand.to_string(), Ok(output.into()));
    }

    /// Make `subcommand` fail with `reason`
    pub fn fail(&self, subcommand: &str, reason: impl Into<String>) {
        let reason = reason.into();
        self.state().responses.insert(
            subcommand.to_string(),
            Err(ReltagError::command(subcommand, reason)),
        );
    }

    /// Every command line run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Whether any command with this subcommand has been run
    pub fn ran(&self, subcommand: &str) -> bool {
        self.state()
            .calls
            .iter()
            .any(|call| call.split(' ').nth(1) == Some(subcommand))
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let line = command_line(program, args);
        let mut state = self.state();
        state.calls.push(line.clone());

        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        match state.responses.get(subcommand) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(ReltagError::ExternalCommandFailed { reason, .. })) => {
                Err(ReltagError::command(line, reason.clone()))
            }
            Some(Err(other)) => Err(ReltagError::command(line, other.to_string())),
            None => Ok(String::new()),
        }
    }
}
