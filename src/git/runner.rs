use crate::error::{ReltagError, Result};
use crate::git::{command_line, CommandRunner};
use std::process::Command;

/// Runs commands as child processes of git-reltag
///
/// The child inherits the working directory, so git operates on the
/// repository the user invoked git-reltag from.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ReltagError::command(command_line(program, args), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match output.status.code() {
                Some(code) => format!("exit code {}: {}", code, stderr.trim()),
                None => format!("terminated by signal: {}", stderr.trim()),
            };
            return Err(ReltagError::command(command_line(program, args), reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
