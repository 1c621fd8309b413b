//! Main workflow orchestration logic
//!
//! Sits between CLI argument parsing and the operation pipeline so the
//! workflow can be driven programmatically without depending on clap.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::{TagRequest, Version};
use crate::git::CommandRunner;
use crate::pipeline::{check_operations, Pipeline};

/// Arguments for one run of the operation workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowArgs {
    /// Operation tokens in the order given
    pub operations: Vec<String>,

    /// Print traces of what is being done
    pub verbose: bool,

    /// Preview mode - don't create tags
    pub dry_run: bool,
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version after the last operation
    pub version: Version,

    /// Tags created, or prepared when `dry_run` is set
    pub tags: Vec<TagRequest>,

    pub dry_run: bool,
}

/// Apply command-line switches on top of the loaded configuration
pub fn effective_config(args: &WorkflowArgs, mut config: Config) -> Config {
    config.dry_run |= args.dry_run;
    config.verbose |= args.verbose || config.dry_run;
    config
}

/// Main workflow
///
/// 1. Validate every operation token (nothing runs if any is unknown)
/// 2. Apply the operations in order against a fresh pipeline
pub fn run_workflow<R: CommandRunner>(
    runner: R,
    args: &WorkflowArgs,
    config: Config,
) -> Result<WorkflowResult> {
    let config = effective_config(args, config);

    let operations =
        check_operations(args.operations.as_slice()).context("Validating given operations failed")?;

    let mut pipeline = Pipeline::from_config(runner, &config);
    pipeline
        .apply(&operations)
        .context("Applying operations failed")?;

    Ok(WorkflowResult {
        version: pipeline.version().clone(),
        tags: pipeline.context().created.clone(),
        dry_run: config.dry_run,
    })
}
