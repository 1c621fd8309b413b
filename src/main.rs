use anyhow::Result;
use clap::Parser;

use git_reltag::cli::{run_workflow, WorkflowArgs};
use git_reltag::config;
use git_reltag::git::SystemRunner;
use git_reltag::pipeline::OperationKind;
use git_reltag::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-reltag",
    about = "Tag commits with semantic versions",
    override_usage = "git-reltag [OPTIONS] OPERATION [...]",
    disable_version_flag = true
)]
struct Args {
    #[arg(help = "Operations to apply in order (see --list)")]
    operations: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'V', long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(
        short = 'D',
        long,
        help = "Don't actually create tags. Implies --verbose"
    )]
    dry_run: bool,

    #[arg(short, long, help = "List operations")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-reltag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.list {
        ui::display_operations(OperationKind::ALL);
        return Ok(());
    }

    if args.operations.is_empty() {
        ui::display_error("No operations given. Use --list to see the available operations.");
        std::process::exit(1);
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = WorkflowArgs {
        operations: args.operations,
        verbose: args.verbose,
        dry_run: args.dry_run,
    };

    let result = match run_workflow(SystemRunner, &workflow_args, config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    for tag in &result.tags {
        if result.dry_run {
            ui::display_status(&format!("Would create tag: {}", tag.name));
        } else {
            ui::display_success(&format!("Created tag: {}", tag.name));
        }
    }

    Ok(())
}
