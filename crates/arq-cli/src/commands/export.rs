//! Export command: write a @Deployment archive to disk via the generated
//! exporter class.

use crate::config::ArqConfig;
use crate::error::CliError;
use crate::export::{ExportRequest, ExportState, export_deployment};
use crate::project::{MavenExecution, Project};
use crate::ui;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the export command.
#[derive(Parser)]
pub struct ExportArgs {
    /// Fully qualified name of the class holding the @Deployment method
    /// (defaults to the class create-test produced last)
    #[arg(long = "class")]
    pub class: Option<String>,

    /// Keep the generated exporter class after the export
    #[arg(long = "keep-exporter")]
    pub keep_exporter: bool,

    /// Delete a freshly generated exporter if the export fails
    #[arg(long = "cleanup-on-failure")]
    pub cleanup_on_failure: bool,

    /// Maven project root
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// Run the export command.
pub fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let project = Project::at(&args.project);
    let config = ArqConfig::load(project.root())?;

    let deployment_class = args
        .class
        .or_else(|| project.active_class())
        .ok_or(CliError::NoActiveClass)?;

    let request = ExportRequest {
        deployment_class: deployment_class.clone(),
        keep_exporter: args.keep_exporter || config.export.keep_exporter,
        cleanup_on_failure: args.cleanup_on_failure || config.export.cleanup_on_failure,
    };

    ui::print_exporting(&deployment_class);
    let executor = MavenExecution::new(project.root());
    let outcome = export_deployment(&project.test_java(), &executor, &request)?;
    ui::print_export_done(
        outcome.final_state() == ExportState::Kept,
        &outcome.exporter_path,
    );
    Ok(())
}
