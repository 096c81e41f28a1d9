//! The deployment export pipeline.
//!
//! The CLI process does not have the target project's compiled classes on its
//! classpath, so the `@Deployment` method cannot be invoked directly. The
//! pipeline instead: ensures the generated exporter class exists under the
//! test sources, runs it through the project's own build so the project
//! classes are on the classpath, then removes the exporter again unless the
//! caller keeps it.

use crate::error::CliError;
use crate::project::{JavaExecutionFacet, JavaSourceRoot};
use crate::ui;
use arq_scaffold::{deployment_exporter, exporter_qualified_name};
use std::path::PathBuf;

/// One export invocation. Built per call, never persisted.
#[derive(Clone, Debug)]
pub struct ExportRequest {
    /// Fully qualified name of the class holding the `@Deployment` method.
    pub deployment_class: String,
    /// Leave the exporter source in place after a successful run.
    pub keep_exporter: bool,
    /// On failure, delete an exporter this invocation generated. A reused
    /// pre-existing exporter is never touched on the failure path.
    pub cleanup_on_failure: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportState {
    Absent,
    Generated,
    Executed,
    Deleted,
    Kept,
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub exporter_path: PathBuf,
    /// True when a leftover exporter from a prior run was reused as-is.
    pub reused_existing: bool,
    /// The states the pipeline moved through, terminal state last.
    pub trace: Vec<ExportState>,
}

impl ExportOutcome {
    /// `Deleted` or `Kept`.
    pub fn final_state(&self) -> ExportState {
        self.trace.last().copied().unwrap_or(ExportState::Absent)
    }
}

/// Drives `Absent -> Generated -> Executed -> (Deleted | Kept)`. Failures in
/// generation or execution are wrapped into a single fatal error.
pub fn export_deployment(
    test_sources: &JavaSourceRoot,
    executor: &dyn JavaExecutionFacet,
    request: &ExportRequest,
) -> Result<ExportOutcome, CliError> {
    let exporter = deployment_exporter();
    let relative = exporter.relative_path();
    let exporter_path = test_sources.resource(&relative);

    let reused_existing = exporter_path.exists();
    let mut trace = if reused_existing {
        // A prior run's leftover exporter counts as already generated.
        vec![ExportState::Generated]
    } else {
        test_sources
            .save_java_source(&exporter)
            .map_err(|err| CliError::Export(Box::new(err)))?;
        vec![ExportState::Absent, ExportState::Generated]
    };

    match executor.execute_project_class(&exporter_qualified_name(), &request.deployment_class) {
        Ok(()) => trace.push(ExportState::Executed),
        Err(err) => {
            // The execution error stays primary; a failed cleanup is only
            // reported.
            if request.cleanup_on_failure && !reused_existing {
                if let Err(cleanup_err) = test_sources.delete(&relative) {
                    ui::print_cleanup_failed(&exporter_path, &cleanup_err);
                }
            }
            return Err(CliError::Export(Box::new(err)));
        },
    }

    if request.keep_exporter {
        trace.push(ExportState::Kept);
    } else {
        test_sources
            .delete(&relative)
            .map_err(|err| CliError::Export(Box::new(err)))?;
        trace.push(ExportState::Deleted);
    }

    Ok(ExportOutcome {
        exporter_path,
        reused_existing,
        trace,
    })
}
