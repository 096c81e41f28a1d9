//! Out-of-process execution of a project class through the project's build.

use crate::error::CliError;
use std::path::PathBuf;
use std::process::Command;

/// Runs a main class with the project's own compiled classpath. Blocks until
/// the child exits; no timeout, no cancellation.
pub trait JavaExecutionFacet {
    fn execute_project_class(&self, qualified_name: &str, arg: &str) -> Result<(), CliError>;
}

/// `mvn test-compile exec:java` against the project root.
pub struct MavenExecution {
    project_root: PathBuf,
}

impl MavenExecution {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        MavenExecution {
            project_root: project_root.into(),
        }
    }
}

impl JavaExecutionFacet for MavenExecution {
    fn execute_project_class(&self, qualified_name: &str, arg: &str) -> Result<(), CliError> {
        let output = Command::new("mvn")
            .arg("-q")
            .arg("test-compile")
            .arg("exec:java")
            .arg(format!("-Dexec.mainClass={}", qualified_name))
            .arg(format!("-Dexec.args={}", arg))
            .arg("-Dexec.classpathScope=test")
            .current_dir(&self.project_root)
            .output()
            .map_err(|err| CliError::Execution(format!("failed to launch mvn: {}", err)))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = filter_build_noise(&stderr);
        let message = if message.is_empty() {
            filter_build_noise(&stdout)
        } else {
            message
        };

        if message.is_empty() {
            Err(CliError::Execution(format!(
                "mvn exited with {}",
                output.status
            )))
        } else {
            Err(CliError::Execution(message))
        }
    }
}

fn filter_build_noise(output: &str) -> String {
    output
        .lines()
        .filter(|line| {
            !line.trim().is_empty()
                && !line.contains("Downloading")
                && !line.contains("Downloaded")
                && !line.contains("Progress (")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_repository_chatter() {
        let noisy = "Downloading from central: https://repo\n\
                     [ERROR] ClassNotFoundException: forge.arquillian.DeploymentExporter\n\
                     Progress (1): 4.1 kB\n";
        assert_eq!(
            filter_build_noise(noisy),
            "[ERROR] ClassNotFoundException: forge.arquillian.DeploymentExporter"
        );
    }

    #[test]
    fn launch_failure_is_an_execution_error() {
        struct BrokenLauncher;
        impl JavaExecutionFacet for BrokenLauncher {
            fn execute_project_class(&self, _: &str, _: &str) -> Result<(), CliError> {
                Err(CliError::Execution("failed to launch mvn".to_string()))
            }
        }
        let err = BrokenLauncher
            .execute_project_class("forge.arquillian.DeploymentExporter", "com.acme.Widget")
            .unwrap_err();
        assert!(matches!(err, CliError::Execution(_)));
    }
}
