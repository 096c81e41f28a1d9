use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error("Failed to parse arq.toml configuration: {0}")]
    ConfigParse(String),

    #[error("No pom.xml found at {}", .0.display())]
    MissingPom(PathBuf),

    #[error("Failed to parse pom.xml: {0}")]
    PomParse(String),

    #[error("'{0}' is not a valid qualified class name")]
    InvalidClassName(String),

    #[error("Class under test not found: no source file at {}", .0.display())]
    ClassUnderTestMissing(PathBuf),

    #[error("No class under test given: pass --class or run create-test first")]
    NoActiveClass,

    #[error("Version selection aborted: {0}")]
    Prompt(String),

    #[error("Project execution failed: {0}")]
    Execution(String),

    #[error("Error while calling generated DeploymentExporter")]
    Export(#[source] Box<CliError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for CliError {
    fn from(err: quick_xml::Error) -> Self {
        CliError::PomParse(err.to_string())
    }
}
