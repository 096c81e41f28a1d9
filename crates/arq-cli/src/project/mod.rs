//! The target Maven project and the facets the commands consume.

mod dependencies;
mod execution;
mod source;

pub use dependencies::{Dependency, DependencyFacet, MavenPom};
pub use execution::{JavaExecutionFacet, MavenExecution};
pub use source::JavaSourceRoot;

use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Directory for per-project state the shell would otherwise carry.
const STATE_DIR: &str = ".arq";
const ACTIVE_CLASS_FILE: &str = "active-class";

pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Project { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pom(&self) -> Result<MavenPom, CliError> {
        MavenPom::open(&self.root)
    }

    pub fn main_java(&self) -> JavaSourceRoot {
        JavaSourceRoot::new(self.root.join("src/main/java"))
    }

    pub fn test_java(&self) -> JavaSourceRoot {
        JavaSourceRoot::new(self.root.join("src/test/java"))
    }

    /// Whether the project has bean-injection support enabled: a beans.xml
    /// descriptor, or the CDI API declared as a dependency.
    pub fn has_cdi(&self, pom: &MavenPom) -> bool {
        self.root
            .join("src/main/resources/META-INF/beans.xml")
            .exists()
            || self.root.join("src/main/webapp/WEB-INF/beans.xml").exists()
            || pom.has_dependency(&Dependency::new("javax.enterprise", "cdi-api"))
    }

    /// The class create-test last produced a test for, if any.
    pub fn active_class(&self) -> Option<String> {
        let path = self.root.join(STATE_DIR).join(ACTIVE_CLASS_FILE);
        fs_err::read_to_string(path)
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    pub fn set_active_class(&self, qualified_name: &str) -> Result<(), CliError> {
        let dir = self.root.join(STATE_DIR);
        fs_err::create_dir_all(&dir)?;
        fs_err::write(dir.join(ACTIVE_CLASS_FILE), format!("{}\n", qualified_name))?;
        Ok(())
    }
}

/// Splits a qualified class name into package and simple name, rejecting
/// empty segments and non-identifier characters.
pub fn split_qualified_name(qualified: &str) -> Result<(String, String), CliError> {
    let invalid = || CliError::InvalidClassName(qualified.to_string());

    let segments: Vec<&str> = qualified.split('.').collect();
    if segments.len() < 2 {
        return Err(invalid());
    }
    for segment in &segments {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {},
            _ => return Err(invalid()),
        }
        if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
            return Err(invalid());
        }
    }

    let simple = segments[segments.len() - 1].to_string();
    let package = segments[..segments.len() - 1].join(".");
    Ok((package, simple))
}
