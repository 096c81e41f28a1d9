//! Persistence of synthesized source units under a Java source root.

use crate::error::CliError;
use arq_javagen::JavaClass;
use std::path::{Path, PathBuf};

/// A Java source root (`src/main/java` or `src/test/java`).
pub struct JavaSourceRoot {
    root: PathBuf,
}

impl JavaSourceRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JavaSourceRoot { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The on-disk path for a class or package-relative source path.
    pub fn resource(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether a source file for the qualified class name exists.
    pub fn contains_class(&self, package: &str, simple_name: &str) -> bool {
        self.class_path(package, simple_name).exists()
    }

    pub fn class_path(&self, package: &str, simple_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", simple_name));
        path
    }

    /// Renders and writes the class, creating package directories as needed.
    /// Returns the written path.
    pub fn save_java_source(&self, class: &JavaClass) -> Result<PathBuf, CliError> {
        let path = self.resource(&class.relative_path());
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }
        fs_err::write(&path, class.render())?;
        Ok(path)
    }

    pub fn delete(&self, relative: &str) -> Result<(), CliError> {
        fs_err::remove_file(self.resource(relative))?;
        Ok(())
    }
}
