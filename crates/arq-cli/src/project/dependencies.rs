//! Dependency coordinates and the pom.xml-backed dependency facet.

use crate::error::CliError;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fmt;
use std::path::{Path, PathBuf};

/// A Maven dependency coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Dependency {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn test_scope(mut self) -> Self {
        self.scope = Some("test".to_string());
        self
    }

    /// Coordinate identity ignores version and scope.
    pub fn matches(&self, other: &Dependency) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}

/// The dependency surface the commands consume. Trait so tests can fake the
/// build descriptor without touching disk.
pub trait DependencyFacet {
    fn has_dependency(&self, dependency: &Dependency) -> bool;
    fn get_dependency(&self, dependency: &Dependency) -> Option<Dependency>;
    fn resolve_available_versions(&self, dependency: &Dependency) -> Vec<Dependency>;
    fn add_dependency(&mut self, dependency: &Dependency) -> Result<(), CliError>;
}

/// Curated offline version lists; no repository protocol in scope.
fn known_versions(dependency: &Dependency) -> &'static [&'static str] {
    match (dependency.group_id.as_str(), dependency.artifact_id.as_str()) {
        ("org.jboss.arquillian", "arquillian-api") => {
            &["1.0.0.Alpha4", "1.0.0.Alpha5", "1.0.0.CR1", "1.0.0.Final"]
        },
        ("junit", "junit") => &["4.8.1", "4.8.2"],
        ("org.testng", "testng") => &["5.12.1", "5.14.9"],
        _ => &[],
    }
}

/// pom.xml-backed facet. Reads the declared top-level `<dependencies>`
/// section on open; additions are inserted textually and written back.
pub struct MavenPom {
    path: PathBuf,
    content: String,
    declared: Vec<Dependency>,
    /// Byte offset of the top-level `</dependencies>` closing tag, when the
    /// section exists. Insertion point for new blocks.
    dependencies_end: Option<usize>,
}

impl MavenPom {
    pub fn open(project_root: &Path) -> Result<Self, CliError> {
        let path = project_root.join("pom.xml");
        if !path.exists() {
            return Err(CliError::MissingPom(path));
        }
        let content = fs_err::read_to_string(&path)?;
        let parsed = parse_pom(&content)?;
        Ok(MavenPom {
            path,
            content,
            declared: parsed.declared,
            dependencies_end: parsed.dependencies_end,
        })
    }

    pub fn declared(&self) -> &[Dependency] {
        &self.declared
    }

    fn render_block(dependency: &Dependency) -> String {
        let mut block = String::new();
        block.push_str("        <dependency>\n");
        block.push_str(&format!(
            "            <groupId>{}</groupId>\n",
            dependency.group_id
        ));
        block.push_str(&format!(
            "            <artifactId>{}</artifactId>\n",
            dependency.artifact_id
        ));
        if let Some(version) = &dependency.version {
            block.push_str(&format!("            <version>{}</version>\n", version));
        }
        if let Some(scope) = &dependency.scope {
            block.push_str(&format!("            <scope>{}</scope>\n", scope));
        }
        block.push_str("        </dependency>\n");
        block
    }
}

impl DependencyFacet for MavenPom {
    fn has_dependency(&self, dependency: &Dependency) -> bool {
        self.declared.iter().any(|d| d.matches(dependency))
    }

    fn get_dependency(&self, dependency: &Dependency) -> Option<Dependency> {
        self.declared.iter().find(|d| d.matches(dependency)).cloned()
    }

    fn resolve_available_versions(&self, dependency: &Dependency) -> Vec<Dependency> {
        known_versions(dependency)
            .iter()
            .map(|version| dependency.clone().version(*version))
            .collect()
    }

    fn add_dependency(&mut self, dependency: &Dependency) -> Result<(), CliError> {
        if self.has_dependency(dependency) {
            return Ok(());
        }

        let block = Self::render_block(dependency);
        match self.dependencies_end {
            Some(index) => self.content.insert_str(index, &block),
            None => {
                let index = self.content.rfind("</project>").ok_or_else(|| {
                    CliError::PomParse("pom.xml has no closing </project> element".to_string())
                })?;
                let section = format!("    <dependencies>\n{}    </dependencies>\n", block);
                self.content.insert_str(index, &section);
            },
        }

        fs_err::write(&self.path, &self.content)?;
        // Reparse so later additions see the shifted insertion point.
        let parsed = parse_pom(&self.content)?;
        self.declared = parsed.declared;
        self.dependencies_end = parsed.dependencies_end;
        Ok(())
    }
}

struct ParsedPom {
    declared: Vec<Dependency>,
    dependencies_end: Option<usize>,
}

/// Extracts `project > dependencies > dependency` entries, skipping
/// `dependencyManagement` and plugin sections, and records where the
/// top-level `</dependencies>` tag starts.
fn parse_pom(xml: &str) -> Result<ParsedPom, CliError> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut declared = Vec::new();
    let mut dependencies_end = None;

    let mut group_id = String::new();
    let mut artifact_id = String::new();
    let mut version = String::new();
    let mut scope = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if path == ["project", "dependencies"] && name == "dependency" {
                    group_id.clear();
                    artifact_id.clear();
                    version.clear();
                    scope.clear();
                }
                path.push(name);
            },
            Event::Text(e) => {
                if path.len() == 4 && path[..3] == ["project", "dependencies", "dependency"] {
                    let text = e.unescape()?.trim().to_string();
                    match path[3].as_str() {
                        "groupId" => group_id = text,
                        "artifactId" => artifact_id = text,
                        "version" => version = text,
                        "scope" => scope = text,
                        _ => {},
                    }
                }
            },
            Event::End(e) => {
                if path == ["project", "dependencies", "dependency"] && !artifact_id.is_empty() {
                    let mut dependency = Dependency::new(group_id.clone(), artifact_id.clone());
                    if !version.is_empty() {
                        dependency = dependency.version(version.clone());
                    }
                    if !scope.is_empty() {
                        dependency.scope = Some(scope.clone());
                    }
                    declared.push(dependency);
                }
                if path == ["project", "dependencies"] {
                    // buffer_position sits just past `>`; back up over the tag.
                    let tag_len = e.name().as_ref().len() + "</>".len();
                    dependencies_end = Some(reader.buffer_position() - tag_len);
                }
                path.pop();
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(ParsedPom {
        declared,
        dependencies_end,
    })
}
