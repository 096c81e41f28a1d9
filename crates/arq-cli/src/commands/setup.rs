//! Setup command: declare Arquillian, framework, and container dependencies.

use crate::config::ArqConfig;
use crate::containers::ContainerId;
use crate::error::CliError;
use crate::project::{Dependency, DependencyFacet, Project};
use crate::prompt::{TerminalPrompter, VersionPrompter};
use crate::ui;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TestFramework {
    #[default]
    Junit,
    Testng,
}

/// Arguments for the setup command.
#[derive(Parser)]
pub struct SetupArgs {
    /// Test framework to configure (defaults to junit, or the arq.toml value)
    #[arg(long = "test-framework", value_enum)]
    pub test_framework: Option<TestFramework>,

    /// Runtime container to declare dependencies for
    #[arg(long, value_enum)]
    pub container: ContainerId,

    /// Maven project root
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// Run the setup command. Idempotent: already-declared dependencies are left
/// untouched.
pub fn run_setup(args: SetupArgs) -> Result<(), CliError> {
    let project = Project::at(&args.project);
    let config = ArqConfig::load(project.root())?;
    let mut pom = project.pom()?;

    let framework = args
        .test_framework
        .or_else(|| {
            config
                .test_framework
                .as_deref()
                .and_then(|name| TestFramework::from_str(name, true).ok())
        })
        .unwrap_or_default();

    setup_project(
        &mut pom,
        &TerminalPrompter,
        config.arquillian_version.as_deref(),
        framework,
        args.container,
    )
}

fn setup_project(
    pom: &mut dyn DependencyFacet,
    prompter: &dyn VersionPrompter,
    pinned_version: Option<&str>,
    framework: TestFramework,
    container: ContainerId,
) -> Result<(), CliError> {
    // The resolved version is single-invocation state, threaded through the
    // install steps rather than held anywhere longer-lived.
    let arquillian_version = install_arquillian(pom, prompter, pinned_version)?;

    match framework {
        TestFramework::Junit => {
            install_with_prompted_version(
                pom,
                prompter,
                junit_dependency(),
                "Which version of JUnit do you want to install?",
            )?;
            ensure(pom, &arquillian_junit(&arquillian_version))?;
        },
        TestFramework::Testng => {
            install_with_prompted_version(
                pom,
                prompter,
                testng_dependency(),
                "Which version of TestNG do you want to install?",
            )?;
            ensure(pom, &arquillian_testng(&arquillian_version))?;
        },
    }

    for dependency in container.dependencies(&arquillian_version) {
        ensure(pom, &dependency)?;
    }
    Ok(())
}

/// Resolves the Arquillian version for this invocation: an already-declared
/// dependency wins, then a pinned config version, then a prompted choice.
fn install_arquillian(
    pom: &mut dyn DependencyFacet,
    prompter: &dyn VersionPrompter,
    pinned_version: Option<&str>,
) -> Result<String, CliError> {
    let coordinate = arquillian_api();

    if let Some(existing) = pom.get_dependency(&coordinate) {
        if let Some(version) = existing.version {
            ui::print_already_declared(&coordinate.clone().version(&version));
            return Ok(version);
        }
    }

    if let Some(pinned) = pinned_version {
        ensure(pom, &coordinate.clone().version(pinned))?;
        return Ok(pinned.to_string());
    }

    let options = pom.resolve_available_versions(&coordinate);
    let chosen = prompter.choose(
        "Which version of Arquillian do you want to install?",
        &options,
    )?;
    let version = chosen
        .version
        .clone()
        .ok_or_else(|| CliError::Prompt("selected dependency has no version".to_string()))?;
    ensure(pom, &chosen)?;
    Ok(version)
}

fn install_with_prompted_version(
    pom: &mut dyn DependencyFacet,
    prompter: &dyn VersionPrompter,
    coordinate: Dependency,
    question: &str,
) -> Result<(), CliError> {
    if pom.has_dependency(&coordinate) {
        ui::print_already_declared(&coordinate);
        return Ok(());
    }
    let options = pom.resolve_available_versions(&coordinate);
    let chosen = prompter.choose(question, &options)?;
    ensure(pom, &chosen)
}

fn ensure(pom: &mut dyn DependencyFacet, dependency: &Dependency) -> Result<(), CliError> {
    if pom.has_dependency(dependency) {
        ui::print_already_declared(dependency);
    } else {
        pom.add_dependency(dependency)?;
        ui::print_added(dependency);
    }
    Ok(())
}

fn arquillian_api() -> Dependency {
    Dependency::new("org.jboss.arquillian", "arquillian-api").test_scope()
}

pub(crate) fn junit_dependency() -> Dependency {
    Dependency::new("junit", "junit").test_scope()
}

fn arquillian_junit(version: &str) -> Dependency {
    Dependency::new("org.jboss.arquillian", "arquillian-junit")
        .version(version)
        .test_scope()
}

pub(crate) fn testng_dependency() -> Dependency {
    Dependency::new("org.testng", "testng").test_scope()
}

fn arquillian_testng(version: &str) -> Dependency {
    Dependency::new("org.jboss.arquillian", "arquillian-testng")
        .version(version)
        .test_scope()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::CannedPrompter;

    struct FakeFacet {
        declared: Vec<Dependency>,
    }

    impl FakeFacet {
        fn empty() -> Self {
            FakeFacet {
                declared: Vec::new(),
            }
        }
    }

    impl DependencyFacet for FakeFacet {
        fn has_dependency(&self, dependency: &Dependency) -> bool {
            self.declared.iter().any(|d| d.matches(dependency))
        }

        fn get_dependency(&self, dependency: &Dependency) -> Option<Dependency> {
            self.declared.iter().find(|d| d.matches(dependency)).cloned()
        }

        fn resolve_available_versions(&self, dependency: &Dependency) -> Vec<Dependency> {
            match dependency.artifact_id.as_str() {
                "arquillian-api" => vec![
                    dependency.clone().version("1.0.0.CR1"),
                    dependency.clone().version("1.0.0.Final"),
                ],
                "junit" => vec![dependency.clone().version("4.8.1")],
                "testng" => vec![dependency.clone().version("5.12.1")],
                _ => Vec::new(),
            }
        }

        fn add_dependency(&mut self, dependency: &Dependency) -> Result<(), CliError> {
            if !self.has_dependency(dependency) {
                self.declared.push(dependency.clone());
            }
            Ok(())
        }
    }

    #[test]
    fn fresh_junit_setup_declares_the_full_stack() {
        let mut pom = FakeFacet::empty();
        // First prompt picks the Arquillian version, second the JUnit version.
        let prompter = CannedPrompter::answering(&[1, 0]);

        setup_project(
            &mut pom,
            &prompter,
            None,
            TestFramework::Junit,
            ContainerId::JbossasManaged,
        )
        .unwrap();

        let arquillian = pom
            .get_dependency(&arquillian_api())
            .expect("arquillian-api declared");
        assert_eq!(arquillian.version.as_deref(), Some("1.0.0.Final"));

        assert!(pom.has_dependency(&junit_dependency()));
        assert!(pom.has_dependency(&arquillian_junit("1.0.0.Final")));
        assert!(!pom.has_dependency(&testng_dependency()));

        let container = pom
            .get_dependency(&Dependency::new(
                "org.jboss.arquillian.container",
                "arquillian-jbossas-managed-6",
            ))
            .expect("container dependency declared");
        assert_eq!(container.version.as_deref(), Some("1.0.0.Final"));
    }

    #[test]
    fn testng_setup_declares_testng_pair() {
        let mut pom = FakeFacet::empty();
        let prompter = CannedPrompter::answering(&[0, 0]);

        setup_project(
            &mut pom,
            &prompter,
            None,
            TestFramework::Testng,
            ContainerId::WeldEeEmbedded,
        )
        .unwrap();

        assert!(pom.has_dependency(&testng_dependency()));
        assert!(pom.has_dependency(&arquillian_testng("1.0.0.CR1")));
        assert!(!pom.has_dependency(&junit_dependency()));
    }

    #[test]
    fn rerunning_setup_adds_nothing_new() {
        let mut pom = FakeFacet::empty();
        // Only the first run prompts; the second finds everything declared.
        let prompter = CannedPrompter::answering(&[0, 0]);

        setup_project(
            &mut pom,
            &prompter,
            None,
            TestFramework::Junit,
            ContainerId::GlassfishEmbedded,
        )
        .unwrap();
        let first = pom.declared.clone();

        setup_project(
            &mut pom,
            &prompter,
            None,
            TestFramework::Junit,
            ContainerId::GlassfishEmbedded,
        )
        .unwrap();
        assert_eq!(pom.declared, first);
    }

    #[test]
    fn pinned_version_skips_the_prompt() {
        struct NoPrompt;
        impl VersionPrompter for NoPrompt {
            fn choose(&self, _: &str, _: &[Dependency]) -> Result<Dependency, CliError> {
                panic!("prompt must not be reached for the pinned coordinate");
            }
        }

        let mut pom = FakeFacet::empty();
        // JUnit is already declared so only arquillian-api could prompt.
        pom.declared.push(junit_dependency().version("4.8.1"));

        setup_project(
            &mut pom,
            &NoPrompt,
            Some("1.0.0.Alpha5"),
            TestFramework::Junit,
            ContainerId::JbossasManaged,
        )
        .unwrap();

        let arquillian = pom.get_dependency(&arquillian_api()).unwrap();
        assert_eq!(arquillian.version.as_deref(), Some("1.0.0.Alpha5"));
    }

    #[test]
    fn declared_version_wins_over_everything() {
        let mut pom = FakeFacet::empty();
        pom.declared
            .push(arquillian_api().version("1.0.0.Alpha4"));
        pom.declared.push(junit_dependency().version("4.8.1"));

        // No answers queued: any prompt would fail the test.
        let prompter = CannedPrompter::answering(&[]);
        setup_project(
            &mut pom,
            &prompter,
            Some("1.0.0.Final"),
            TestFramework::Junit,
            ContainerId::JbossasManaged,
        )
        .unwrap();

        // Framework and container artifacts follow the declared version.
        let arquillian_junit = pom
            .get_dependency(&Dependency::new("org.jboss.arquillian", "arquillian-junit"))
            .unwrap();
        assert_eq!(arquillian_junit.version.as_deref(), Some("1.0.0.Alpha4"));
        let arquillian = pom.get_dependency(&arquillian_api()).unwrap();
        assert_eq!(arquillian.version.as_deref(), Some("1.0.0.Alpha4"));
    }
}
