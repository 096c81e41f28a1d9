//! The bounded set of runtime containers setup knows how to wire up.

use crate::project::Dependency;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContainerId {
    /// Remote JBoss AS 6 instance.
    JbossasRemote,
    /// Managed (started/stopped by the test run) JBoss AS 6.
    JbossasManaged,
    /// Embedded GlassFish 3.
    GlassfishEmbedded,
    /// Weld SE/EE embedded, for CDI-only tests.
    WeldEeEmbedded,
}

impl ContainerId {
    /// The dependencies this container needs, aligned with the resolved
    /// Arquillian version where the artifact is part of Arquillian itself.
    pub fn dependencies(self, arquillian_version: &str) -> Vec<Dependency> {
        match self {
            ContainerId::JbossasRemote => vec![
                Dependency::new("org.jboss.arquillian.container", "arquillian-jbossas-remote-6")
                    .version(arquillian_version)
                    .test_scope(),
                Dependency::new("org.jboss.jbossas", "jboss-as-client")
                    .version("6.0.0.Final")
                    .test_scope(),
            ],
            ContainerId::JbossasManaged => vec![
                Dependency::new("org.jboss.arquillian.container", "arquillian-jbossas-managed-6")
                    .version(arquillian_version)
                    .test_scope(),
            ],
            ContainerId::GlassfishEmbedded => vec![
                Dependency::new(
                    "org.jboss.arquillian.container",
                    "arquillian-glassfish-embedded-3",
                )
                .version(arquillian_version)
                .test_scope(),
                Dependency::new("org.glassfish.extras", "glassfish-embedded-all")
                    .version("3.0.1")
                    .test_scope(),
            ],
            ContainerId::WeldEeEmbedded => vec![
                Dependency::new(
                    "org.jboss.arquillian.container",
                    "arquillian-weld-ee-embedded-1.1",
                )
                .version(arquillian_version)
                .test_scope(),
                Dependency::new("org.jboss.weld", "weld-core")
                    .version("1.1.0.Final")
                    .test_scope(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_container_declares_at_least_one_dependency() {
        for container in [
            ContainerId::JbossasRemote,
            ContainerId::JbossasManaged,
            ContainerId::GlassfishEmbedded,
            ContainerId::WeldEeEmbedded,
        ] {
            let deps = container.dependencies("1.0.0.Final");
            assert!(!deps.is_empty());
            assert!(deps.iter().all(|d| d.scope.as_deref() == Some("test")));
        }
    }

    #[test]
    fn arquillian_artifacts_track_the_resolved_version() {
        let deps = ContainerId::JbossasRemote.dependencies("1.0.0.CR1");
        let arq = deps
            .iter()
            .find(|d| d.group_id == "org.jboss.arquillian.container")
            .unwrap();
        assert_eq!(arq.version.as_deref(), Some("1.0.0.CR1"));
    }
}
