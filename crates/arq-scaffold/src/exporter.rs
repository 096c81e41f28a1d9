//! Synthesizes the throwaway deployment exporter class.
//!
//! The exporter runs inside the target project's own build, where the
//! project's compiled classes are on the classpath, so it has to find the
//! `@Deployment` method by reflection. Two departures from the behavior this
//! was modeled on: a missing deployment method throws instead of
//! null-dereferencing, and the catch-all handler exits non-zero so the parent
//! process can see the failure.

use arq_javagen::{Expr, JavaClass, Method, Stmt};

pub const EXPORTER_PACKAGE: &str = "forge.arquillian";
pub const EXPORTER_CLASS: &str = "DeploymentExporter";

pub fn exporter_qualified_name() -> String {
    format!("{}.{}", EXPORTER_PACKAGE, EXPORTER_CLASS)
}

/// Builds the fixed-shape exporter class. Takes no inputs; the target class
/// arrives at runtime as `args[0]`.
pub fn deployment_exporter() -> JavaClass {
    JavaClass::new(EXPORTER_PACKAGE, EXPORTER_CLASS)
        .import("org.jboss.arquillian.api.Deployment")
        .import("org.jboss.shrinkwrap.api.Archive")
        .import("org.jboss.shrinkwrap.api.exporter.ZipExporter")
        .import("java.io.File")
        .import("java.lang.reflect.Method")
        .method(
            Method::new("main")
                .static_method()
                .parameter("String[] args")
                .statement(Stmt::TryCatch {
                    body: exporter_body(),
                    exception_type: "Exception".to_string(),
                    var: "ex".to_string(),
                    handler: vec![
                        Stmt::Expr(Expr::invoke(Expr::ident("ex"), "printStackTrace", vec![])),
                        Stmt::Expr(Expr::invoke(
                            Expr::ident("System"),
                            "exit",
                            vec![Expr::Int(1)],
                        )),
                    ],
                }),
        )
}

fn exporter_body() -> Vec<Stmt> {
    let target_class_arg = Expr::index(Expr::ident("args"), 0);

    vec![
        Stmt::local(
            "Class<?>",
            "testClass",
            Expr::invoke(Expr::ident("Class"), "forName", vec![target_class_arg.clone()]),
        ),
        Stmt::local("Method", "deploymentMethod", Expr::Null),
        Stmt::ForEach {
            type_name: "Method".to_string(),
            var: "method".to_string(),
            iterable: Expr::invoke(Expr::ident("testClass"), "getMethods", vec![]),
            body: vec![
                Stmt::If {
                    cond: Expr::not_null(Expr::invoke(
                        Expr::ident("method"),
                        "getAnnotation",
                        vec![Expr::class_literal("Deployment")],
                    )),
                    then: vec![
                        Stmt::assign("deploymentMethod", Expr::ident("method")),
                        Stmt::Break,
                    ],
                },
            ],
        },
        Stmt::If {
            cond: Expr::is_null(Expr::ident("deploymentMethod")),
            then: vec![Stmt::Throw(Expr::new_instance(
                "IllegalStateException",
                vec![Expr::binary(
                    arq_javagen::BinOp::Plus,
                    Expr::str_lit("No @Deployment method found on "),
                    target_class_arg,
                )],
            ))],
        },
        Stmt::local(
            "Archive<?>",
            "archive",
            Expr::cast(
                "Archive<?>",
                Expr::invoke(Expr::ident("deploymentMethod"), "invoke", vec![Expr::Null]),
            ),
        ),
        Stmt::Expr(
            Expr::ident("archive")
                .chain("as", vec![Expr::class_literal("ZipExporter")])
                .chain(
                    "exportTo",
                    vec![
                        Expr::new_instance(
                            "File",
                            vec![Expr::invoke(Expr::ident("archive"), "getName", vec![])],
                        ),
                        Expr::Bool(true),
                    ],
                ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exporter_has_its_canonical_name() {
        let class = deployment_exporter();
        assert_eq!(class.qualified_name(), "forge.arquillian.DeploymentExporter");
        assert_eq!(exporter_qualified_name(), class.qualified_name());
        assert_eq!(
            class.relative_path(),
            "forge/arquillian/DeploymentExporter.java"
        );
    }

    #[test]
    fn exporter_is_a_fixed_shape() {
        assert_eq!(deployment_exporter(), deployment_exporter());
        let class = deployment_exporter();
        assert_eq!(class.fields.len(), 0);
        assert_eq!(class.methods.len(), 1);
        assert!(class.methods[0].is_static);
        assert_eq!(class.methods[0].parameters, vec!["String[] args"]);
    }

    #[test]
    fn missing_deployment_method_is_a_reported_error() {
        let rendered = deployment_exporter().render();
        assert!(rendered.contains("if (deploymentMethod == null) {"));
        assert!(rendered.contains("throw new IllegalStateException"));
    }

    #[test]
    fn failure_is_visible_through_the_exit_code() {
        let rendered = deployment_exporter().render();
        assert!(rendered.contains("ex.printStackTrace();"));
        assert!(rendered.contains("System.exit(1);"));
    }

    #[test]
    fn exports_archive_under_its_own_name_with_overwrite() {
        let rendered = deployment_exporter().render();
        assert!(rendered.contains(".exportTo(new File(archive.getName()), true);"));
    }
}
