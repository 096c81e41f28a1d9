//! Synthesizes a test class bound to a class under test.

use arq_javagen::{Annotation, Expr, Field, JavaClass, Method, Stmt};

/// The facts that shape a synthesized test class.
///
/// `junit` and `testng` reflect which framework dependencies the project
/// actually declares; `cdi` reflects whether bean injection is enabled on the
/// project. They are independent inputs: the superclass decision follows
/// `junit` alone, while the import set consults both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestClassPlan {
    /// Package of the class under test; the test class lands beside it.
    pub package: String,
    /// Simple name of the class under test.
    pub class_name: String,
    pub enable_jpa: bool,
    pub junit: bool,
    pub testng: bool,
    pub cdi: bool,
}

/// Builds `<ClassUnderTest>Test` in the same package as the class under test.
pub fn test_class(plan: &TestClassPlan) -> JavaClass {
    let instance_name = plan.class_name.to_lowercase();

    let mut class = JavaClass::new(&plan.package, format!("{}Test", plan.class_name))
        .annotate(Annotation::with_literal("RunWith", "Arquillian.class"));

    // TestNG has no runner-annotation integration; it hooks in by inheritance.
    if !plan.junit {
        class = class.extends("Arquillian");
    }

    class = class
        .field(
            Field::new(&plan.class_name, &instance_name)
                .private()
                .annotate(Annotation::new("Inject")),
        )
        .method(deployment_method(plan))
        .method(test_method(&instance_name));

    add_imports(class, plan)
}

fn deployment_method(plan: &TestClassPlan) -> Method {
    let mut archive = Expr::invoke(
        Expr::ident("ShrinkWrap"),
        "create",
        vec![
            Expr::class_literal("JavaArchive"),
            Expr::str_lit("test.jar"),
        ],
    )
    .chain("addClass", vec![Expr::class_literal(&plan.class_name)]);

    if plan.cdi {
        archive = archive.chain(
            "addAsManifestResource",
            vec![
                Expr::ident("EmptyAsset.INSTANCE"),
                Expr::invoke(
                    Expr::ident("ArchivePaths"),
                    "create",
                    vec![Expr::str_lit("beans.xml")],
                ),
            ],
        );
    }

    if plan.enable_jpa {
        archive = archive.chain(
            "addAsManifestResource",
            vec![
                Expr::str_lit("persistence.xml"),
                Expr::invoke(
                    Expr::ident("ArchivePaths"),
                    "create",
                    vec![Expr::str_lit("persistence.xml")],
                ),
            ],
        );
    }

    Method::new("createDeployment")
        .static_method()
        .returns("JavaArchive")
        .annotate(Annotation::new("Deployment"))
        .statement(Stmt::Return(archive))
}

fn test_method(instance_name: &str) -> Method {
    Method::new("testIsDeployed")
        .annotate(Annotation::new("Test"))
        .statement(Stmt::Expr(Expr::invoke(
            Expr::ident("Assert"),
            "assertNotNull",
            vec![Expr::ident(instance_name)],
        )))
}

fn add_imports(mut class: JavaClass, plan: &TestClassPlan) -> JavaClass {
    class = class
        .import("javax.enterprise.inject.spi.BeanManager")
        .import("javax.inject.Inject")
        .import("org.jboss.arquillian.api.Deployment")
        .import("org.jboss.arquillian.junit.Arquillian")
        .import("org.jboss.shrinkwrap.api.ShrinkWrap")
        .import("org.jboss.shrinkwrap.api.ArchivePaths")
        .import("org.jboss.shrinkwrap.api.spec.JavaArchive")
        .import("org.jboss.shrinkwrap.api.asset.EmptyAsset");

    if plan.junit {
        class
            .import("org.junit.Assert")
            .import("org.junit.Test")
            .import("org.junit.runner.RunWith")
    } else if plan.testng {
        class.import("org.testng.annotations.Test")
    } else {
        class
    }
}
