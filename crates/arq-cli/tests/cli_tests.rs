use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.acme</groupId>
    <artifactId>widgets</artifactId>
    <version>1.0-SNAPSHOT</version>
    <dependencies>
        <dependency>
            <groupId>junit</groupId>
            <artifactId>junit</artifactId>
            <version>4.8.1</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>
"#;

const WIDGET: &str = "package com.acme;\n\npublic class Widget {\n}\n";

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("pom.xml").write_str(POM).unwrap();
    temp.child("src/main/java/com/acme/Widget.java")
        .write_str(WIDGET)
        .unwrap();
    temp
}

fn arq(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arq").unwrap();
    cmd.current_dir(temp.path());
    cmd
}

#[test]
fn create_test_writes_the_test_class() {
    let temp = project();

    arq(&temp)
        .args(["create-test", "--class", "com.acme.Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let test_file = temp.child("src/test/java/com/acme/WidgetTest.java");
    test_file.assert(predicate::path::exists());

    let content = std::fs::read_to_string(test_file.path()).unwrap();
    assert!(content.contains("@RunWith(Arquillian.class)"));
    // JUnit is declared in the pom, so no superclass and JUnit imports.
    assert!(content.contains("public class WidgetTest {"));
    assert!(content.contains("import org.junit.runner.RunWith;"));
    assert!(content.contains("Assert.assertNotNull(widget);"));
    assert!(!content.contains("persistence.xml"));

    temp.child(".arq/active-class")
        .assert(predicate::str::contains("com.acme.WidgetTest"));
}

#[test]
fn create_test_with_enable_jpa_adds_the_persistence_stanza() {
    let temp = project();

    arq(&temp)
        .args(["create-test", "--class", "com.acme.Widget", "--enable-jpa"])
        .assert()
        .success();

    let content = std::fs::read_to_string(
        temp.child("src/test/java/com/acme/WidgetTest.java").path(),
    )
    .unwrap();
    assert!(content.contains(
        ".addAsManifestResource(\"persistence.xml\", ArchivePaths.create(\"persistence.xml\"))"
    ));
}

#[test]
fn create_test_fails_before_writing_when_class_is_missing() {
    let temp = project();

    arq(&temp)
        .args(["create-test", "--class", "com.acme.Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Class under test not found"));

    temp.child("src/test/java/com/acme/MissingTest.java")
        .assert(predicate::path::missing());
}

#[test]
fn create_test_rejects_an_unqualified_class_name() {
    let temp = project();

    arq(&temp)
        .args(["create-test", "--class", "Widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid qualified class name"));
}

#[test]
fn setup_with_pinned_version_runs_non_interactively() {
    let temp = project();
    temp.child("arq.toml")
        .write_str("arquillian_version = \"1.0.0.Final\"\n")
        .unwrap();

    arq(&temp)
        .args(["setup", "--container", "jbossas-managed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    let pom = std::fs::read_to_string(temp.child("pom.xml").path()).unwrap();
    assert!(pom.contains("<artifactId>arquillian-api</artifactId>"));
    assert!(pom.contains("<artifactId>arquillian-junit</artifactId>"));
    assert!(pom.contains("<artifactId>arquillian-jbossas-managed-6</artifactId>"));
    assert!(pom.contains("<version>1.0.0.Final</version>"));
}

#[test]
fn setup_is_idempotent() {
    let temp = project();
    temp.child("arq.toml")
        .write_str("arquillian_version = \"1.0.0.Final\"\n")
        .unwrap();

    arq(&temp)
        .args(["setup", "--container", "jbossas-managed"])
        .assert()
        .success();
    let first = std::fs::read_to_string(temp.child("pom.xml").path()).unwrap();

    arq(&temp)
        .args(["setup", "--container", "jbossas-managed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already declared"));
    let second = std::fs::read_to_string(temp.child("pom.xml").path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn export_without_an_active_class_fails() {
    let temp = project();

    arq(&temp)
        .args(["export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No class under test given"));
}

#[test]
fn setup_requires_a_container() {
    let temp = project();

    arq(&temp).args(["setup"]).assert().failure();
}
