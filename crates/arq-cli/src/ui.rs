// CLI output helpers. Plain println with colored so ANSI passthrough stays
// predictable across terminals.

use crate::project::Dependency;
use colored::Colorize as _;
use std::path::Path;

pub fn print_already_declared(dependency: &Dependency) {
    println!(
        "{} {}",
        "Already declared".dimmed(),
        dependency.to_string().green()
    );
}

pub fn print_added(dependency: &Dependency) {
    println!("{} {}", "Added".dimmed(), dependency.to_string().green());
}

pub fn print_created(path: &Path) {
    println!("{} {}", "Created".dimmed(), path.display().to_string().green());
}

pub fn print_exporting(class_name: &str) {
    println!("{} {}", "Exporting deployment of".dimmed(), class_name.green());
}

pub fn print_cleanup_failed(path: &Path, err: &crate::error::CliError) {
    eprintln!(
        "{} {}: {}",
        "Could not remove".yellow(),
        path.display().to_string().yellow(),
        err
    );
}

pub fn print_export_done(kept: bool, exporter_path: &Path) {
    if kept {
        println!(
            "{} {}",
            "Export finished; exporter kept at".dimmed(),
            exporter_path.display().to_string().green()
        );
    } else {
        println!("{}", "Export finished".dimmed());
    }
}
