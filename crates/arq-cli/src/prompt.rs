//! Interactive choice of a dependency version.

use crate::error::CliError;
use crate::project::Dependency;
use colored::Colorize as _;
use std::io::{BufRead, Write as _};

/// Boundary for operator interaction so commands can be driven by canned
/// answers in tests.
pub trait VersionPrompter {
    fn choose(&self, question: &str, options: &[Dependency]) -> Result<Dependency, CliError>;
}

/// Numbered stdin/stdout prompt.
pub struct TerminalPrompter;

impl VersionPrompter for TerminalPrompter {
    fn choose(&self, question: &str, options: &[Dependency]) -> Result<Dependency, CliError> {
        if options.is_empty() {
            return Err(CliError::Prompt("no versions available".to_string()));
        }

        println!("{}", question.dimmed());
        for (index, option) in options.iter().enumerate() {
            println!("  {} {}", format!("{}:", index + 1).cyan(), option);
        }

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            print!("{} ", format!("[1-{}]", options.len()).dimmed());
            std::io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(CliError::Prompt("input closed".to_string()));
            }
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => {
                    return Ok(options[choice - 1].clone());
                },
                _ => eprintln!("{}", "Please enter one of the listed numbers.".yellow()),
            }
        }
    }
}

/// One queued answer per prompt, in the order the prompts arrive. Running out
/// of answers, or answering out of range, is an error so tests notice
/// unexpected prompts.
#[cfg(test)]
pub(crate) struct CannedPrompter {
    answers: std::cell::RefCell<std::collections::VecDeque<usize>>,
}

#[cfg(test)]
impl CannedPrompter {
    pub(crate) fn answering(indices: &[usize]) -> Self {
        CannedPrompter {
            answers: std::cell::RefCell::new(indices.iter().copied().collect()),
        }
    }
}

#[cfg(test)]
impl VersionPrompter for CannedPrompter {
    fn choose(&self, _question: &str, options: &[Dependency]) -> Result<Dependency, CliError> {
        let index = self
            .answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CliError::Prompt("no canned answer left".to_string()))?;
        options
            .get(index)
            .cloned()
            .ok_or_else(|| CliError::Prompt("canned answer out of range".to_string()))
    }
}
