//! CLI command implementations.

mod export;
mod setup;

pub use create_test::{CreateTestArgs, run_create_test};
pub use export::{ExportArgs, run_export};
pub use setup::{SetupArgs, TestFramework, run_setup};
