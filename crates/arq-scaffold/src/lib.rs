#![doc = include_str!("../README.md")]

mod exporter;
mod test_class;

pub use exporter::{EXPORTER_CLASS, EXPORTER_PACKAGE, deployment_exporter, exporter_qualified_name};
pub use test_class::{TestClassPlan, test_class};
