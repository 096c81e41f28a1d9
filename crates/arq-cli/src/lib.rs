#![doc = include_str!("../README.md")]

pub mod commands;
pub mod config;
pub mod containers;
pub mod error;
pub mod export;
pub mod project;
pub mod prompt;
pub mod ui;
