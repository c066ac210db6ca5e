//! colcon-sarif - SARIF result files of a build
//!
//! This library provides the pieces behind the `colcon-sarif` CLI: discovery
//! of SARIF files below a build directory, the guarded deletion workflow, and
//! the hand-off to the external image generator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod deletion;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod spawn;
