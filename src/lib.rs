//! Matcha Grader
//!
//! Grades photographed matcha samples with the `matcha-grade` pipeline and
//! serves the result over a CLI and an HTTP upload service.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
