//! Configuration, error and logging plumbing for the `langtag` binary.
//!
//! The binary itself lives in `main.rs`; this library holds the pieces that
//! are independent of argument parsing so they can be tested in isolation.

pub mod config;
pub mod error;
pub mod logging;
