//! Core library for the `launchcheck` CLI.
//!
//! A verification session runs a fixed sequence of probes against a deployed
//! API and its client web app, records every outcome, and reduces them to a
//! launch verdict. The binary wires CLI arguments, configuration and the
//! reporters around [`session::Session`].
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod probes;
pub mod report;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
