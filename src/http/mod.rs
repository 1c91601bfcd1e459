//! Timed HTTP requests against the target, with transport errors classified.
mod classify;
mod client;
mod fanout;

#[cfg(test)]
mod tests;

pub use client::{ProbeClient, ProbeResponse, RequestOptions, TimeoutPolicy};
pub use fanout::{BurstOutcome, fan_out};
pub use reqwest::Method;

