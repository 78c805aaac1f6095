//! DNS resolution.
//!
//! This module answers one question per domain check: does the host have an
//! A record? The answer is a [`DnsOutcome`], never an error.
//!
//! Lookups go through the [`DnsLookup`] trait so pipelines can run against the
//! real `hickory-resolver` backend ([`HickoryLookup`]) or a fixed answer
//! ([`StaticLookup`]).

mod resolution;

// Re-export public API
pub use resolution::{DnsLookup, DnsOutcome, HickoryLookup, StaticLookup};

#[cfg(test)]
mod tests;
