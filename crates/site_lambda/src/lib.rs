//! AWS-oriented adapters and handlers for the serverless site.
//!
//! This crate owns runtime integration details (Lambda handlers, the mail
//! delivery adapter, and environment configuration) on top of the pure
//! request/response contracts in `site_core`.

pub mod adapters;
pub mod handlers;
pub mod runtime;
