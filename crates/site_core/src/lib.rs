//! Shared site domain primitives.
//!
//! This crate owns the request/response contract, contact-form parsing,
//! email composition, and template rendering. It intentionally excludes
//! AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod email;
pub mod form;
pub mod mime;
pub mod template;
