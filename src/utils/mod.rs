//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Counter-to-code base62 encoding and reserved codes
//! - [`url_normalizer`] - Target URL validation

pub mod code_generator;
pub mod url_normalizer;
