//! Data Transfer Objects for request parsing.
//!
//! Responses are plain text and need no DTOs.

pub mod shorten;
