//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod help;
pub mod list;
pub mod redirect;
pub mod shorten;

pub use help::help_handler;
pub use list::list_handler;
pub use redirect::{fallback_handler, redirect_handler};
pub use shorten::shorten_handler;
