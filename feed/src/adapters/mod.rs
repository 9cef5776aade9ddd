//! Adapters layer
//!
//! Concrete implementations of the domain ports.

pub mod sanitize;
pub mod webmention_io;

pub use sanitize::{AmmoniaSanitizer, PassthroughSanitizer};
pub use webmention_io::WebmentionIoClient;
