//! webmention.io adapter
//!
//! HTTP client for the mentions and count endpoints.

pub mod client;

pub use client::WebmentionIoClient;
