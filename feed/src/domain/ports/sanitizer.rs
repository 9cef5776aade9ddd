//! HTML sanitizer port
//!
//! The feed never renders upstream markup verbatim: every `content.html`
//! fragment goes through a `Sanitizer` supplied by the host.

/// Capability turning untrusted HTML into HTML safe to embed
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}
