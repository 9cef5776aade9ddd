//! Sanitizer implementations

use crate::domain::ports::Sanitizer;

/// Whitelist sanitizer backed by `ammonia`.
///
/// Drops `script`/`style` together with their content, every event handler
/// attribute and `javascript:` URLs. Links get `rel="nofollow ugc noopener noreferrer"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmoniaSanitizer;

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        ammonia::Builder::default()
            .link_rel(Some("nofollow ugc noopener noreferrer"))
            .clean(html)
            .to_string()
    }
}

/// Renders upstream HTML verbatim. Only for sources the host fully trusts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughSanitizer;

impl Sanitizer for PassthroughSanitizer {
    fn sanitize(&self, html: &str) -> String {
        html.to_string()
    }
}
