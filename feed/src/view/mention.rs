//! Single mention markup
//!
//! Passive template: receives already-validated fields and produces HTML.
//! Only the content fragment is emitted as-is; it was sanitized upstream.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::entities::MentionRecord;

const DISPLAY_FORMAT: &str = "%d.%m.%Y - %H:%M";
const ANONYMOUS: &str = "Anonymous";

/// Fields a single mention is rendered from
#[derive(Debug, Clone, Copy)]
pub struct MentionView<'a> {
    pub url: &'a str,
    pub author_name: &'a str,
    pub author_avatar: &'a str,
    pub published_at: &'a str,
    /// Sanitized HTML
    pub content_html: &'a str,
}

impl<'a> From<&'a MentionRecord> for MentionView<'a> {
    fn from(record: &'a MentionRecord) -> Self {
        Self {
            url: &record.url,
            author_name: &record.author_name,
            author_avatar: &record.author_avatar,
            published_at: &record.published_at,
            content_html: &record.content_html,
        }
    }
}

/// Format an ISO-8601 timestamp as `dd.MM.yyyy - HH:mm` in `tz`.
///
/// Timestamps without an offset are read as wall-clock time in `tz`; a bare
/// date is midnight of that day.
pub fn format_published<Tz>(iso: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let iso = iso.trim();
    let local = match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(tz),
        Err(_) => {
            let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
                        .ok()?
                        .and_hms_opt(0, 0, 0)
                })?;
            tz.from_local_datetime(&naive).earliest()?
        }
    };
    Some(local.format(DISPLAY_FORMAT).to_string())
}

/// Only http(s) URLs make it into `href`/`src`
fn safe_url(url: &str) -> &str {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        url
    } else {
        ""
    }
}

/// Render one mention
pub fn render_mention<Tz>(view: &MentionView<'_>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let author = if view.author_name.trim().is_empty() {
        ANONYMOUS
    } else {
        view.author_name
    };
    let published = format_published(view.published_at, tz)
        .unwrap_or_else(|| view.published_at.to_string());

    let mut buf = String::new();
    buf.push_str("<div class=\"mention\">\n");
    buf.push_str("<header>\n");
    buf.push_str(&format!(
        "<a href=\"{}\">\n",
        encode_double_quoted_attribute(safe_url(view.url))
    ));
    buf.push_str(&format!(
        "<img src=\"{}\" width=\"40\" height=\"40\" alt=\"\" />\n",
        encode_double_quoted_attribute(safe_url(view.author_avatar))
    ));
    buf.push_str(&format!("<span>{}</span>\n", encode_text(author)));
    buf.push_str("</a>\n");
    buf.push_str(&format!(
        "<time datetime=\"{}\">{}</time>\n",
        encode_double_quoted_attribute(view.published_at),
        encode_text(&published)
    ));
    buf.push_str("</header>\n");
    buf.push_str(view.content_html);
    buf.push_str("\n</div>\n");
    buf
}
