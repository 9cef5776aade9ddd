//! Feed list renderer
//!
//! Renders a whole `FeedSnapshot` to an embeddable HTML fragment.

use std::fmt::Display;

use chrono::TimeZone;
use html_escape::encode_double_quoted_attribute;

use crate::app::FeedSnapshot;
use crate::domain::entities::MentionCount;
use crate::view::mention::{render_mention, MentionView};

pub const FEED_STYLES: &str = r#".webmentions {
    display: block;
}
.webmentions ol {
    list-style-type: none;
}
.webmentions li {
    margin-bottom: 1em;
}
.webmentions .mention img {
    border-radius: 50%;
    object-fit: cover;
    margin-right: 0.5em;
    background-color: #ededed;
}
.webmentions .mention header,
.webmentions .mention header > a {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
}
.webmentions .mention header > a {
    margin-right: 1em;
}
"#;

/// Render a feed snapshot
pub fn render_feed<Tz>(snapshot: &FeedSnapshot, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut buf = String::new();

    buf.push_str("<style>\n");
    buf.push_str(FEED_STYLES);
    buf.push_str("</style>\n");
    buf.push_str("<div class=\"webmentions\">\n");

    // Initial load: nothing to show yet
    if snapshot.is_loading && snapshot.records.is_empty() {
        buf.push_str("<p>Loading...</p>\n");
        buf.push_str("</div>\n");
        return buf;
    }

    if let Some(counter) = &snapshot.counter {
        buf.push_str(&render_counter(counter));
    }

    buf.push_str("<ol>\n");
    for record in &snapshot.records {
        buf.push_str(&format!(
            "<li data-id=\"{}\">\n",
            encode_double_quoted_attribute(&record.id.0)
        ));
        buf.push_str(&render_mention(&MentionView::from(record), tz));
        buf.push_str("</li>\n");
    }
    buf.push_str("</ol>\n");

    if snapshot.is_appending() {
        buf.push_str("<p class=\"loading-more\">Loading...</p>\n");
    } else if !snapshot.is_loading && !snapshot.is_last_page {
        buf.push_str(
            "<button type=\"button\" data-action=\"load-next-page\">Load more</button>\n",
        );
    }

    buf.push_str("</div>\n");
    buf
}

/// Counter section, e.g. `3 likes, 1 repost, 2 mentions`
pub fn render_counter(counter: &MentionCount) -> String {
    let kinds = &counter.kinds;
    format!(
        "<p class=\"mention-counter\">{}, {}, {}</p>\n",
        plural(kinds.like, "like"),
        plural(kinds.repost, "repost"),
        plural(kinds.mention, "mention")
    )
}

fn plural(n: u64, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
