//! Minimal RSS 2.0 / Atom reader
//!
//! Pulls the handful of fields the quiz sources need out of `<item>` and
//! `<entry>` elements. Namespaced elements (`content:encoded`, `dc:creator`,
//! `arxiv:primary_category`) are matched on their local name.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::clean::collapse_whitespace;
use crate::error::{Error, Result};

/// A parsed feed
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// Channel or feed title
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

/// One `<item>` or `<entry>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    /// `<guid>` or `<id>`
    pub id: String,
    pub title: String,
    /// `<description>` or `<summary>`, still HTML
    pub summary: String,
    /// `<content:encoded>` or `<content>`, still HTML
    pub content: String,
    pub link: String,
    /// Raw date string, preferring the publication date over the update date
    pub published: Option<String>,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
}

impl FeedEntry {
    /// Summary, or the full content when the feed has no summary
    pub fn body(&self) -> &str {
        if self.summary.trim().is_empty() {
            &self.content
        } else {
            &self.summary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FeedTitle,
    Id,
    Title,
    Summary,
    Content,
    Link,
    Published,
    Updated,
    Author,
    AuthorName,
    Category,
}

/// Parse an RSS or Atom document
pub fn parse_feed(xml: &str) -> Result<Feed> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut feed = Feed::default();
    let mut saw_root = false;
    let mut entry: Option<FeedEntry> = None;
    // Field being read and the local name of the element that opened it
    let mut field: Option<(Field, Vec<u8>)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"rss" | b"feed" | b"RDF" => saw_root = true,
                    b"item" | b"entry" => {
                        entry = Some(FeedEntry::default());
                        field = None;
                    }
                    _ => {
                        if let Some((current, _)) = &field {
                            // Markup nested inside a field (xhtml content, author children)
                            if *current == Field::Author && name == b"name" {
                                field = Some((Field::AuthorName, name));
                                text.clear();
                            } else {
                                text.push(' ');
                            }
                            continue;
                        }
                        let opened = match (entry.as_mut(), name.as_slice()) {
                            (None, b"title") if feed.title.is_none() => Some(Field::FeedTitle),
                            (None, _) => None,
                            (Some(_), b"title") => Some(Field::Title),
                            (Some(_), b"guid" | b"id") => Some(Field::Id),
                            (Some(_), b"description" | b"summary") => Some(Field::Summary),
                            (Some(_), b"encoded" | b"content") => Some(Field::Content),
                            (Some(current), b"link") => {
                                set_link(current, &e);
                                Some(Field::Link)
                            }
                            (Some(_), b"pubDate" | b"published") => Some(Field::Published),
                            (Some(_), b"updated" | b"date") => Some(Field::Updated),
                            (Some(_), b"author" | b"creator") => Some(Field::Author),
                            (Some(current), b"category") => match attribute(&e, b"term") {
                                Some(term) => {
                                    current.categories.push(term);
                                    None
                                }
                                None => Some(Field::Category),
                            },
                            (Some(_), _) => None,
                        };
                        if let Some(opened) = opened {
                            field = Some((opened, name));
                            text.clear();
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(current) = entry.as_mut() {
                    match e.local_name().as_ref() {
                        b"link" => set_link(current, &e),
                        b"category" => {
                            if let Some(term) = attribute(&e, b"term") {
                                current.categories.push(term);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if field.is_some() {
                    // HTML entities such as &nbsp; are not XML; keep them for strip_html
                    match e.unescape() {
                        Ok(unescaped) => text.push_str(&unescaped),
                        Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if matches!(name.as_ref(), b"item" | b"entry") {
                    if let Some(done) = entry.take() {
                        feed.entries.push(done);
                    }
                    field = None;
                    continue;
                }
                let closes_field = matches!(&field, Some((_, tag)) if tag.as_slice() == name.as_ref());
                if closes_field {
                    if let Some((done, _)) = field.take() {
                        store(done, &text, &mut feed, entry.as_mut());
                    }
                    text.clear();
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::feed(format!(
                    "{} at byte {}",
                    e,
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(Error::feed("document is not an RSS or Atom feed"));
    }
    Ok(feed)
}

fn store(field: Field, raw: &str, feed: &mut Feed, entry: Option<&mut FeedEntry>) {
    let value = raw.trim();
    if field == Field::FeedTitle {
        if !value.is_empty() {
            feed.title = Some(collapse_whitespace(value));
        }
        return;
    }
    let Some(entry) = entry else { return };
    match field {
        Field::Id => entry.id = value.to_string(),
        Field::Title => entry.title = collapse_whitespace(value),
        Field::Summary => entry.summary = value.to_string(),
        Field::Content => entry.content = value.to_string(),
        Field::Link => {
            if entry.link.is_empty() && !value.is_empty() {
                entry.link = value.to_string();
            }
        }
        Field::Published => entry.published = Some(value.to_string()),
        Field::Updated => {
            if entry.published.is_none() {
                entry.published = Some(value.to_string());
            }
        }
        Field::Author | Field::AuthorName | Field::Category => {
            if !value.is_empty() {
                let target = if field == Field::Category {
                    &mut entry.categories
                } else {
                    &mut entry.authors
                };
                target.push(collapse_whitespace(value));
            }
        }
        Field::FeedTitle => {}
    }
}

/// Atom links carry the URL in `href`; only the alternate (or unlabelled) link counts
fn set_link(entry: &mut FeedEntry, e: &BytesStart<'_>) {
    let Some(href) = attribute(e, b"href") else { return };
    let alternate = attribute(e, b"rel").map_or(true, |rel| rel == "alternate");
    if alternate && entry.link.is_empty() {
        entry.link = href;
    }
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>BBC News</title>
    <image><title>Logo</title></image>
    <item>
      <title>Harbour reopens after storm</title>
      <description><![CDATA[<p>The harbour in <b>Dover</b> reopened on Monday.</p>]]></description>
      <link>https://www.bbc.co.uk/news/articles/abc</link>
      <guid isPermaLink="false">abc-123</guid>
      <pubDate>Mon, 09 Jun 2025 08:00:00 GMT</pubDate>
      <dc:creator>Jane Smith</dc:creator>
      <category>UK</category>
    </item>
    <item>
      <title>Second story</title>
      <description>Plain &amp; simple&nbsp;text.</description>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title type="html">ArXiv Query: search_query=all:graphs</title>
  <entry>
    <id>http://arxiv.org/abs/2401.01234v1</id>
    <updated>2024-01-03T10:00:00Z</updated>
    <published>2024-01-02T18:30:00Z</published>
    <title>Sparse Graph
      Transformers</title>
    <summary>  We study sparse attention over graphs.  </summary>
    <author><name>Ada Lovelace</name><arxiv:affiliation>Analytical Engines</arxiv:affiliation></author>
    <author><name>Alan Turing</name></author>
    <link href="http://arxiv.org/abs/2401.01234v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2401.01234v1" rel="related" type="application/pdf"/>
    <arxiv:primary_category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.AI" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss() {
        let feed = parse_feed(RSS).unwrap();
        assert_eq!(feed.title.as_deref(), Some("BBC News"));
        assert_eq!(feed.entries.len(), 2);

        let first = &feed.entries[0];
        assert_eq!(first.title, "Harbour reopens after storm");
        assert_eq!(first.summary, "<p>The harbour in <b>Dover</b> reopened on Monday.</p>");
        assert_eq!(first.link, "https://www.bbc.co.uk/news/articles/abc");
        assert_eq!(first.id, "abc-123");
        assert_eq!(first.published.as_deref(), Some("Mon, 09 Jun 2025 08:00:00 GMT"));
        assert_eq!(first.authors, vec!["Jane Smith"]);
        assert_eq!(first.categories, vec!["UK"]);

        let second = &feed.entries[1];
        assert!(second.summary.starts_with("Plain"));
        assert!(second.link.is_empty());
    }

    #[test]
    fn test_parse_atom() {
        let feed = parse_feed(ATOM).unwrap();
        assert_eq!(feed.entries.len(), 1);

        let entry = &feed.entries[0];
        assert_eq!(entry.id, "http://arxiv.org/abs/2401.01234v1");
        assert_eq!(entry.title, "Sparse Graph Transformers");
        assert_eq!(entry.body(), "We study sparse attention over graphs.");
        assert_eq!(entry.published.as_deref(), Some("2024-01-02T18:30:00Z"));
        assert_eq!(entry.authors, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(entry.link, "http://arxiv.org/abs/2401.01234v1");
        assert_eq!(entry.categories, vec!["cs.LG", "cs.AI"]);
    }

    #[test]
    fn test_body_falls_back_to_content() {
        let xml = r#"<rss><channel><item><title>T</title>
            <content:encoded xmlns:content="http://purl.org/rss/1.0/modules/content/"><![CDATA[<p>Full text.</p>]]></content:encoded>
            </item></channel></rss>"#;
        let feed = parse_feed(xml).unwrap();
        assert_eq!(feed.entries[0].body(), "<p>Full text.</p>");
    }

    #[test]
    fn test_rejects_non_feeds() {
        assert!(matches!(
            parse_feed("<html><body>Not a feed</body></html>"),
            Err(Error::Feed(_))
        ));
        assert!(matches!(
            parse_feed("<rss><channel><item><title>x</channel></rss>"),
            Err(Error::Feed(_))
        ));
    }
}
