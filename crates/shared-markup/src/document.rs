//! Normalized document structure shared by all rule families

use std::collections::BTreeMap;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use regex::Regex;
use scraper::{Html, Selector};

use shared_types::DocumentKind;

/// A heading with its level (1-6) and visible text, in document order
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// An image reference. `alt` is `None` when the attribute is absent,
/// `Some("")` when present but empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Image {
    pub source: String,
    pub alt: Option<String>,
}

/// A link with its visible text and target
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Read-only structural view over one piece of content.
///
/// Built once per validation run; every rule shares the same instance.
/// Parsing never fails: content with no recognizable structure simply
/// yields empty element lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub kind: DocumentKind,
    pub headings: Vec<Heading>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub full_text: String,
    pub raw_source: String,
    pub title: Option<String>,
    meta: BTreeMap<String, String>,
}

impl Document {
    /// Normalize raw content into a document structure.
    pub fn parse(raw: &str, kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Markdown => Self::parse_markdown(raw),
            DocumentKind::Hypertext => Self::parse_hypertext(raw),
            DocumentKind::Plain => Self::parse_plain(raw),
        }
    }

    /// Best-effort lookup of a named metadata field: structured markup
    /// first (a `<meta>` tag), then a loose `key: value` search over the
    /// raw source, which also covers front-matter style `meta_key: value`.
    pub fn metadata(&self, key: &str) -> Option<String> {
        if let Some(value) = self.meta.get(&key.to_ascii_lowercase()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        let pattern = format!(
            r#"(?i)(?:meta[_ ]?)?{}:\s*["']?([^"'\n]+)["']?"#,
            regex::escape(key)
        );
        let re = Regex::new(&pattern).ok()?;
        re.captures(&self.raw_source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Headings of one level, in document order
    pub fn headings_at(&self, level: u8) -> impl Iterator<Item = &Heading> {
        self.headings.iter().filter(move |h| h.level == level)
    }

    fn parse_plain(raw: &str) -> Self {
        Self {
            kind: DocumentKind::Plain,
            headings: Vec::new(),
            images: Vec::new(),
            links: Vec::new(),
            full_text: raw.to_string(),
            raw_source: raw.to_string(),
            title: None,
            meta: BTreeMap::new(),
        }
    }

    fn parse_markdown(raw: &str) -> Self {
        let parser = Parser::new(raw);

        let mut headings: Vec<Heading> = Vec::new();
        let mut images: Vec<Image> = Vec::new();
        let mut links: Vec<Link> = Vec::new();
        let mut full_text = String::new();

        // In-flight element state while walking the event stream
        let mut heading_buf: Option<(u8, String)> = None;
        let mut image_buf: Option<(String, String)> = None;
        let mut link_buf: Option<(String, String)> = None;
        let mut embedded_html = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    heading_buf = Some((heading_level_number(level), String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, text)) = heading_buf.take() {
                        headings.push(Heading {
                            level,
                            text: text.trim().to_string(),
                        });
                    }
                    full_text.push('\n');
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    image_buf = Some((dest_url.to_string(), String::new()));
                }
                Event::End(TagEnd::Image) => {
                    if let Some((source, alt)) = image_buf.take() {
                        // Markdown image syntax always carries an alt slot;
                        // an empty one surfaces as Some("").
                        images.push(Image {
                            source,
                            alt: Some(alt),
                        });
                    }
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    link_buf = Some((dest_url.to_string(), String::new()));
                }
                Event::End(TagEnd::Link) => {
                    if let Some((href, text)) = link_buf.take() {
                        links.push(Link {
                            text: text.trim().to_string(),
                            href,
                        });
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, alt)) = image_buf.as_mut() {
                        // Alt text is an attribute, not visible page text
                        alt.push_str(&text);
                        continue;
                    }
                    if let Some((_, buf)) = heading_buf.as_mut() {
                        buf.push_str(&text);
                    }
                    if let Some((_, buf)) = link_buf.as_mut() {
                        buf.push_str(&text);
                    }
                    full_text.push_str(&text);
                }
                Event::Html(html) | Event::InlineHtml(html) => {
                    embedded_html.push_str(&html);
                }
                Event::SoftBreak | Event::HardBreak => {
                    full_text.push('\n');
                }
                Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => {
                    full_text.push('\n');
                }
                _ => {}
            }
        }

        // Hypertext fragments embedded in markdown still carry structure
        // the rules must see (the normalizer expands markdown before
        // extraction, so raw <img>/<a> tags survive into the structure).
        if !embedded_html.is_empty() {
            let fragment = Html::parse_fragment(&embedded_html);
            extract_images(&fragment, &mut images);
            extract_links(&fragment, &mut links);
            let text: String = fragment.root_element().text().collect();
            if !text.trim().is_empty() {
                full_text.push_str(&text);
            }
        }

        Self {
            kind: DocumentKind::Markdown,
            headings,
            images,
            links,
            full_text,
            raw_source: raw.to_string(),
            title: None,
            meta: BTreeMap::new(),
        }
    }

    fn parse_hypertext(raw: &str) -> Self {
        let html = Html::parse_document(raw);

        let heading_sel =
            Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
        let title_sel = Selector::parse("title").expect("valid selector");
        let meta_sel = Selector::parse("meta").expect("valid selector");

        let mut headings = Vec::new();
        for element in html.select(&heading_sel) {
            if let Some(level) = element.value().name().strip_prefix('h') {
                if let Ok(level) = level.parse::<u8>() {
                    headings.push(Heading {
                        level,
                        text: element.text().collect::<String>().trim().to_string(),
                    });
                }
            }
        }

        let mut images = Vec::new();
        extract_images(&html, &mut images);
        let mut links = Vec::new();
        extract_links(&html, &mut links);

        let title = html
            .select(&title_sel)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string());

        let mut meta = BTreeMap::new();
        for element in html.select(&meta_sel) {
            if let (Some(name), Some(content)) =
                (element.value().attr("name"), element.value().attr("content"))
            {
                meta.insert(name.to_ascii_lowercase(), content.to_string());
            }
        }

        let full_text: String = html.root_element().text().collect();

        Self {
            kind: DocumentKind::Hypertext,
            headings,
            images,
            links,
            full_text,
            raw_source: raw.to_string(),
            title,
            meta,
        }
    }
}

fn heading_level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn extract_images(html: &Html, images: &mut Vec<Image>) {
    let img_sel = Selector::parse("img").expect("valid selector");
    for element in html.select(&img_sel) {
        images.push(Image {
            source: element.value().attr("src").unwrap_or("unknown").to_string(),
            alt: element.value().attr("alt").map(|a| a.to_string()),
        });
    }
}

fn extract_links(html: &Html, links: &mut Vec<Link>) {
    let a_sel = Selector::parse("a").expect("valid selector");
    for element in html.select(&a_sel) {
        links.push(Link {
            text: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").unwrap_or("").to_string(),
        });
    }
}
