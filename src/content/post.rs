//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{ContentError, FrontMatter, RenderMarkdown};
use crate::helpers::{format_date, format_post_date, full_date, slug_from_title, Clock};

/// Title used when the front matter names none
pub const DEFAULT_TITLE: &str = "Untitled";

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Post author
    pub author: String,

    /// Publication date (midnight for dates read from front matter)
    pub date: NaiveDateTime,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Cover image path or URL
    pub image: String,

    /// Rendered HTML content
    pub content: String,

    /// File name the post was read from
    pub source: String,
}

/// Collaborators needed to turn raw text into a [`Post`]
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub renderer: &'a dyn RenderMarkdown,
    pub clock: &'a dyn Clock,
    pub default_author: &'a str,
}

impl Post {
    /// Parse a post file
    ///
    /// Fails only when the front-matter delimiters are missing. Absent
    /// fields fall back to their defaults, and a missing or malformed date
    /// becomes the clock's current time.
    pub fn parse(raw: &str, source: &str, ctx: &ParseContext<'_>) -> Result<Self, ContentError> {
        let (fm, body) = FrontMatter::parse(raw)?;

        let title = fm.get("title").unwrap_or(DEFAULT_TITLE).to_string();
        let slug = fm
            .get("slug")
            .map(str::to_string)
            .unwrap_or_else(|| slug_from_title(&title));
        let date = fm.parse_date().unwrap_or_else(|| ctx.clock.now());

        Ok(Self {
            author: fm.get("author").unwrap_or(ctx.default_author).to_string(),
            date,
            slug,
            excerpt: fm.get("excerpt").unwrap_or_default().to_string(),
            image: fm.get("image").unwrap_or_default().to_string(),
            content: ctx.renderer.render(body),
            source: source.to_string(),
            title,
        })
    }

    /// Date rendered like "April 24, 2025"
    pub fn formatted_date(&self) -> String {
        full_date(&self.date)
    }

    /// Date as written in front matter (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        format_post_date(&self.date)
    }

    /// Template/JSON view with derived fields filled in
    pub fn view(&self, date_format: &str, url: String) -> PostView<'_> {
        PostView {
            post: self,
            formatted_date: format_date(&self.date, date_format),
            url,
        }
    }
}

/// Render-ready view of a post
#[derive(Debug, Serialize)]
pub struct PostView<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub formatted_date: String,
    pub url: String,
}

/// Raw fields submitted to create a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    /// Expected as `YYYY-MM-DD`; anything else means today
    pub date: String,
    pub excerpt: String,
    pub image: Option<String>,
    /// Markdown body
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use crate::helpers::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    fn parse(raw: &str) -> Result<Post, ContentError> {
        let renderer = MarkdownRenderer::new();
        let clock = clock();
        let ctx = ParseContext {
            renderer: &renderer,
            clock: &clock,
            default_author: "Netrun Systems",
        };
        Post::parse(raw, "post.md", &ctx)
    }

    #[test]
    fn test_parse_full_post() {
        let post = parse(
            "---\ntitle: Lighthouse Basics\nauthor: Dana\ndate: 2024-01-15\nslug: lighthouse\nexcerpt: Intro\nimage: /static/img/lh.png\n---\n# Heading\n\nBody *text*.\n",
        )
        .unwrap();

        assert_eq!(post.title, "Lighthouse Basics");
        assert_eq!(post.author, "Dana");
        assert_eq!(post.date_string(), "2024-01-15");
        assert_eq!(post.formatted_date(), "January 15, 2024");
        assert_eq!(post.slug, "lighthouse");
        assert_eq!(post.excerpt, "Intro");
        assert_eq!(post.image, "/static/img/lh.png");
        assert!(post.content.contains("<h1>Heading</h1>"));
        assert!(post.content.contains("<em>text</em>"));
        assert_eq!(post.source, "post.md");
    }

    #[test]
    fn test_defaults() {
        let post = parse("---\nunknown: value\n---\nhello\n").unwrap();
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.author, "Netrun Systems");
        assert_eq!(post.slug, "untitled");
        assert_eq!(post.excerpt, "");
        assert_eq!(post.image, "");
        assert_eq!(post.date, clock().now());
    }

    #[test]
    fn test_slug_derived_from_title() {
        let post = parse("---\ntitle: Welcome to Netrun Systems\n---\n").unwrap();
        assert_eq!(post.slug, "welcome-to-netrun-systems");

        let post = parse("---\ntitle: Welcome to Netrun Systems\nslug:\n---\n").unwrap();
        assert_eq!(post.slug, "welcome-to-netrun-systems");
    }

    #[test]
    fn test_bad_date_defaults_to_now() {
        let post = parse("---\ndate: 15/01/2024\n---\n").unwrap();
        assert_eq!(post.date, clock().now());
        assert_eq!(post.formatted_date(), "October 18, 2026");
    }

    #[test]
    fn test_missing_delimiters() {
        assert!(matches!(
            parse("title: x\n\nbody"),
            Err(ContentError::MissingFrontMatter)
        ));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "---\ntitle: Same\ndate: 2024-02-01\n---\nText\n";
        assert_eq!(parse(raw).unwrap(), parse(raw).unwrap());
    }

    #[test]
    fn test_view_serializes_derived_fields() {
        let post = parse("---\ntitle: T\ndate: 2024-03-01\n---\n").unwrap();
        let value = serde_json::to_value(post.view("%B %d, %Y", "/blog/t".to_string())).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["formatted_date"], "March 01, 2024");
        assert_eq!(value["url"], "/blog/t");
    }
}
