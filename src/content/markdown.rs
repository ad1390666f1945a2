//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

use crate::config::MarkdownConfig;

/// Converts a Markdown body into HTML
///
/// Implementations must be pure: the same input always renders the same
/// output.
pub trait RenderMarkdown: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// pulldown-cmark backed renderer
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer with plain CommonMark (no extensions)
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Create with the extensions enabled in `config`
    pub fn with_config(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        Self { options }
    }
}

impl RenderMarkdown for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a *test*.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a <em>test</em>.</p>"));
    }

    #[test]
    fn test_render_list() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("- Technical deep dives\n- Product updates\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Technical deep dives</li>"));
    }

    #[test]
    fn test_tables_follow_config() {
        let table = "| a | b |\n|---|---|\n| 1 | 2 |\n";

        let plain = MarkdownRenderer::new().render(table);
        assert!(!plain.contains("<table>"));

        let config = MarkdownConfig {
            tables: true,
            ..MarkdownConfig::default()
        };
        let html = MarkdownRenderer::with_config(&config).render(table);
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = MarkdownRenderer::default();
        let source = "## Our Mission\n\nHelping **MSPs**.";
        assert_eq!(renderer.render(source), renderer.render(source));
    }
}
