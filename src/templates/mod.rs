//! Built-in blog templates using the Tera template engine
//!
//! Templates are embedded in the binary. HTML escaping stays on; post
//! bodies are already HTML and are marked `safe` where they are inserted.

use anyhow::Result;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::PostView;

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="{{ site.language }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% block title %}{{ site.title }}{% endblock title %}</title>
  <meta name="description" content="{{ site.description }}">
</head>
<body>
  <header><a href="{{ blog_url | safe }}">{{ site.title }}</a></header>
  <main>
  {% block content %}{% endblock content %}
  </main>
  <footer>&copy; {{ year }} {{ site.author }}</footer>
</body>
</html>
"#;

const BLOG: &str = r#"{% extends "layout.html" %}
{% block content %}
<h1>Blog</h1>
{% if posts | length == 0 %}
<p class="empty">No posts yet.</p>
{% else %}
<ul class="posts">
{% for post in posts %}
  <li class="post">
    {% if post.image %}<img src="{{ post.image }}" alt="{{ post.title }}">{% endif %}
    <h2><a href="{{ post.url | safe }}">{{ post.title }}</a></h2>
    <p class="meta">{{ post.formatted_date }} &middot; {{ post.author }}</p>
    {% if post.excerpt %}<p class="excerpt">{{ post.excerpt }}</p>{% endif %}
  </li>
{% endfor %}
</ul>
{% endif %}
{% endblock content %}
"#;

const POST: &str = r#"{% extends "layout.html" %}
{% block title %}{{ post.title }} | {{ site.title }}{% endblock title %}
{% block content %}
<article>
  <h1>{{ post.title }}</h1>
  <p class="meta">{{ post.formatted_date }} &middot; {{ post.author }}</p>
  {% if post.image %}<img src="{{ post.image }}" alt="{{ post.title }}">{% endif %}
  <div class="content">{{ post.content | safe }}</div>
</article>
<p><a href="{{ blog_url | safe }}">&larr; All posts</a></p>
{% endblock content %}
"#;

const NOT_FOUND: &str = r#"{% extends "layout.html" %}
{% block title %}Not found | {{ site.title }}{% endblock title %}
{% block content %}
<h1>Page not found</h1>
<p>The page you were looking for does not exist.</p>
<p><a href="{{ blog_url | safe }}">Back to the blog</a></p>
{% endblock content %}
"#;

/// Template renderer for the blog pages
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("blog.html", BLOG),
            ("post.html", POST),
            ("404.html", NOT_FOUND),
        ])?;
        Ok(Self { tera })
    }

    /// Render the listing page
    pub fn render_blog(&self, site: &SiteConfig, posts: &[PostView<'_>]) -> Result<String> {
        let mut context = self.base_context(site);
        context.insert("posts", posts);
        Ok(self.tera.render("blog.html", &context)?)
    }

    /// Render a single post page
    pub fn render_post(&self, site: &SiteConfig, post: &PostView<'_>) -> Result<String> {
        let mut context = self.base_context(site);
        context.insert("post", post);
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the not-found page
    pub fn render_not_found(&self, site: &SiteConfig) -> Result<String> {
        let context = self.base_context(site);
        Ok(self.tera.render("404.html", &context)?)
    }

    fn base_context(&self, site: &SiteConfig) -> Context {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("blog_url", &crate::helpers::url_for(&site.root, "blog"));
        context.insert("year", &chrono::Local::now().format("%Y").to_string());
        context
    }
}
