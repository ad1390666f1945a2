//! Blog page server

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::Post;
use crate::helpers::{post_url, url_for};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Server state
struct ServerState {
    blog: Blog,
    templates: TemplateRenderer,
}

/// Build the router serving the blog pages under the configured root
pub fn router(blog: Blog) -> Result<Router> {
    let root = blog.config.root.trim_end_matches('/').to_string();
    let state = Arc::new(ServerState {
        blog,
        templates: TemplateRenderer::new()?,
    });

    let pages = Router::new()
        .route("/", get(index_handler))
        .route("/blog", get(blog_handler))
        .route("/blog/:slug", get(post_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state);

    let app = if root.is_empty() {
        pages
    } else {
        Router::new().nest(&root, pages)
    };

    Ok(app.layer(TraceLayer::new_for_http()))
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(blog.clone())?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Serving {} at http://{}:{}{}",
        blog.posts_dir.display(),
        ip,
        port,
        url_for(&blog.config.root, "blog")
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Redirect {
    Redirect::temporary(&url_for(&state.blog.config.root, "blog"))
}

/// Listing page, newest first
async fn blog_handler(State(state): State<Arc<ServerState>>) -> Response {
    let posts = match load(&state, |blog| blog.list_posts()).await {
        Ok(posts) => posts,
        Err(response) => return response,
    };

    let config = &state.blog.config;
    let views: Vec<_> = posts
        .iter()
        .map(|post| post.view(&config.date_format, post_url(&config.root, &post.slug)))
        .collect();

    page(state.templates.render_blog(config, &views), StatusCode::OK)
}

/// Single post page
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let lookup = slug.clone();
    let post: Option<Post> = match load(&state, move |blog| blog.get_post(&lookup)).await {
        Ok(post) => post,
        Err(response) => return response,
    };

    let config = &state.blog.config;
    match post {
        Some(post) => {
            let view = post.view(&config.date_format, post_url(&config.root, &post.slug));
            page(state.templates.render_post(config, &view), StatusCode::OK)
        }
        None => {
            tracing::debug!("No post with slug {:?}", slug);
            not_found(&state)
        }
    }
}

async fn health_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load(&state, |blog| blog.list_posts().len()).await {
        Ok(count) => Json(json!({ "status": "ok", "posts": count })).into_response(),
        Err(response) => response,
    }
}

async fn not_found_handler(State(state): State<Arc<ServerState>>) -> Response {
    not_found(&state)
}

/// Run a repository query on the blocking pool
async fn load<T, F>(state: &Arc<ServerState>, query: F) -> Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce(&Blog) -> T + Send + 'static,
{
    let blog = state.blog.clone();
    tokio::task::spawn_blocking(move || query(&blog))
        .await
        .map_err(|e| {
            tracing::error!("Post query failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        })
}

fn not_found(state: &ServerState) -> Response {
    page(
        state.templates.render_not_found(&state.blog.config),
        StatusCode::NOT_FOUND,
    )
}

fn page(rendered: Result<String>, status: StatusCode) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}
