//! CLI entry point for netrun-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use netrun_blog::content::NewPost;

#[derive(Parser)]
#[command(name = "netrun-blog")]
#[command(version)]
#[command(about = "Flat-file Markdown blog for the Netrun Systems site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config and seed the welcome post
    Init,

    /// Create a new post
    New {
        /// Title of the new post; also determines its slug
        #[arg(short, long)]
        title: String,

        /// Author (defaults to the site owner)
        #[arg(short, long, default_value = "")]
        author: String,

        /// Publication date, YYYY-MM-DD (defaults to today)
        #[arg(long, default_value = "")]
        date: String,

        /// Short summary shown in the listing
        #[arg(short, long, default_value = "")]
        excerpt: String,

        /// Cover image path or URL
        #[arg(short, long)]
        image: Option<String>,

        /// Markdown body
        #[arg(short, long, conflicts_with = "file")]
        body: Option<String>,

        /// Read the Markdown body from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List posts, newest first
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,

        /// Print the rendered HTML body
        #[arg(long)]
        html: bool,
    },

    /// Start the blog page server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "netrun_blog=debug,info"
    } else {
        "netrun_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("reading current directory")?,
    };

    match cli.command {
        Commands::Init => {
            tracing::info!("Initializing blog in {:?}", base_dir);
            netrun_blog::commands::init::init_site(&base_dir)?;
            let blog = netrun_blog::Blog::new(&base_dir)?;
            blog.init()?;
        }

        Commands::New {
            title,
            author,
            date,
            excerpt,
            image,
            body,
            file,
        } => {
            let blog = netrun_blog::Blog::new(&base_dir)?;
            let body = match (body, file) {
                (Some(body), _) => body,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => String::new(),
            };
            tracing::info!("Creating new post with title: {}", title);
            blog.new_post(&NewPost {
                title,
                author,
                date,
                excerpt,
                image,
                body,
            })?;
        }

        Commands::List { json } => {
            let blog = netrun_blog::Blog::new(&base_dir)?;
            netrun_blog::commands::list::run(&blog, json)?;
        }

        Commands::Show { slug, html } => {
            let blog = netrun_blog::Blog::new(&base_dir)?;
            netrun_blog::commands::show::run(&blog, &slug, html)?;
        }

        Commands::Server { port, ip } => {
            let blog = netrun_blog::Blog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            netrun_blog::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("netrun-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
