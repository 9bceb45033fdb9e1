//! Quiz server binary
//!
//! Run with: cargo run -p newsquiz-server -- --config config/newsquiz.toml

use std::path::PathBuf;

use clap::Parser;
use newsquiz_server::{config::QuizConfig, server::QuizServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Quiz generation API for news articles and arXiv abstracts
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "NEWSQUIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; it may hold NEWS_API_KEY
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsquiz_server=info,newsquiz_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                         Newsquiz                          ║
║         Quizzes from News Articles and Research           ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let mut config = QuizConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Configuration loaded");
    match config.news.api_key() {
        Some(_) => tracing::info!("  - News source: NewsAPI (RSS fallback)"),
        None => tracing::info!("  - News source: RSS feeds (set NEWS_API_KEY to use NewsAPI)"),
    }
    tracing::info!("  - arXiv endpoint: {}", config.arxiv.api_url);
    tracing::info!("  - Question types: {:?}", config.quiz.question_types);
    tracing::info!("  - Max questions per quiz: {}", config.quiz.max_questions);

    // Create and start server
    let server = QuizServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}/api", server.address());
    println!("  Health: http://{}/api/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  GET  /api/news                - Fetch news articles");
    println!("  GET  /api/papers              - Search arXiv papers");
    println!("  POST /api/generate-from-news  - Quiz from an article");
    println!("  POST /api/generate-from-paper - Quiz from a paper");
    println!("  POST /api/generate-quiz       - Quiz from supplied text");
    println!("  POST /api/submit-quiz         - Score answers");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
