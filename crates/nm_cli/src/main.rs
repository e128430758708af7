mod config;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use config::Config;
use nm_client::{FacadeClient, Session, ViewState, TRENDING_TOPICS};
use nm_core::Result;
use nm_inference::{create_model, SummaryGateway};
use nm_news::NewsApiClient;
use nm_web::AppState;

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the news/summarization API server
    Serve {
        /// Listening port (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
        /// Generative backend. Available models: gemini (default), dummy
        #[arg(long, default_value = "gemini")]
        model: String,
    },
    /// Fetch grouped news from a running server and print them
    View {
        /// Search term; "latest" selects top headlines
        #[arg(default_value = "latest")]
        query: String,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Summarize a piece of text via a running server
    Summarise {
        text: String,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, model } => {
            let config = Config::from_env();
            config.log_key_presence();

            let news = Arc::new(NewsApiClient::new(config.news_api_key.clone()));
            let model = create_model(&model, config.gemini_api_key.clone())?;
            info!("🧠 Generative model initialized: {}", model.name());

            let state = AppState {
                news,
                summarizer: SummaryGateway::new(model),
            };
            nm_web::serve(state, port.unwrap_or(config.port)).await
        }
        Commands::View { query, server } => {
            let mut session = Session::new(FacadeClient::new(&server)?);
            session.state.set_query(&query);
            session.submit_search().await;
            print_view(&session.state);
            Ok(())
        }
        Commands::Summarise { text, server } => {
            let api = FacadeClient::new(&server)?;
            let summary = api.summarise(&text).await?;
            println!("{summary}");
            Ok(())
        }
    }
}

fn print_view(state: &ViewState) {
    println!("🔥 Trending: {}", TRENDING_TOPICS.join(", "));
    if !state.recent_searches().is_empty() {
        println!("🕘 Recent searches: {}", state.recent_searches().join(", "));
    }
    println!();

    if let Some(error) = &state.error {
        eprintln!("⚠️  {error}");
        return;
    }

    for group in &state.groups {
        println!("📰 {} ({} articles)", group.source, group.articles.len());
        for article in &group.articles {
            println!("  • {}", article.title.as_deref().unwrap_or("(untitled)"));
            if let Some(published) = article.published_at {
                print!("    {}", published.format("%Y-%m-%d"));
                if let Some(author) = &article.author {
                    print!(" | By {author}");
                }
                println!();
            } else if let Some(author) = &article.author {
                println!("    By {author}");
            }
            println!("    {}", article.url);
            if let Some(description) = &article.description {
                println!("    {description}");
            }
        }
        println!();
    }
}
