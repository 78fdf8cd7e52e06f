use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use pin_core::SiteConfig;
use pin_feed::create_feed;
use pin_listing::discover_tags;
use pin_render::clean_html_content;
use pin_web::AppState;
use tracing::info;

mod browse;
mod export;
mod logging;

use browse::BrowseView;
use logging::{init_logging, Logger};

/// A duration such as `30s`, `2m` or `1m30s`. A bare number means seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total = 0u64;
        let mut digits = String::new();
        let mut seen_number = false;

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let value: u64 = digits
                .parse()
                .map_err(|_| format!("Expected a number before '{}'", c))?;
            let scale = match c {
                's' => 1,
                'm' => 60,
                'h' => 3600,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            total = value
                .checked_mul(scale)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(|| format!("Duration too large: {}", s))?;
            digits.clear();
            seen_number = true;
        }

        if !digits.is_empty() {
            let secs = digits
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total = total
                .checked_add(secs)
                .ok_or_else(|| format!("Duration too large: {}", s))?;
            seen_number = true;
        }
        if !seen_number {
            return Err("Duration must include a number".to_string());
        }
        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

#[derive(Parser, Debug)]
#[command(name = "pinews", author, version, about = "Pondok Informatika news pages", long_about = None)]
struct Cli {
    /// Feed endpoint returning `{ "data": [...] }`
    #[arg(long, global = true)]
    feed_url: Option<String>,
    /// Read the feed from a local JSON file instead of the API
    #[arg(long, global = true)]
    feed_file: Option<PathBuf>,
    /// Request timeout for the feed (e.g. 30s, 1m)
    #[arg(long, global = true, default_value = "30s")]
    timeout: HumanDuration,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the pages over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
    /// Write every page as a static site
    Export {
        #[arg(long, default_value = "site")]
        out: PathBuf,
    },
    /// Page through a listing in the terminal, one Enter per "load more"
    Browse {
        #[arg(long, value_enum, default_value = "home")]
        view: BrowseView,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Print the discovered tags
    Tags,
    /// Print one article as plain text
    Show { id: String },
}

impl Cli {
    fn site_config(&self) -> SiteConfig {
        let mut config = SiteConfig::default().with_timeout(self.timeout.0);
        if let Some(url) = &self.feed_url {
            config = config.with_feed_url(url.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.site_config();
    let feed = create_feed(&config, cli.feed_file.as_deref())
        .await
        .context("failed to set up the feed")?;
    info!("📰 Using feed {}", feed.describe());

    match cli.command {
        Commands::Serve { bind } => {
            let state = AppState::new(feed, config)?;
            pin_web::serve(state, bind).await?;
        }
        Commands::Export { out } => {
            let articles = feed.fetch().await.context("failed to load the feed")?;
            let pages = {
                let mut rng = rand::thread_rng();
                export::render_site(&articles, &config, Utc::now(), &mut rng)?
            };
            export::write_site(&pages, &out).await?;
        }
        Commands::Browse { view, tag } => {
            let articles = feed.fetch().await.context("failed to load the feed")?;
            let (list, page_size) =
                browse::browse_list(articles, view, tag.as_deref(), Utc::now(), &config)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            browse::run(&list, page_size, &config, stdin, &mut stdout).await?;
        }
        Commands::Tags => {
            let logger = Logger::new("tags");
            let articles = feed.fetch().await.context("failed to load the feed")?;
            let tags = discover_tags(&articles);
            if tags.is_empty() {
                logger.warn("feed has no categories");
            }
            for tag in tags {
                println!("{}", tag);
            }
        }
        Commands::Show { id } => {
            let logger = Logger::new("show").with_prefix(id.clone());
            let articles = feed.fetch().await.context("failed to load the feed")?;
            let article = match browse::find_or_not_found(&articles, id.trim()) {
                Ok(article) => article,
                Err(e) => {
                    logger.error("Artikel yang Anda cari tidak ditemukan");
                    return Err(e.into());
                }
            };
            println!("{}", article.title);
            println!(
                "{} | {} | {}",
                article.kategori.as_deref().unwrap_or("Umum"),
                article.display_date().unwrap_or("Hari ini"),
                article.author_name().unwrap_or("Admin")
            );
            println!();
            let body = article
                .content
                .as_deref()
                .or(article.description.as_deref())
                .unwrap_or_default();
            println!("{}", clean_html_content(body));
        }
    }

    Ok(())
}
