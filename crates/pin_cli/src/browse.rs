use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use futures::stream::{FuturesUnordered, StreamExt};
use pin_core::{Article, Error, Result, SiteConfig};
use pin_listing::{archive_articles, by_category, required_param, sort_newest_first, LoadMore, LoadMoreController};
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;

use crate::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BrowseView {
    Home,
    Old,
    Tag,
}

/// The list a view pages through, and how many items each step reveals.
pub fn browse_list(
    mut articles: Vec<Article>,
    view: BrowseView,
    tag: Option<&str>,
    now: DateTime<Utc>,
    config: &SiteConfig,
) -> Result<(Vec<Article>, usize)> {
    match view {
        BrowseView::Home => {
            sort_newest_first(&mut articles);
            Ok((articles, config.home_page_size))
        }
        BrowseView::Old => {
            let archive = archive_articles(&articles, config.archive_threshold(now));
            Ok((archive, config.archive_page_size))
        }
        BrowseView::Tag => {
            let tag = required_param(tag, "tag")?;
            let tagged = by_category(&articles, tag);
            let size = tagged.len().max(1);
            Ok((tagged, size))
        }
    }
}

fn print_cards<W: Write>(out: &mut W, articles: &[Article]) -> Result<()> {
    for article in articles {
        writeln!(
            out,
            "[{}] {} ({})",
            article.id,
            article.title,
            article.display_date().unwrap_or("Hari ini")
        )?;
    }
    Ok(())
}

/// Shows the first page, then reveals one more page per line read from
/// `input` until the input ends or a line reads `q`. Lines arriving while a
/// load is pending are answered with a busy notice.
pub async fn run<R, W>(
    articles: &[Article],
    page_size: usize,
    config: &SiteConfig,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let logger = Logger::new("browse");
    if articles.is_empty() {
        writeln!(out, "Tidak ada artikel")?;
        return Ok(());
    }

    let controller = LoadMoreController::new(articles.len(), page_size, config.load_more_delay);
    let mut shown = controller.window().revealed;
    print_cards(out, &articles[..shown])?;
    if controller.has_more() {
        writeln!(out, "-- Enter: Muat Lebih Banyak, q: keluar --")?;
    }

    let mut lines = input.lines();
    let mut loads = FuturesUnordered::new();
    let mut input_done = false;

    while !(input_done && loads.is_empty()) {
        tokio::select! {
            line = lines.next_line(), if !input_done => match line? {
                Some(line) if line.trim() == "q" => input_done = true,
                Some(_) => loads.push(controller.load_more()),
                None => input_done = true,
            },
            Some(outcome) = loads.next(), if !loads.is_empty() => match outcome {
                LoadMore::Revealed(window) => {
                    logger.debug(&format!("page {} revealed", window.page));
                    let end = window.revealed.min(articles.len());
                    if end > shown {
                        print_cards(out, &articles[shown..end])?;
                        shown = end;
                    }
                    if !window.has_more() {
                        writeln!(out, "-- Semua artikel sudah ditampilkan --")?;
                    }
                }
                LoadMore::Busy => writeln!(out, "-- Memuat... --")?,
                LoadMore::Exhausted => writeln!(out, "-- Semua artikel sudah ditampilkan --")?,
            },
        }
    }

    logger.info(&format!("showed {}/{} articles", shown, articles.len()));
    Ok(())
}

/// Looks up one article for `show`; unknown ids are an error.
pub fn find_or_not_found<'a>(articles: &'a [Article], id: &str) -> Result<&'a Article> {
    pin_listing::find_article(articles, id).ok_or_else(|| Error::NotFound(id.to_string()))
}
