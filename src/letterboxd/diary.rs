use select::predicate::{Class, Name, Predicate};
use select::{document::Document, node::Node};
use tracing::{debug, info};
use url::Url;

use super::model::DiaryEntry;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;

pub async fn fetch_diary(fetcher: &Fetcher, config: &Config) -> Result<Vec<DiaryEntry>> {
    info!("Scraping Letterboxd diary of {}", config.username);

    let html = fetcher.fetch_text(&config.diary_url()).await?;
    let films = extract(&html, &config.diary_base);

    info!("Found {} films", films.len());
    Ok(films)
}

pub fn extract(html: &str, site_origin: &str) -> Vec<DiaryEntry> {
    let origin = Url::parse(site_origin).ok();

    Document::from(html)
        .find(Class("poster-list").descendant(Class("film-poster")))
        .filter_map(|node| parse_film_poster(node, origin.as_ref()))
        .collect()
}

fn parse_film_poster(film_node: Node, origin: Option<&Url>) -> Option<DiaryEntry> {
    let title = film_node
        .find(Name("img"))
        .next()
        .and_then(|n| n.attr("alt"))
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let letterboxd_url = film_node
        .find(Name("a"))
        .next()
        .and_then(|n| n.attr("href"))
        .filter(|href| !href.is_empty())
        .and_then(|href| origin?.join(href).ok())
        .map(String::from);

    debug!("Film tile: {} ({:?})", title, letterboxd_url);

    Some(DiaryEntry {
        title,
        letterboxd_url,
    })
}
