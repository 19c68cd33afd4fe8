use tracing::debug;
use url::form_urlencoded;

use super::model::{MetadataCandidate, SearchResponse};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;

/// "No results" is `Ok(None)`, not an error.
pub async fn resolve(
    fetcher: &Fetcher,
    config: &Config,
    title: &str,
) -> Result<Option<MetadataCandidate>> {
    let url = search_url(config, title);
    let response: SearchResponse = fetcher.fetch_json(&url).await?;
    let candidate = response.best_match();

    debug!(
        "TMDb search {:?}: {}",
        title,
        if candidate.is_some() { "match" } else { "no match" }
    );

    Ok(candidate)
}

pub fn search_url(config: &Config, title: &str) -> String {
    format!(
        "{}/search/movie?api_key={}&query={}",
        config.tmdb_base,
        encode(&config.api_key),
        encode(title)
    )
}

// Spaces as %20, not +. A literal '+' is already %2B at this point.
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// Empty paths count as no poster.
pub fn poster_url(image_base: &str, candidate: Option<&MetadataCandidate>) -> Option<String> {
    candidate?
        .poster_path
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(|path| format!("{image_base}{path}"))
}
