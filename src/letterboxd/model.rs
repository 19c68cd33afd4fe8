use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub title: String,
    pub letterboxd_url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEntry {
    pub title: String,
    pub letterboxd_url: Option<String>,
    pub poster_url: Option<String>,
}

impl EnrichedEntry {
    pub fn new(entry: DiaryEntry, poster_url: Option<String>) -> Self {
        Self {
            title: entry.title,
            letterboxd_url: entry.letterboxd_url,
            poster_url,
        }
    }
}
