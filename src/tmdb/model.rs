use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<MetadataCandidate>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MetadataCandidate {
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl SearchResponse {
    // First result wins, no scoring.
    pub fn best_match(self) -> Option<MetadataCandidate> {
        self.results?.into_iter().next()
    }
}
