pub mod model;
pub mod search;

pub use model::{MetadataCandidate, SearchResponse};
pub use search::{poster_url, resolve};
