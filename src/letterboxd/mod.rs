pub mod diary;
pub mod model;

pub use diary::{extract, fetch_diary};
pub use model::{DiaryEntry, EnrichedEntry};
