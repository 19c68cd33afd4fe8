use std::path::PathBuf;
use std::time::Duration;

pub const LETTERBOXD_BASE: &str = "https://letterboxd.com";
pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const REQUEST_DELAY: Duration = Duration::from_millis(300);
pub const OUT_DIR: &str = "public";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// First failed lookup aborts the run and nothing is written.
    #[default]
    Abort,
    /// Failed lookups are logged and the film is kept without a poster.
    Isolate,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub username: String,
    pub output: PathBuf,
    pub api_key: String,
    pub request_delay: Duration,
    pub diary_base: String,
    pub tmdb_base: String,
    pub image_base: String,
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        let username = username.into();
        let output = default_output(&username);

        Self {
            username,
            output,
            api_key: api_key.into(),
            request_delay: REQUEST_DELAY,
            diary_base: LETTERBOXD_BASE.to_string(),
            tmdb_base: TMDB_BASE.to_string(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_diary_base(mut self, base: impl Into<String>) -> Self {
        self.diary_base = trim_base(base.into());
        self
    }

    pub fn with_tmdb_base(mut self, base: impl Into<String>) -> Self {
        self.tmdb_base = trim_base(base.into());
        self
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = trim_base(base.into());
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn diary_url(&self) -> String {
        format!("{}/{}/films/page/1/", self.diary_base, self.username)
    }
}

pub fn default_output(username: &str) -> PathBuf {
    PathBuf::from(OUT_DIR).join(format!("{username}-movies.json"))
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_username() {
        let config = Config::new("vkworkofficial", "key");

        assert_eq!(
            config.output,
            PathBuf::from("public").join("vkworkofficial-movies.json")
        );
        assert_eq!(
            config.diary_url(),
            "https://letterboxd.com/vkworkofficial/films/page/1/"
        );
        assert_eq!(config.request_delay, Duration::from_millis(300));
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn trailing_slashes_are_dropped_from_bases() {
        let config = Config::new("someone", "key")
            .with_diary_base("http://127.0.0.1:4000/")
            .with_image_base("https://img.example/w500/");

        assert_eq!(
            config.diary_url(),
            "http://127.0.0.1:4000/someone/films/page/1/"
        );
        assert_eq!(config.image_base, "https://img.example/w500");
    }
}
