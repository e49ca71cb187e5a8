use std::env;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "joshkerr";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Run parameters. Loaded from the environment by the binary, built directly
/// in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub readme_path: PathBuf,
    pub api_base: String,
    pub token: Option<String>,
}

impl Config {
    pub fn new(username: impl Into<String>, readme_path: impl Into<PathBuf>) -> Self {
        Self {
            username: username.into(),
            readme_path: readme_path.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Reads `GITHUB_USERNAME`, `README_PATH`, `GITHUB_API_URL` and
    /// `ACCESS_TOKEN`, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let mut config = Self::new(
            var("GITHUB_USERNAME", DEFAULT_USERNAME),
            var("README_PATH", DEFAULT_README_PATH),
        )
        .with_api_base(var("GITHUB_API_URL", DEFAULT_API_BASE));

        if let Some(token) = lookup("ACCESS_TOKEN") {
            config = config.with_token(token);
        }
        config
    }
}
