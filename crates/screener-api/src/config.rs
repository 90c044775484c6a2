use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
    &["http://localhost:5173", "https://happinessengineer.github.io"];

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// S3 bucket for submissions. `None` keeps them in memory.
    pub bucket: Option<String>,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    /// Overrides the bundled question → domain table.
    pub domain_mapping_path: Option<PathBuf>,
    /// Set when running under the AWS Lambda runtime.
    pub lambda_runtime: bool,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| eyre::eyre!("invalid PORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect());

        Ok(Self {
            port,
            bucket: get("SCREENER_BUCKET"),
            allowed_origins,
            environment: get("SCREENER_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            domain_mapping_path: get("SCREENER_DOMAIN_MAPPING").map(PathBuf::from),
            lambda_runtime: get("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }

    /// Production and Lambda deployments log JSON; everything else logs text.
    pub fn json_logs(&self) -> bool {
        self.lambda_runtime || self.environment == "production"
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}
