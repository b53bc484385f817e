use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://spla3.yuu26.com/api/schedule";
pub const DEFAULT_LOCALE: &str = "ja_JP";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub locale: String,
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("SPLAT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let data_dir = lookup("SPLAT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let catalog_path = lookup("SPLAT_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let locale = lookup("SPLAT_LOCALE")
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let top_n = match lookup("SPLAT_TOP_N") {
            Some(raw) => parse_top_n(&raw)?,
            None => DEFAULT_TOP_N,
        };

        Ok(Config {
            api_url,
            data_dir,
            catalog_path,
            locale,
            top_n,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".splat_tracker")
}

fn parse_top_n(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::ConfigError(format!(
            "SPLAT_TOP_N must be a positive integer, got {:?}",
            raw
        ))),
    }
}
