use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const DEFAULT_HEADHUNTER_URL: &str = "https://api.hh.ru/vacancies";
const DEFAULT_SUPERJOB_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const DEFAULT_USER_AGENT: &str = "VacancyAggregator/1.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub default_keyword: String,
    pub max_pages: u32,
    pub page_size: u32,
    pub data_dir: PathBuf,
    pub headhunter_url: Url,
    pub headhunter_user_agent: String,
    pub superjob_url: Url,
    pub superjob_api_key: String,
    pub http_timeout: Duration,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Reads the environment on first use; later calls return the same value.
    pub fn load() -> Result<&'static Config> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }
        let config = Self::from_env()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            default_keyword: get_env_or("DEFAULT_KEYWORD", "Python"),
            max_pages: get_env_parse_or("MAX_PAGES", 10)?,
            page_size: get_env_parse_or("PAGE_SIZE", 100)?,
            data_dir: PathBuf::from(get_env_or("DATA_DIR", ".")),
            headhunter_url: get_env_url("HEADHUNTER_URL", DEFAULT_HEADHUNTER_URL)?,
            headhunter_user_agent: get_env_or("HEADHUNTER_USER_AGENT", DEFAULT_USER_AGENT),
            superjob_url: get_env_url("SUPERJOB_URL", DEFAULT_SUPERJOB_URL)?,
            superjob_api_key: required_env("SUPERJOB_API_KEY")?,
            http_timeout: Duration::from_secs(get_env_parse_or("HTTP_TIMEOUT_SECS", 30)?),
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(Error::Config(format!("{} is set but empty", name))),
        Err(_) => Err(Error::Config(format!("{} must be set", name))),
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

fn get_env_url(name: &str, default: &str) -> Result<Url> {
    let raw = get_env_or(name, default);
    Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid URL for {}: {}", name, e)))
}
