/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, 各 backend service の URL など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - production かどうかは AppEnv として明示的に持ち、Cookie の Secure 判定に渡す
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Backend services (all answer with the {statusCode, response, error} envelope)
    pub auth_service_url: Url,
    pub user_service_url: Url,
    pub movie_service_url: Url,
    pub rating_service_url: Url,

    // None = no per-call timeout (the global TimeoutLayer still applies)
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth_service_url = required_url(&lookup, "AUTH_SERVICE_URL")?;
        let user_service_url = required_url(&lookup, "USER_SERVICE_URL")?;
        let movie_service_url = required_url(&lookup, "MOVIE_SERVICE_URL")?;
        let rating_service_url = required_url(&lookup, "RATING_SERVICE_URL")?;

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECONDS") {
            Some(s) => {
                let secs: u64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("UPSTREAM_TIMEOUT_SECONDS"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            auth_service_url,
            user_service_url,
            movie_service_url,
            rating_service_url,
            upstream_timeout,
        })
    }
}

fn required_url<F>(lookup: &F, key: &'static str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or(ConfigError::Missing(key))?;
    Url::parse(raw.trim()).map_err(|_| ConfigError::Invalid(key))
}
