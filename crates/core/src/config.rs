use thiserror::Error;

/// Environment variable holding the shop hostname
pub const ENV_SHOP: &str = "SHOPIFY_SHOP";
/// Environment variable holding the Admin API access token
pub const ENV_ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";
/// Environment variable holding the default theme id
pub const ENV_THEME_ID: &str = "SHOPIFY_THEME_ID";

/// Fatal configuration problems detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

/// Process configuration sourced from the environment
///
/// The access token is required; without it the process must exit before
/// any network call is attempted.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shop hostname, e.g. `my-store.myshopify.com`
    pub shop: String,
    /// Static Admin API bearer token
    pub access_token: String,
    /// Theme id substituted when a tool call omits `theme_id`
    pub default_theme_id: Option<i64>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let shop = lookup(ENV_SHOP)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_SHOP))?;
        let access_token = lookup(ENV_ACCESS_TOKEN)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_ACCESS_TOKEN))?;

        let default_theme_id = match lookup(ENV_THEME_ID) {
            Some(raw) if !raw.trim().is_empty() => {
                let id = raw.trim().parse::<i64>().map_err(|e| ConfigError::InvalidVar {
                    var: ENV_THEME_ID,
                    message: e.to_string(),
                })?;
                Some(id)
            }
            _ => None,
        };

        Ok(Self {
            shop: normalize_shop(&shop),
            access_token,
            default_theme_id,
        })
    }
}

/// Strip an accidental scheme or trailing slash from the shop hostname.
fn normalize_shop(shop: &str) -> String {
    shop.trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
