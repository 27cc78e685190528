use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role a theme plays within a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeRole {
    /// The published (live) theme
    Main,
    Unpublished,
    Demo,
    Development,
}

impl std::fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Unpublished => write!(f, "unpublished"),
            Self::Demo => write!(f, "demo"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// A theme as returned by the Admin API
///
/// Identity is owned by Shopify; read-only on our side except for creation
/// via duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub name: String,
    pub role: ThemeRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single theme file, addressed by its path-like key
///
/// Identity is the `(theme_id, key)` pair. Textual files carry `value`;
/// binary files carry a base64 `attachment` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// Wire envelopes matching the Admin API JSON shapes

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemesEnvelope {
    pub themes: Vec<Theme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeEnvelope {
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsEnvelope {
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEnvelope {
    pub asset: Asset,
}
