//! # Stitcher SDK
//!
//! Rust client for the Shopify Admin API theme and asset resources.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stitcher_sdk::{ShopifyClient, ShopifyResult};
//!
//! #[tokio::main]
//! async fn main() -> ShopifyResult<()> {
//!     let client = ShopifyClient::builder()
//!         .shop("my-store.myshopify.com")
//!         .access_token("shpat_your_token")
//!         .build()?;
//!
//!     let themes = client.themes().list().await?;
//!     println!("Found {} themes", themes.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{ShopifyClient, ShopifyClientBuilder};
pub use config::{ClientConfig, API_VERSION};
pub use error::{ShopifyError, ShopifyResult};

// Re-export core types for convenience
pub use stitcher_core::{Asset, AssetEnvelope, AssetsEnvelope, Theme, ThemeEnvelope, ThemeRole, ThemesEnvelope};
