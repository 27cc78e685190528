//! Resource APIs for the Admin API surface we use.

pub mod assets;
pub mod themes;

pub use assets::AssetsApi;
pub use themes::ThemesApi;
