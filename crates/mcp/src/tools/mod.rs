pub mod assets;
pub mod themes;
mod registry;

pub use assets::{GetThemeSettingsTool, ListThemeFilesTool, ReadFileTool, WriteFileTool};
pub use themes::{DuplicateThemeTool, GetActiveThemeTool, ListThemesTool};
pub use registry::{json_schema_object, json_schema_string, Tool, ToolRegistry};

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Theme id as it arrives in tool arguments. Declared as a string in the
/// input schemas, but numeric ids are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ThemeIdArg {
    Number(i64),
    Text(String),
}

impl ThemeIdArg {
    fn as_i64(&self) -> Result<i64> {
        match self {
            Self::Number(id) => Ok(*id),
            Self::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| anyhow!("invalid theme_id: {raw:?}")),
        }
    }
}

/// Pick the explicit theme id when given, otherwise the configured default.
pub(crate) fn resolve_theme_id(explicit: Option<&ThemeIdArg>, default_id: Option<i64>) -> Result<i64> {
    match explicit {
        Some(arg) => arg.as_i64(),
        None => default_id
            .ok_or_else(|| anyhow!("theme_id was omitted and no default theme id is configured")),
    }
}
