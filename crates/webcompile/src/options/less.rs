use super::OptionMap;
use crate::types::Config;
use serde::Serialize;

/// Resolved options for the less compiler family
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessOptions {
    /// Output style; less has no canonical set, so this is passed through
    pub output_style: String,

    /// Re-write URLs in imported files relative to the base imported file
    pub relative_urls: bool,

    /// Require parentheses around math expressions
    pub strict_math: bool,

    /// Reject arithmetic on mixed units instead of guessing
    pub strict_units: bool,

    /// Prefix prepended to every generated URL
    pub root_path: String,

    /// Base path emitted in the source map as-is
    pub source_map_root: String,
}

impl LessOptions {
    /// Compiler name this variant applies to
    pub const NAME: &'static str = "less";

    pub fn from_config(config: &Config) -> Self {
        let opts = OptionMap::new(config);
        Self {
            output_style: opts.string("style", ""),
            relative_urls: opts.boolean("relativeUrls", true),
            strict_math: opts.boolean("strictMath", false),
            strict_units: opts.boolean("strictUnits", false),
            root_path: opts.string("rootPath", ""),
            source_map_root: opts.string("sourceMapRoot", ""),
        }
    }
}
