use super::OptionMap;
use crate::types::Config;
use serde::Serialize;

/// Resolved options for the sass compiler family
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SassOptions {
    /// Output style ("expanded", "compressed", "compact", "nested")
    pub output_style: String,

    /// Browser targets handed to autoprefixer; empty disables prefixing
    pub auto_prefix_targets: String,

    /// Paths searched when resolving imports, in declaration order
    pub load_paths: Vec<String>,

    /// Decimal precision of emitted numeric values
    pub precision: u32,

    /// Re-write URLs in imported files relative to the base imported file
    pub relative_urls: bool,

    /// Base path emitted in the source map as-is
    pub source_map_root: String,
}

impl SassOptions {
    /// Compiler name this variant applies to
    pub const NAME: &'static str = "sass";

    pub fn from_config(config: &Config) -> Self {
        let opts = OptionMap::new(config);
        Self {
            output_style: opts.string("style", "expanded"),
            auto_prefix_targets: opts.string("autoPrefix", ""),
            load_paths: opts.list("loadPaths"),
            precision: opts.integer("precision", 5),
            relative_urls: opts.boolean("relativeUrls", true),
            source_map_root: opts.string("sourceMapRoot", ""),
        }
    }
}
