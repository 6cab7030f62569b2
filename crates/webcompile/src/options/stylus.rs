use super::OptionMap;
use crate::types::Config;
use serde::Serialize;

/// Resolved options for the stylus compiler family
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylusOptions {
    /// Output style; stylus has no canonical set, so this is passed through
    pub output_style: String,

    /// Paths searched when resolving @import, in declaration order
    pub import_paths: Vec<String>,

    /// Emit source line comments into the generated CSS
    pub line_numbers: bool,

    /// Base path emitted in the source map as-is
    pub source_map_root: String,
}

impl StylusOptions {
    /// Compiler name this variant applies to
    pub const NAME: &'static str = "stylus";

    pub fn from_config(config: &Config) -> Self {
        let opts = OptionMap::new(config);
        Self {
            output_style: opts.string("style", ""),
            import_paths: opts.list("paths"),
            line_numbers: opts.boolean("lineNumbers", false),
            source_map_root: opts.string("sourceMapRoot", ""),
        }
    }
}
