mod less;
mod sass;
mod stylus;

pub use less::LessOptions;
pub use sass::SassOptions;
pub use stylus::StylusOptions;

use crate::types::{Config, WebCompileError};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Delimiters recognized when splitting list-valued options
const LIST_SEPARATORS: &[char] = &[';', ',', '/'];

/// Typed view over a config entry's raw option map.
///
/// All coercion and default application lives here; a variant only declares
/// which keys it reads and what the defaults are. Resolution is total:
/// malformed or absent values keep the default and never fail, because
/// config files are hand-edited and must not take down the pipeline.
pub(crate) struct OptionMap<'a> {
    raw: &'a FxHashMap<String, String>,
}

impl<'a> OptionMap<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { raw: &config.options }
    }

    /// Raw value verbatim when present, default otherwise
    pub(crate) fn string(&self, key: &str, default: &str) -> String {
        match self.raw.get(key) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    /// A present value is trimmed and matched case-insensitively against the
    /// literal "true"; anything else is false. An absent key keeps the
    /// default untouched.
    pub(crate) fn boolean(&self, key: &str, default: bool) -> bool {
        match self.raw.get(key) {
            Some(value) => value.trim().eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Non-failing integer parse: unparsable or absent keeps the default
    pub(crate) fn integer(&self, key: &str, default: u32) -> u32 {
        self.raw.get(key).and_then(|value| value.trim().parse().ok()).unwrap_or(default)
    }

    /// Split on `;`, `,` or `/`, dropping empty segments, preserving order
    pub(crate) fn list(&self, key: &str) -> Vec<String> {
        match self.raw.get(key) {
            Some(value) => value
                .split(LIST_SEPARATORS)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Fully resolved, typed options for one config entry.
///
/// One value is created per `(Config, compiler)` pair at resolution time and
/// never mutated afterwards; instances share no state, so a batch can be
/// resolved concurrently without synchronization.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "compiler", rename_all = "camelCase")]
pub enum ResolvedOptions {
    Sass(SassOptions),
    Less(LessOptions),
    Stylus(StylusOptions),
}

impl ResolvedOptions {
    /// Resolve the variant selected by the config's compiler name.
    ///
    /// The name match is case-insensitive and accepts the common aliases
    /// ("scss" for sass, "styl" for stylus). Unknown names are the only
    /// failure mode; per-key resolution itself cannot fail.
    pub fn from_config(config: &Config) -> Result<Self, WebCompileError> {
        match config.compiler_name.trim().to_ascii_lowercase().as_str() {
            SassOptions::NAME | "scss" => Ok(Self::Sass(SassOptions::from_config(config))),
            LessOptions::NAME => Ok(Self::Less(LessOptions::from_config(config))),
            StylusOptions::NAME | "styl" => Ok(Self::Stylus(StylusOptions::from_config(config))),
            other => Err(WebCompileError::UnknownCompiler(other.to_string())),
        }
    }

    /// Canonical name of the compiler family this variant applies to
    pub fn compiler_name(&self) -> &'static str {
        match self {
            Self::Sass(_) => SassOptions::NAME,
            Self::Less(_) => LessOptions::NAME,
            Self::Stylus(_) => StylusOptions::NAME,
        }
    }

    /// Output style, present in every variant
    pub fn output_style(&self) -> &str {
        match self {
            Self::Sass(options) => &options.output_style,
            Self::Less(options) => &options.output_style,
            Self::Stylus(options) => &options.output_style,
        }
    }

    /// Source map root, present in every variant
    pub fn source_map_root(&self) -> &str {
        match self {
            Self::Sass(options) => &options.source_map_root,
            Self::Less(options) => &options.source_map_root,
            Self::Stylus(options) => &options.source_map_root,
        }
    }
}
