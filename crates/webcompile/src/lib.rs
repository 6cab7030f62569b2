pub mod aggregate;
pub mod cli;
pub mod config;
pub mod options;
pub mod reporter;
pub mod types;

pub use aggregate::{AggregateStatus, Aggregation, ErrorSink, aggregate, publish};
pub use options::{LessOptions, ResolvedOptions, SassOptions, StylusOptions};
pub use types::{CompilerError, CompilerResult, Config, WebCompileError};

use rayon::prelude::*;

/// Resolve options for every config entry in a batch.
///
/// Each entry resolves independently against the variant its compiler name
/// selects, and resolution is a pure function of the entry, so the batch
/// runs in parallel. Output order matches input order.
///
/// # Example
/// ```
/// use webcompile::{Config, resolve_all};
///
/// let configs = vec![Config {
///     source_path: "scss/site.scss".into(),
///     output_path: "css/site.css".into(),
///     compiler_name: "sass".into(),
///     options: Default::default(),
///     source_map: false,
/// }];
///
/// let resolved = resolve_all(&configs).unwrap();
/// assert_eq!(resolved[0].output_style(), "expanded");
/// ```
pub fn resolve_all(configs: &[Config]) -> Result<Vec<ResolvedOptions>, WebCompileError> {
    configs.par_iter().map(ResolvedOptions::from_config).collect()
}
