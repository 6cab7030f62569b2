use crate::aggregate::ErrorSink;
use crate::options::ResolvedOptions;
use crate::types::{CompilerError, Config};

/// Error sink that renders diagnostics on stderr and the status line on
/// stdout. A terminal cannot retract output, so clearing is a no-op and
/// "bring to front" has nothing to do.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for ConsoleSink {
    fn clear_all(&mut self) {}

    fn report(&mut self, errors: &[CompilerError]) {
        for error in errors {
            let kind = if error.is_warning { "warning" } else { "error" };
            eprintln!(
                "{}({},{}): {}: {}",
                error.file_name, error.line_number, error.column_number, kind, error.message
            );
        }
    }

    fn bring_to_front(&mut self) {}

    fn set_status(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub fn report_resolved_text(configs: &[Config], resolved: &[ResolvedOptions]) {
    for (config, options) in configs.iter().zip(resolved) {
        println!(
            "{} -> {} [{}, style: {}]",
            config.source_path.display(),
            config.output_path.display(),
            options.compiler_name(),
            if options.output_style().is_empty() { "default" } else { options.output_style() },
        );
    }
    println!("\n{} file(s) configured", configs.len());
}

pub fn report_resolved_json(resolved: &[ResolvedOptions]) {
    println!("{}", serde_json::to_string_pretty(resolved).unwrap());
}
