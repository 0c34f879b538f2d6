//! Output sink and exception logger seams.
//!
//! Terminal rendering is not this crate's business: the pipeline and the
//! commands it runs write through the [`Output`] trait, and the host supplies
//! an implementation. Likewise, exception diagnostics go through [`Logger`];
//! the user-visible error line and the logged diagnostic are separate
//! channels.

use indexmap::IndexMap;

/// One table row: column name → cell value, in column order.
pub type Row = IndexMap<String, String>;

/// The terminal the framework writes to. Every call is fire-and-forget.
pub trait Output {
    fn writeln(&self, message: &str);

    fn info(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);

    fn newline(&self);

    /// Renders rows as a table. With no explicit `headers`, the first row's
    /// keys are used. An empty `rows` set must produce a "no results" notice
    /// rather than an empty table.
    fn table(&self, rows: &[Row], headers: Option<&[String]>);
}

/// Where the pipeline sends exception diagnostics. Fire-and-forget; nothing
/// is returned to the pipeline.
pub trait Logger {
    fn log_exception(&self, exception: &dyn std::error::Error);
}

/// Forwards exceptions to the `log` crate at error level.
pub struct LogLogger;

impl Logger for LogLogger {
    fn log_exception(&self, exception: &dyn std::error::Error) {
        log::error!("{exception}");
    }
}
