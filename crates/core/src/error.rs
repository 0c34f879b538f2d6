use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Signature `{}` contains no command name.", .0)]
    EmptyCommandName(String),

    #[error("No command registered under the name `{}`.", .0)]
    UnknownCommand(String),
}

/// A business-level failure raised by middleware or a handler.
///
/// This is the one error kind the execution pipeline recovers from locally:
/// it is logged, surfaced to the output sink as a single error line, and
/// mapped to the reserved exit code `1`. Programming defects are panics and
/// propagate past the pipeline unchanged.
#[derive(Error, Debug)]
#[error("{}", .message)]
pub struct Abort {
    message: String,
}

impl Abort {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
