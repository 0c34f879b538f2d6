//! Per-invocation execution pipeline.
//!
//! One invocation steps through middleware, the handler, and interceptors,
//! strictly in that order, each group in the exact order its provider
//! produced. Aborts are an explicit result value, not stack unwinding: an
//! `Err(Abort)` from middleware or the handler skips everything that follows,
//! including all interceptors.

use crate::command::Command;
use crate::error::Abort;
use crate::output::{Logger, Output};
use crate::params::Params;

/// The exit code reserved for invocations aborted by an [`Abort`]. Handlers
/// choosing their own codes must not rely on `1` meaning anything else.
pub const ABORT_EXIT_CODE: i32 = 1;

/// Runs one command invocation to completion and returns its exit code.
///
/// On success the handler's exit code passes through unchanged, whatever its
/// value. On abort the exception is logged, exactly one error line goes to
/// the output sink, and [`ABORT_EXIT_CODE`] is returned. Interceptors cannot
/// rewrite the code: they observe it after the handler ran.
pub fn execute(
    command: &dyn Command,
    params: &mut Params,
    output: &dyn Output,
    logger: &dyn Logger,
) -> i32 {
    match dispatch(command, params) {
        Ok(exit_code) => {
            for interceptor in command.interceptors(params) {
                interceptor.process(params, exit_code);
            }

            exit_code
        }
        Err(abort) => {
            logger.log_exception(&abort);
            output.error(abort.message());
            ABORT_EXIT_CODE
        }
    }
}

/// The abortable stretch of the pipeline: middleware, then the handler.
fn dispatch(command: &dyn Command, params: &mut Params) -> Result<i32, Abort> {
    for middleware in command.middleware(params) {
        middleware.process(params)?;
    }

    command.handle(params)
}
