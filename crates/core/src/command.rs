//! The command capability set: handler, middleware, and interceptors.

use crate::error::Abort;
use crate::params::Params;

/// A pre-handler processing step. Middleware may mutate the parameter store
/// (commonly via [`Params::set`]) or abort the invocation.
pub trait Middleware {
    /// # Errors
    ///
    /// Returns an [`Abort`] to stop the invocation before the handler runs.
    fn process(&self, params: &mut Params) -> Result<(), Abort>;
}

/// A post-handler observation step. Interceptors see the store and the exit
/// code but cannot change the code the pipeline returns.
pub trait Interceptor {
    fn process(&self, params: &Params, exit_code: i32);
}

/// A registered console command.
///
/// Middleware and interceptors are an explicit capability set: every command
/// carries both sequences, empty by default, rather than optionally exposing
/// them behind runtime type checks.
pub trait Command {
    /// The signature string this command is registered under, e.g.
    /// `sync:items {source} {target?} {--dry-run}`.
    fn signature(&self) -> String;

    fn description(&self) -> String;

    /// Middleware to run before the handler, in order. Computed fresh per
    /// invocation, so it may depend on current parameter values.
    fn middleware(&self, params: &Params) -> Vec<Box<dyn Middleware>> {
        let _ = params;
        Vec::new()
    }

    /// Runs the command and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an [`Abort`] for business-level failures; the pipeline maps
    /// those to exit code `1`.
    fn handle(&self, params: &mut Params) -> Result<i32, Abort>;

    /// Interceptors to run after the handler, in order. Computed after the
    /// handler ran, so it may depend on handler side effects reflected in the
    /// store.
    fn interceptors(&self, params: &Params) -> Vec<Box<dyn Interceptor>> {
        let _ = params;
        Vec::new()
    }
}
