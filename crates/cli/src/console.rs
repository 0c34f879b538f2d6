//! Command registry and runner.

use std::ffi::OsString;

use indexmap::IndexMap;

use consign_core::command::Command;
use consign_core::descriptor::CommandDescriptor;
use consign_core::error::{Error, Result};
use consign_core::output::{Logger, Output};
use consign_core::{pipeline, signature};

use crate::binding;

struct Registered {
    descriptor: CommandDescriptor,
    command: Box<dyn Command>,
}

/// Holds the registered commands and dispatches one invocation through clap
/// and the execution pipeline.
pub struct Console {
    name: String,
    output: Box<dyn Output>,
    logger: Box<dyn Logger>,
    commands: IndexMap<String, Registered>,
}

impl Console {
    #[must_use]
    pub fn new(name: &str, output: Box<dyn Output>, logger: Box<dyn Logger>) -> Self {
        Self {
            name: name.to_string(),
            output,
            logger,
            commands: IndexMap::new(),
        }
    }

    /// Registers a command. The factory is invoked once, immediately, and the
    /// command's signature is parsed right away so a bad signature fails at
    /// registration rather than at dispatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature contains no command name.
    pub fn register_command<F>(&mut self, factory: F) -> Result<()>
    where
        F: FnOnce() -> Box<dyn Command>,
    {
        let command = factory();
        let descriptor = signature::parse(&command.signature())?;

        self.commands.insert(
            descriptor.name.clone(),
            Registered {
                descriptor,
                command,
            },
        );

        Ok(())
    }

    /// Runs one invocation from the process arguments and returns its exit
    /// code.
    ///
    /// # Errors
    ///
    /// Returns an error if clap matches a subcommand that is not registered,
    /// which indicates a registration bug rather than user error.
    pub fn run(&self) -> Result<i32> {
        self.run_from(std::env::args())
    }

    /// Runs one invocation from the given argument list.
    ///
    /// Engine-level failures (missing required argument, unknown flag, help
    /// requests) are printed by clap and surface as clap's own exit code;
    /// everything else runs the matched command's pipeline and returns the
    /// code it produced.
    ///
    /// # Errors
    ///
    /// Returns an error if clap matches a subcommand that is not registered.
    pub fn run_from<I, T>(&self, argv: I) -> Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.build_app().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(error) => {
                let _ = error.print();
                return Ok(error.exit_code());
            }
        };

        let (name, sub_matches) = match matches.subcommand() {
            Some(subcommand) => subcommand,
            // `subcommand_required` turns bare invocations into a clap error
            // handled above.
            None => return Ok(0),
        };

        let registered = self
            .commands
            .get(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;

        let mut params = binding::params_from_matches(&registered.descriptor, sub_matches);

        Ok(pipeline::execute(
            registered.command.as_ref(),
            &mut params,
            self.output.as_ref(),
            self.logger.as_ref(),
        ))
    }

    fn build_app(&self) -> clap::Command {
        let mut app = clap::Command::new(self.name.clone())
            .subcommand_required(true)
            .arg_required_else_help(true);

        for registered in self.commands.values() {
            app = app.subcommand(binding::bind(
                &registered.descriptor,
                &registered.command.description(),
            ));
        }

        app
    }
}
