//! Consign CLI Library
//!
//! This crate binds the engine-agnostic consign core onto clap and crossterm.
//! It turns parsed command descriptors into clap argument declarations, builds
//! the per-invocation parameter store from clap's matches, and provides the
//! console registry/runner plus a styled terminal output sink.
//!
//! # Key Features
//!
//! - **Native Binding**: Map command descriptors onto clap subcommands,
//!   preserving declaration order for positional binding
//! - **Console Runner**: Register commands from factories and dispatch one
//!   invocation through the execution pipeline
//! - **Styled Output**: A crossterm-backed implementation of the core
//!   `Output` trait with fixed info/success/warning/error styles
//!
//! # Examples
//!
//! Registering and running a command:
//!
//! ```no_run
//! use consign_cli::console::Console;
//! use consign_cli::output::TermOutput;
//! use consign_core::command::Command;
//! use consign_core::error::Abort;
//! use consign_core::output::LogLogger;
//! use consign_core::params::Params;
//!
//! struct Greet;
//!
//! impl Command for Greet {
//!     fn signature(&self) -> String {
//!         "greet {name}".to_string()
//!     }
//!
//!     fn description(&self) -> String {
//!         "Greet someone by name".to_string()
//!     }
//!
//!     fn handle(&self, params: &mut Params) -> Result<i32, Abort> {
//!         println!("Hello, {}!", params.get("name", "world"));
//!         Ok(0)
//!     }
//! }
//!
//! let mut console = Console::new(
//!     "demo",
//!     Box::new(TermOutput::new()),
//!     Box::new(LogLogger),
//! );
//! console.register_command(|| Box::new(Greet))?;
//! let _exit_code = console.run()?;
//! # Ok::<(), consign_core::error::Error>(())
//! ```

pub mod binding;
pub mod console;
pub mod output;
