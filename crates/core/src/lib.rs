//! Consign Core Library
//!
//! This crate provides the engine-agnostic core of consign, a console
//! framework that turns compact signature strings into structured command
//! definitions and executes registered commands through a fixed pipeline of
//! middleware, the handler itself, and interceptors.
//!
//! # Key Features
//!
//! - **Signature Parsing**: Turn strings like `sync:items {source} {--batch=10}`
//!   into an ordered command descriptor
//! - **Layered Parameters**: Resolve values through overrides, named options,
//!   and positional arguments, in that precedence order
//! - **Execution Pipeline**: Ordered middleware, handler, and interceptor
//!   execution with abort-to-exit-code mapping
//! - **Output and Logging Seams**: Small traits the host implements for styled
//!   terminal output and exception logging
//! - **Error Handling**: Dedicated error types for registration failures and
//!   business-level aborts
//!
//! # Examples
//!
//! Parsing a signature into a command descriptor:
//!
//! ```
//! use consign_core::signature;
//!
//! let descriptor = signature::parse("greet {name} {--loud}")?;
//! assert_eq!(descriptor.name, "greet");
//! assert_eq!(descriptor.definitions.len(), 2);
//! # Ok::<(), consign_core::error::Error>(())
//! ```

pub mod command;
pub mod descriptor;
pub mod error;
pub mod output;
pub mod params;
pub mod pipeline;
pub mod signature;
