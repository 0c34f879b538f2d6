//! Signature parsing for consign commands.
//!
//! A signature is a compact string describing a command's name and its
//! parameters, for example:
//!
//! ```text
//! sync:items {source} {target?} {--dry-run} {--batch=10:Batch size}
//! ```
//!
//! Everything outside `{...}` tokens is the command name. Tokens starting
//! with `--` are options (`--name[=default][:description]`); everything else
//! is a positional argument (`name[?][:description]`). The grammar is
//! intentionally minimal: single-character delimiters, no escaping, no
//! nesting. Signatures are authored by the same codebase that consumes them.

use log::warn;

use crate::descriptor::{CommandDescriptor, ParameterDefinition, ParameterKind};
use crate::error::{Error, Result};

/// Parses a signature string into a [`CommandDescriptor`].
///
/// Parameter definitions are emitted in token order, without deduplication:
/// a duplicate name is a caller-visible defect that surfaces from the host
/// CLI engine at registration time, not something the parser masks.
///
/// A token with an empty body (such as `{}` or `{--}`) is skipped with a
/// warning rather than failing the whole signature.
///
/// # Errors
///
/// Returns [`Error::EmptyCommandName`] if removing all tokens and trimming
/// leaves no command name.
pub fn parse(signature: &str) -> Result<CommandDescriptor> {
    let mut name = String::new();
    let mut definitions: Vec<ParameterDefinition> = Vec::new();

    let mut rest = signature;
    while let Some(open) = rest.find('{') {
        name.push_str(&rest[..open]);

        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            // An unterminated brace is not a token; it stays in the name.
            name.push_str(&rest[open..]);
            rest = "";
            break;
        };

        if let Some(definition) = parse_token(&tail[..close]) {
            definitions.push(definition);
        }

        rest = &tail[close + 1..];
    }
    name.push_str(rest);

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::EmptyCommandName(signature.to_string()));
    }

    Ok(CommandDescriptor { name, definitions })
}

/// Parses a single raw token (the text between one `{` and `}` pair).
///
/// Returns `None` for a token whose parameter name comes out empty.
fn parse_token(token: &str) -> Option<ParameterDefinition> {
    // The description splits off before any option/argument parsing so that
    // a description containing `=` or `?` is never read as syntax.
    let (body, description) = match token.split_once(':') {
        Some((body, description)) => (body, description),
        None => (token, ""),
    };

    let definition = if body.starts_with("--") {
        parse_option(body, description)
    } else {
        parse_argument(body, description)
    };

    if definition.is_none() {
        warn!("Skipping malformed signature token `{{{token}}}`");
    }

    definition
}

fn parse_option(body: &str, description: &str) -> Option<ParameterDefinition> {
    let raw = body.trim_start_matches('-');

    let (name, required, default) = match raw.split_once('=') {
        // `--flag=` keeps the option required: an empty default means "no
        // default supplied", not "default is the empty string".
        Some((name, "")) => (name, true, None),
        Some((name, default)) => (name, false, Some(default.to_string())),
        None => (raw, true, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(ParameterDefinition {
        name: name.to_string(),
        kind: ParameterKind::Option,
        required,
        default,
        description: description.to_string(),
    })
}

fn parse_argument(body: &str, description: &str) -> Option<ParameterDefinition> {
    let (name, required) = match body.strip_suffix('?') {
        Some(name) => (name, false),
        None => (body, true),
    };

    if name.is_empty() {
        return None;
    }

    Some(ParameterDefinition {
        name: name.to_string(),
        kind: ParameterKind::Argument,
        required,
        // Optionality of an argument is governed solely by the trailing `?`;
        // arguments never carry defaults.
        default: None,
        description: description.to_string(),
    })
}
