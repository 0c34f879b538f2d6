//! Descriptor → clap binding.
//!
//! A pure structural transform: each parameter definition becomes one clap
//! `Arg`, in declaration order, because positional binding depends on that
//! order. Nothing here pre-validates; duplicate names or ordering conflicts
//! surface from clap itself at registration or parse time.

use clap::{Arg, ArgMatches};
use indexmap::IndexMap;

use consign_core::descriptor::{CommandDescriptor, ParameterDefinition, ParameterKind};
use consign_core::params::Params;

/// Builds the clap subcommand for a descriptor.
#[must_use]
pub fn bind(descriptor: &CommandDescriptor, description: &str) -> clap::Command {
    let mut command = clap::Command::new(descriptor.name.clone()).about(description.to_string());

    for definition in &descriptor.definitions {
        command = command.arg(bind_parameter(definition));
    }

    command
}

fn bind_parameter(definition: &ParameterDefinition) -> Arg {
    let mut arg = Arg::new(definition.name.clone());

    if !definition.description.is_empty() {
        arg = arg.help(definition.description.clone());
    }

    match definition.kind {
        ParameterKind::Option => {
            arg = arg.long(definition.name.clone());

            // "Required" for an option means its value is required when the
            // option is used, never that the option itself must be passed.
            if definition.required {
                arg = arg.num_args(1);
            } else {
                arg = arg.num_args(0..=1);
                if let Some(default) = &definition.default {
                    arg = arg
                        .default_value(default.clone())
                        .default_missing_value(default.clone());
                }
            }
        }
        ParameterKind::Argument => {
            arg = arg.required(definition.required);
        }
    }

    arg
}

/// Builds the invocation's parameter store from what clap resolved. Every
/// declared parameter gets a key; a `None` value means clap resolved nothing
/// for it.
#[must_use]
pub fn params_from_matches(descriptor: &CommandDescriptor, matches: &ArgMatches) -> Params {
    let mut arguments: IndexMap<String, Option<String>> = IndexMap::new();
    let mut options: IndexMap<String, Option<String>> = IndexMap::new();

    for definition in &descriptor.definitions {
        let value = matches.get_one::<String>(&definition.name).cloned();

        match definition.kind {
            ParameterKind::Argument => arguments.insert(definition.name.clone(), value),
            ParameterKind::Option => options.insert(definition.name.clone(), value),
        };
    }

    Params::new(arguments, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use consign_core::signature;

    fn descriptor(signature_text: &str) -> CommandDescriptor {
        signature::parse(signature_text).unwrap()
    }

    #[test]
    fn test_required_argument_is_enforced_by_clap() {
        let descriptor = descriptor("greet {name}");
        let command = bind(&descriptor, "");

        assert!(command
            .clone()
            .try_get_matches_from(["greet", "Ada"])
            .is_ok());
        assert!(command.try_get_matches_from(["greet"]).is_err());
    }

    #[test]
    fn test_optional_argument_may_be_omitted() {
        let descriptor = descriptor("sync {source} {target?}");
        let command = bind(&descriptor, "");

        let matches = command.try_get_matches_from(["sync", "a"]).unwrap();
        let params = params_from_matches(&descriptor, &matches);

        assert_eq!(params.get("source", ""), "a");
        assert!(params.has("target"));
        assert_eq!(params.get("target", "fallback"), "fallback");
    }

    #[test]
    fn test_positional_arguments_bind_in_declaration_order() {
        let descriptor = descriptor("sync {source} {target?}");
        let command = bind(&descriptor, "");

        let matches = command.try_get_matches_from(["sync", "a", "b"]).unwrap();
        let params = params_from_matches(&descriptor, &matches);

        assert_eq!(params.get("source", ""), "a");
        assert_eq!(params.get("target", ""), "b");
    }

    #[test]
    fn test_option_default_applies_when_absent() {
        let descriptor = descriptor("sync {--batch=10:Batch size}");
        let command = bind(&descriptor, "");

        let matches = command.try_get_matches_from(["sync"]).unwrap();
        let params = params_from_matches(&descriptor, &matches);

        assert_eq!(params.get("batch", ""), "10");
    }

    #[test]
    fn test_option_value_overrides_default() {
        let descriptor = descriptor("sync {--batch=10}");
        let command = bind(&descriptor, "");

        let matches = command
            .try_get_matches_from(["sync", "--batch", "25"])
            .unwrap();
        let params = params_from_matches(&descriptor, &matches);

        assert_eq!(params.get("batch", ""), "25");
    }

    #[test]
    fn test_required_value_option_is_absent_when_not_passed() {
        let descriptor = descriptor("greet {name} {--loud}");
        let command = bind(&descriptor, "");

        let matches = command.try_get_matches_from(["greet", "Ada"]).unwrap();
        let params = params_from_matches(&descriptor, &matches);

        assert_eq!(params.get("name", ""), "Ada");
        assert!(params.has("loud"));
        assert_eq!(params.get("loud", ""), "");
    }

    #[test]
    fn test_required_value_option_rejects_bare_flag() {
        let descriptor = descriptor("greet {name} {--loud}");
        let command = bind(&descriptor, "");

        assert!(command
            .try_get_matches_from(["greet", "Ada", "--loud"])
            .is_err());
    }

    #[test]
    fn test_help_text_comes_from_description() {
        let descriptor = descriptor("sync {--count=5:Number of items}");
        let command = bind(&descriptor, "Sync things");

        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "count")
            .unwrap();
        assert_eq!(arg.get_help().map(ToString::to_string), Some("Number of items".to_string()));
    }
}
