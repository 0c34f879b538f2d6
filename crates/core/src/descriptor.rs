use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whether a parameter binds positionally or by `--name`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Argument,
    Option,
}

/// One parsed token from a command signature.
///
/// `default` is only meaningful when `required` is false; arguments never
/// carry one.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub default: Option<String>,
    pub description: String,
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParameterKind::Argument => write!(formatter, "`{}`", self.name)?,
            ParameterKind::Option => write!(formatter, "`--{}`", self.name)?,
        }

        if !self.description.is_empty() {
            write!(formatter, " ({})", self.description)?;
        }

        Ok(())
    }
}

/// The full parsed structure for one command: its name plus its parameter
/// definitions in declaration order.
///
/// Created once at registration and immutable thereafter. The order of
/// `definitions` matters: positional arguments bind by it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub definitions: Vec<ParameterDefinition>,
}

impl Display for CommandDescriptor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_option() -> ParameterDefinition {
        ParameterDefinition {
            name: "batch".to_string(),
            kind: ParameterKind::Option,
            required: false,
            default: Some("10".to_string()),
            description: "Batch size".to_string(),
        }
    }

    #[test]
    fn test_argument_display_includes_description() {
        let definition = ParameterDefinition {
            name: "source".to_string(),
            kind: ParameterKind::Argument,
            required: true,
            default: None,
            description: "Where to read from".to_string(),
        };

        assert_eq!(definition.to_string(), "`source` (Where to read from)");
    }

    #[test]
    fn test_option_display_without_description() {
        let definition = ParameterDefinition {
            name: "dry-run".to_string(),
            kind: ParameterKind::Option,
            required: true,
            default: None,
            description: String::new(),
        };

        assert_eq!(definition.to_string(), "`--dry-run`");
    }

    #[test]
    fn test_option_display_includes_description() {
        assert_eq!(batch_option().to_string(), "`--batch` (Batch size)");
    }

    #[test]
    fn test_descriptor_displays_its_name() {
        let descriptor = CommandDescriptor {
            name: "sync:items".to_string(),
            definitions: vec![batch_option()],
        };

        assert_eq!(descriptor.to_string(), "sync:items");
    }

    #[test]
    fn test_descriptor_survives_serialization() {
        let descriptor = CommandDescriptor {
            name: "sync:items".to_string(),
            definitions: vec![batch_option()],
        };

        let yaml = serde_yaml::to_string(&descriptor).unwrap();
        let restored: CommandDescriptor = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(restored, descriptor);
    }
}
